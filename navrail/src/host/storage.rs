use std::path::{Path, PathBuf};

use super::errors::StorageError;
use super::protocol::RenderArgs;

/// Environment variable overriding the initial render file location.
const CONFIG_PATH_ENV: &str = "NAVRAIL_CONFIG";

/// Return the path to the initial render JSON file.
fn render_args_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("navrail")
            .join("render.json");
    }
    std::env::temp_dir().join("navrail").join("render.json")
}

/// Load render arguments from `path`. A missing file yields defaults.
pub(crate) fn load_render_args_from(
    path: &Path,
) -> Result<RenderArgs, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(RenderArgs::default());
        },
        Err(err) => return Err(err.into()),
    };
    let args: RenderArgs = serde_json::from_str(&content)?;
    Ok(args)
}

/// Load the initial render arguments, falling back to defaults on error.
pub(crate) fn load_initial_render_args() -> RenderArgs {
    let path = render_args_path();
    match load_render_args_from(&path) {
        Ok(args) => args,
        Err(err) => {
            log::warn!(
                "Failed to load {}, using defaults: {err}",
                path.display()
            );
            RenderArgs::default()
        },
    }
}
