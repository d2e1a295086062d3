use std::path::{Path, PathBuf};

use navrail_ui_rail::GLYPH_FONT_FILE;

use crate::host::StorageError;

/// Environment variable pointing at the glyph font file.
const GLYPH_FONT_PATH_ENV: &str = "NAVRAIL_GLYPH_FONT";

/// sfnt version tags: TrueType, OpenType/CFF, Apple TrueType, collection.
const FONT_MAGIC: [&[u8; 4]; 4] = [b"\x00\x01\x00\x00", b"OTTO", b"true", b"ttcf"];

/// Return the locations searched for the glyph font, most specific first.
fn glyph_font_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = std::env::var_os(GLYPH_FONT_PATH_ENV) {
        candidates.push(PathBuf::from(path));
    }
    if let Ok(home) = std::env::var("HOME") {
        let home = Path::new(&home);
        candidates.push(
            home.join(".config")
                .join("navrail")
                .join("fonts")
                .join(GLYPH_FONT_FILE),
        );
        candidates.push(
            home.join(".local").join("share").join("fonts").join(GLYPH_FONT_FILE),
        );
    }
    candidates.push(Path::new("/usr/share/fonts").join(GLYPH_FONT_FILE));
    candidates
}

/// Read a font file, rejecting anything without an sfnt header.
pub(crate) fn load_font_from(path: &Path) -> Result<Vec<u8>, StorageError> {
    let bytes = std::fs::read(path)?;
    if !is_font_data(&bytes) {
        return Err(StorageError::NotAFont {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

/// Load the glyph font from the first candidate that holds one.
///
/// Returns `None` when no candidate exists; tiles then show page initials.
pub(crate) fn load_glyph_font() -> Option<Vec<u8>> {
    for path in glyph_font_candidates() {
        match load_font_from(&path) {
            Ok(bytes) => {
                log::info!("loaded glyph font from {}", path.display());
                return Some(bytes);
            },
            Err(StorageError::Io(err))
                if err.kind() == std::io::ErrorKind::NotFound => {},
            Err(err) => {
                log::warn!("Failed to load glyph font {}: {err}", path.display())
            },
        }
    }

    log::warn!(
        "{GLYPH_FONT_FILE} not found (set {GLYPH_FONT_PATH_ENV}), icons fall back to page initials"
    );
    None
}

fn is_font_data(bytes: &[u8]) -> bool {
    bytes
        .get(..4)
        .is_some_and(|tag| FONT_MAGIC.iter().any(|magic| tag == magic.as_slice()))
}
