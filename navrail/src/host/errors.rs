use thiserror::Error;

/// Errors emitted while talking to the embedding host.
#[derive(Debug, Error)]
pub(crate) enum HostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors emitted while loading render arguments or fonts from disk.
#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} is not a font file", .path.display())]
    NotAFont { path: std::path::PathBuf },
}
