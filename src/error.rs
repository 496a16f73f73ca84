use thiserror::Error;

/// One of the compute inputs did not parse as a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid numeric input: enter valid numbers for every field")]
pub struct ValidationError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
