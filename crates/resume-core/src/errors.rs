use thiserror::Error;

/// Error type for the persistence boundary.
///
/// Migration, scoring, and layout derivation are infallible by contract —
/// every malformed input degrades to a well-defined default. Only reading
/// and writing the persisted document can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
