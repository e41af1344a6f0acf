use thiserror::Error;

/// Defines errors that may occur while loading a translation dataset.
///
/// All variants are construction-time failures: once a store exists, its
/// queries never fail.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when the backing resource cannot be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the resource is not valid JSON
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// Error when a dataset entry is not usable as a country record
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord {
        /// Position of the record in the dataset array
        index: usize,
        reason: String,
    },
}
