//! Dataset error types.

use std::path::PathBuf;

/// Errors that can occur when loading the route/stop dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON of the expected shape
    #[error("failed to parse dataset {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
