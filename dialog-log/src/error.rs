//! Dialog log error types.

use thiserror::Error;

/// Errors that can occur when writing dialog transcripts.
#[derive(Error, Debug)]
pub enum DialogLogError {
    #[error("Cannot create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot append to {path}: {source}")]
    Append {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<DialogLogError> for anibot_core::AnibotError {
    fn from(e: DialogLogError) -> Self {
        anibot_core::AnibotError::DialogLog(e.to_string())
    }
}
