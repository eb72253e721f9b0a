use thiserror::Error;

/// Router-level failures that are turned into a generic user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("malformed callback payload: {0}")]
    MalformedPayload(String),
}
