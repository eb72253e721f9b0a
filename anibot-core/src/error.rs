use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnibotError {
    /// Chat transport failure (send, edit, chat action).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Dialog log error: {0}")]
    DialogLog(String),
}

pub type Result<T> = std::result::Result<T, AnibotError>;
