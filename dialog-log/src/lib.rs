//! # dialog-log
//!
//! Per-user dialog transcripts: [`DialogLogger`] appends `{timestamp} {USER|BOT}: {text}` lines to
//! `user_{id}.log`, and [`DialogLogHandler`] plugs it into the handler chain.

mod error;
mod handler;
mod logger;

pub use error::DialogLogError;
pub use handler::DialogLogHandler;
pub use logger::{format_line, DialogLogger, Speaker, TIMESTAMP_FORMAT};
