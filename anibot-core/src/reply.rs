//! Outbound reply description: text, parse format and optional keyboard. Transport adapters map it to API calls.

use serde::{Deserialize, Serialize};

/// How the reply text is parsed by the chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

/// A message-attached button that triggers a callback query carrying `payload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    pub payload: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// Keyboard attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyMarkup {
    /// Persistent on-screen button grid; rows of labels.
    Keyboard(Vec<Vec<String>>),
    /// Buttons attached to this message.
    Inline(Vec<Vec<InlineButton>>),
}

impl ReplyMarkup {
    /// Number of inline buttons, zero for reply keyboards.
    pub fn inline_button_count(&self) -> usize {
        match self {
            ReplyMarkup::Inline(rows) => rows.iter().map(Vec::len).sum(),
            ReplyMarkup::Keyboard(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub markup: Option<ReplyMarkup>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            markup: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            markup: None,
        }
    }

    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.markup = Some(markup);
        self
    }
}
