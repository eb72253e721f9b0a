//! # anime-handlers
//!
//! Conversation routing for the anime bot: [`AnimeRouter`] (a chain [`anibot_core::Handler`]),
//! the per-user [`SessionStore`], and the [`formatter`] that renders API payloads into replies.

mod error;
pub mod formatter;
mod router;
mod session;

pub use error::RouterError;
pub use router::{
    AnimeRouter, MSG_DETAILS_FAILED, MSG_DETAILS_NOT_FOUND, MSG_RANDOM_EMPTY, MSG_RANDOM_FAILED,
    MSG_SEARCH_FAILED, MSG_SEARCH_NOT_FOUND, MSG_SEARCH_PROMPT, MSG_SEARCH_RESULTS, MSG_TOP_EMPTY,
    MSG_TOP_FAILED, MSG_USE_MENU,
};
pub use session::{ConversationState, SessionStore};
