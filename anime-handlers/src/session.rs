//! Per-user conversation state. Held in memory only; lost on restart.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// Where a user is in the conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    /// The search prompt was shown; the next free text is a query.
    AwaitingSearchQuery,
}

/// Map from user id to [`ConversationState`]. Users without an entry are `Idle`.
#[derive(Debug, Default)]
pub struct SessionStore {
    states: RwLock<HashMap<i64, ConversationState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: i64) -> ConversationState {
        self.states
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    pub async fn set(&self, user_id: i64, state: ConversationState) {
        let mut states = self.states.write().await;
        match state {
            ConversationState::Idle => {
                states.remove(&user_id);
            }
            other => {
                states.insert(user_id, other);
            }
        }
    }

    /// Returns the user to `Idle`.
    pub async fn reset(&self, user_id: i64) {
        self.set(user_id, ConversationState::Idle).await;
    }

    /// Number of users in a non-idle state.
    pub async fn active_count(&self) -> usize {
        self.states.read().await.len()
    }
}
