//! Test doubles: a recording [`Bot`] and a canned [`AnimeApi`]. No network.

use std::sync::Mutex;

use anibot_core::{AnibotError, Bot, Chat, Reply, Result};
use anime_api::{AnimeApi, AnimeDetail, AnimeSummary, ApiError};
use async_trait::async_trait;

/// One outbound operation observed by [`MockBot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Reply { chat_id: i64, reply: Reply },
    Edit { chat_id: i64, message_id: String, reply: Reply },
    Typing { chat_id: i64 },
}

/// Records every send/edit/typing call; optionally fails sends.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    pub fail_sends: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Sends and edits only, without typing indicators.
    pub fn replies(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| !matches!(s, Sent::Typing { .. }))
            .collect()
    }

    /// The single reply sent so far; panics if there is not exactly one.
    pub fn only_reply(&self) -> Sent {
        let replies = self.replies();
        assert_eq!(replies.len(), 1, "expected exactly one reply, got {:?}", replies);
        replies.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String> {
        if self.fail_sends {
            return Err(AnibotError::Bot("mock send failure".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(Sent::Reply {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(sent.len().to_string())
    }

    async fn edit_reply(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()> {
        if self.fail_sends {
            return Err(AnibotError::Bot("mock edit failure".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            reply: reply.clone(),
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Typing { chat_id: chat.id });
        Ok(())
    }
}

/// A canned API answer: a value or a transport failure.
#[derive(Debug, Clone)]
pub enum Canned<T> {
    Ok(T),
    Fail,
}

impl<T: Default> Default for Canned<T> {
    fn default() -> Self {
        Canned::Ok(T::default())
    }
}

impl<T: Clone> Canned<T> {
    fn get(&self) -> std::result::Result<T, ApiError> {
        match self {
            Canned::Ok(value) => Ok(value.clone()),
            Canned::Fail => Err(ApiError::Parse("mock failure".to_string())),
        }
    }
}

/// [`AnimeApi`] returning canned answers and recording calls as `"search:{q}"`, `"details:{id}"`, `"top"`, `"random"`.
#[derive(Default)]
pub struct MockApi {
    pub search: Canned<Vec<AnimeSummary>>,
    pub details: Canned<Option<AnimeDetail>>,
    pub top: Canned<Vec<AnimeSummary>>,
    pub random: Canned<Option<AnimeDetail>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnimeApi for MockApi {
    async fn search_anime(&self, query: &str) -> std::result::Result<Vec<AnimeSummary>, ApiError> {
        self.calls.lock().unwrap().push(format!("search:{}", query));
        self.search.get()
    }

    async fn get_anime_details(&self, id: i64) -> std::result::Result<Option<AnimeDetail>, ApiError> {
        self.calls.lock().unwrap().push(format!("details:{}", id));
        self.details.get()
    }

    async fn get_top_anime(&self) -> std::result::Result<Vec<AnimeSummary>, ApiError> {
        self.calls.lock().unwrap().push("top".to_string());
        self.top.get()
    }

    async fn get_random_anime(&self) -> std::result::Result<Option<AnimeDetail>, ApiError> {
        self.calls.lock().unwrap().push("random".to_string());
        self.random.get()
    }
}

pub fn summary(id: i64, title: &str, year: Option<i32>, score: Option<f64>) -> AnimeSummary {
    AnimeSummary {
        id,
        title: title.to_string(),
        year,
        score,
    }
}

pub fn detail(id: i64, title: &str) -> AnimeDetail {
    AnimeDetail {
        id,
        title: title.to_string(),
        year: Some(1998),
        score: Some(8.75),
        synopsis: Some("Crime is timeless.".to_string()),
        episodes: Some(26),
    }
}
