//! Telegram connectivity config: token and optional Bot API URL (TELEGRAM_API_URL / TELOXIDE_API_URL, read by the binary).

use tracing::error;

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, telegram_api_url: Option<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url,
        }
    }

    /// Builds a teloxide Bot, pointing it at `telegram_api_url` when set.
    /// An unparsable URL is logged and the default Telegram endpoint is used.
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url.as_deref() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    }
}
