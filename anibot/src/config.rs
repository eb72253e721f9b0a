//! Bot config: Telegram connection, anime API, dialog log directory, application log file. Loaded from env.

use anibot_telegram::TelegramConfig;
use anyhow::Result;
use std::env;

pub const DEFAULT_DIALOG_LOG_DIR: &str = "logs/dialogs";
pub const DEFAULT_LOG_FILE: &str = "logs/anibot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    telegram_api_url: Option<String>,
    /// ANIME_API_URL, Jikan v4 by default
    anime_api_url: String,
    /// DIALOG_LOG_DIR, one `user_{id}.log` per user
    dialog_log_dir: String,
    /// LOG_FILE, application tracing output
    log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set (use --token or .env)"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let anime_api_url =
            env::var("ANIME_API_URL").unwrap_or_else(|_| anime_api::DEFAULT_API_URL.to_string());
        let dialog_log_dir =
            env::var("DIALOG_LOG_DIR").unwrap_or_else(|_| DEFAULT_DIALOG_LOG_DIR.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            anime_api_url,
            dialog_log_dir,
            log_file,
        })
    }

    /// Validate config: the token is non-empty and every URL parses.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.anime_api_url).is_err() {
            anyhow::bail!("ANIME_API_URL is not a valid URL: {}", self.anime_api_url);
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram_api_url.as_deref()
    }

    pub fn anime_api_url(&self) -> &str {
        &self.anime_api_url
    }

    pub fn dialog_log_dir(&self) -> &str {
        &self.dialog_log_dir
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    /// Telegram connectivity part of this config.
    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig::new(self.bot_token.clone(), self.telegram_api_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "ANIME_API_URL",
            "DIALOG_LOG_DIR",
            "LOG_FILE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token(), "test_token");
        assert!(config.telegram_api_url().is_none());
        assert_eq!(config.anime_api_url(), "https://api.jikan.moe/v4");
        assert_eq!(config.dialog_log_dir(), "logs/dialogs");
        assert_eq!(config.log_file(), "logs/anibot.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("ANIME_API_URL", "http://localhost:9000/v4");
        env::set_var("DIALOG_LOG_DIR", "/tmp/dialogs");
        env::set_var("LOG_FILE", "/tmp/anibot.log");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token(), "custom_token");
        assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.anime_api_url(), "http://localhost:9000/v4");
        assert_eq!(config.dialog_log_dir(), "/tmp/dialogs");
        assert_eq!(config.log_file(), "/tmp/anibot.log");
        assert_eq!(config.telegram().telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_token_override_and_missing_token() {
        clear_env();
        assert!(BotConfig::load(None).is_err());

        env::set_var("BOT_TOKEN", "from_env");
        let config = BotConfig::load(Some("from_cli".to_string())).unwrap();
        assert_eq!(config.bot_token(), "from_cli");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_urls() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("TELEGRAM_API_URL", "not a url");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        env::remove_var("TELEGRAM_API_URL");
        env::set_var("ANIME_API_URL", "::bad::");
        assert!(BotConfig::load(None).unwrap().validate().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_empty_token() {
        clear_env();
        let config = BotConfig::load(Some("  ".to_string())).unwrap();
        assert!(config.validate().is_err());
        clear_env();
    }
}
