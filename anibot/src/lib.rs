//! # anibot
//!
//! Anime search Telegram bot: config, CLI, component assembly and the run entry point.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use runner::run_bot;
