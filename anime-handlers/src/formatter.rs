//! Turns API payloads into display text and keyboards. Pure functions; character limits count Unicode scalar values.

use anibot_core::{InlineButton, MenuButton, ReplyMarkup};
use anime_api::{AnimeDetail, AnimeSummary, SEARCH_LIMIT};

use crate::error::RouterError;

pub const TITLE_MAX_CHARS: usize = 30;
pub const SYNOPSIS_MAX_CHARS: usize = 400;
pub const TOP_LIMIT: usize = 10;
pub const ELLIPSIS: &str = "...";
pub const DETAILS_PREFIX: &str = "details_";

const NOT_AVAILABLE: &str = "N/A";
const NO_SYNOPSIS: &str = "Нет описания";
const NO_SCORE: &str = "Нет оценки";
const UNKNOWN: &str = "Неизвестно";

pub const HELP_TEXT: &str = "📋 Доступные команды:\n\n\
🔍 Поиск аниме - найти аниме по названию\n\
🏆 Топ аниме - показать лучшие аниме\n\
🎲 Случайное аниме - получить случайное аниме\n\
ℹ️ Помощь - это сообщение";

pub fn welcome_text(first_name: &str) -> String {
    format!(
        "Привет, {}! Я бот для поиска информации об аниме.\n\nИспользуй кнопки ниже для взаимодействия:",
        first_name
    )
}

/// Persistent menu: `[[Поиск аниме, Топ аниме], [Случайное аниме, Помощь]]`.
pub fn main_menu() -> ReplyMarkup {
    ReplyMarkup::Keyboard(vec![
        vec![
            MenuButton::Search.label().to_string(),
            MenuButton::Top.label().to_string(),
        ],
        vec![
            MenuButton::Random.label().to_string(),
            MenuButton::Help.label().to_string(),
        ],
    ])
}

/// Keyboard shown while waiting for a search query.
pub fn cancel_menu() -> ReplyMarkup {
    ReplyMarkup::Keyboard(vec![vec![MenuButton::Back.label().to_string()]])
}

/// Titles longer than [`TITLE_MAX_CHARS`] are cut and suffixed with [`ELLIPSIS`].
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        title.to_string()
    }
}

fn year_or(year: Option<i32>, placeholder: &str) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Scores keep at least one decimal place (`8.0`, `8.75`).
fn score_or(score: Option<f64>, placeholder: &str) -> String {
    score
        .map(|s| format!("{:?}", s))
        .unwrap_or_else(|| placeholder.to_string())
}

pub fn details_payload(id: i64) -> String {
    format!("{}{}", DETAILS_PREFIX, id)
}

/// Extracts the anime id from a `details_{id}` callback payload.
pub fn parse_details_payload(payload: &str) -> Result<i64, RouterError> {
    payload
        .strip_prefix(DETAILS_PREFIX)
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| RouterError::MalformedPayload(payload.to_string()))
}

/// `{truncated title} ({year|N/A})`
pub fn search_button_label(summary: &AnimeSummary) -> String {
    format!(
        "{} ({})",
        truncate_title(&summary.title),
        year_or(summary.year, NOT_AVAILABLE)
    )
}

/// One inline button per row, at most [`SEARCH_LIMIT`] rows.
pub fn search_results_markup(results: &[AnimeSummary]) -> ReplyMarkup {
    ReplyMarkup::Inline(
        results
            .iter()
            .take(SEARCH_LIMIT)
            .map(|a| vec![InlineButton::new(search_button_label(a), details_payload(a.id))])
            .collect(),
    )
}

/// Minimal escaping for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// First [`SYNOPSIS_MAX_CHARS`] characters followed by [`ELLIPSIS`], whether or not anything was cut.
pub fn synopsis_excerpt(synopsis: Option<&str>) -> String {
    let head: String = synopsis
        .unwrap_or(NO_SYNOPSIS)
        .chars()
        .take(SYNOPSIS_MAX_CHARS)
        .collect();
    format!("{}{}", escape_html(&head), ELLIPSIS)
}

/// HTML detail card with a bold title.
pub fn format_detail(detail: &AnimeDetail) -> String {
    format!(
        "🎬 <b>{}</b> ({})\n\n⭐ Оценка: {}\n📺 Эпизодов: {}\n\n📝 Описание:\n{}",
        escape_html(&detail.title),
        year_or(detail.year, UNKNOWN),
        score_or(detail.score, NO_SCORE),
        detail
            .episodes
            .map(|e| e.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        synopsis_excerpt(detail.synopsis.as_deref()),
    )
}

pub fn format_random(detail: &AnimeDetail) -> String {
    format!("🎲 Случайное аниме:\n\n{}", format_detail(detail))
}

/// Numbered list `{rank}. {title} ⭐ {score|N/A}`, capped at [`TOP_LIMIT`] entries.
pub fn format_top(list: &[AnimeSummary]) -> String {
    let lines: Vec<String> = list
        .iter()
        .take(TOP_LIMIT)
        .enumerate()
        .map(|(i, a)| {
            format!(
                "{}. {} ⭐ {}",
                i + 1,
                a.title,
                score_or(a.score, NOT_AVAILABLE)
            )
        })
        .collect();
    format!("🏆 Топ аниме:\n\n{}", lines.join("\n"))
}
