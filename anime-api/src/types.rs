//! Anime payloads returned by the API. Field names follow the Jikan v4 JSON shape.

use serde::{Deserialize, Serialize};

/// Short form used by search and top-list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    #[serde(rename = "mal_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Full record returned by the details and random endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetail {
    #[serde(rename = "mal_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
}

/// `{ "data": ... }` envelope. A missing or null `data` field deserializes to `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}
