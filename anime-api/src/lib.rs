//! # anime-api
//!
//! Gateway to a Jikan-compatible anime database: search, details by id, top list and random pick.
//! [`AnimeApi`] is the seam the conversation router depends on; [`JikanClient`] is the HTTP implementation.

mod client;
mod error;
mod types;

pub use client::{AnimeApi, JikanClient, DEFAULT_API_URL, SEARCH_LIMIT};
pub use error::ApiError;
pub use types::{AnimeDetail, AnimeSummary};
