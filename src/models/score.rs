use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::PuzzleConfig;

/// A completed game as it is kept on the high score list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub score: i32,
    pub grid_size: i32,
    pub word_count: i32,
    pub difficulty: String,
    /// Display date, e.g. `Oct 15, 2026`.
    pub date: String,
    /// Unix milliseconds.
    #[sqlx(rename = "timestamp_ms")]
    pub timestamp: i64,
}

impl ScoreRecord {
    pub fn new(score: u32, config: &PuzzleConfig, at: DateTime<Utc>) -> Self {
        Self {
            score: i32::try_from(score).unwrap_or(i32::MAX),
            grid_size: i32::try_from(config.grid_size).unwrap_or(i32::MAX),
            word_count: i32::try_from(config.word_count).unwrap_or(i32::MAX),
            difficulty: config.difficulty.to_string(),
            date: at.format("%b %-d, %Y").to_string(),
            timestamp: at.timestamp_millis(),
        }
    }
}
