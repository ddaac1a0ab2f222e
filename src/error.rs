use thiserror::Error;

use crate::models::{
    Position, MAX_GRID_SIZE, MAX_TIME_LIMIT, MAX_WORD_COUNT, MIN_GRID_SIZE, MIN_TIME_LIMIT,
};

/// Rejected puzzle settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSize(usize),
    #[error("word count {0} is outside 1..={max}", max = MAX_WORD_COUNT)]
    WordCount(usize),
    #[error("time limit {0}s is outside {min}..={max}", min = MIN_TIME_LIMIT, max = MAX_TIME_LIMIT)]
    TimeLimit(u32),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error("unknown match policy: {0:?}")]
    UnknownMatchPolicy(String),
    #[error("grid rows do not form a {0}x{0} square")]
    NotSquare(usize),
}

/// Player actions the current session cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no game in progress")]
    NoSession,
    #[error("the game is paused")]
    Paused,
    #[error("the game is over")]
    GameOver,
    #[error("cell ({row}, {col}) is outside the grid", row = .0.row, col = .0.col)]
    OutOfBounds(Position),
    #[error("select at least {min} letters to form a word")]
    SelectionTooShort { min: usize },
    #[error("all {max} hints have been used")]
    HintsExhausted { max: u32 },
    #[error("all words have been found")]
    NothingToHint,
}

#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("failed to write scores: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode scores: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
