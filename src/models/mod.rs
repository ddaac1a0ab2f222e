pub mod game;
pub mod score;

pub use game::{
    // Puzzle types
    Difficulty, Direction, Grid, PlacedWord, Position, Puzzle, PuzzleConfig,
    // Config bounds
    MAX_GRID_SIZE, MAX_TIME_LIMIT, MAX_WORD_COUNT, MIN_GRID_SIZE, MIN_TIME_LIMIT,
};
pub use score::ScoreRecord;
