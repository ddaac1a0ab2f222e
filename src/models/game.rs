use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MIN_GRID_SIZE: usize = 4;
pub const MAX_GRID_SIZE: usize = 20;
pub const MAX_WORD_COUNT: usize = 40;
pub const MIN_TIME_LIMIT: u32 = 10;
pub const MAX_TIME_LIMIT: u32 = 3600;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ConfigError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// One of the eight straight-line directions a word can run in.
///
/// `dx` steps the row and `dy` steps the column, so `Right` is `(0, 1)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
    Left,
    Up,
    UpLeft,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    /// Row and column step, each in `-1..=1`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
        }
    }

    pub fn dx(self) -> isize {
        self.delta().0
    }

    pub fn dy(self) -> isize {
        self.delta().1
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` cells away along `direction`, if it stays inside a
    /// `size` x `size` grid.
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = self.row as isize + dx * steps;
        let col = self.col as isize + dy * steps;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// A word hidden in the grid, anchored at its first letter.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub word: String,
    pub origin_row: usize,
    pub origin_col: usize,
    pub direction: Direction,
    pub found: bool,
}

impl PlacedWord {
    pub fn new(word: impl Into<String>, origin: Position, direction: Direction) -> Self {
        Self {
            word: word.into(),
            origin_row: origin.row,
            origin_col: origin.col,
            direction,
            found: false,
        }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.origin_row, self.origin_col)
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Cells covered by the word, in reading order. Cells that would fall
    /// outside the grid are omitted.
    pub fn cells(&self, size: usize) -> Vec<Position> {
        (0..self.word.len())
            .filter_map(|i| self.origin().step(self.direction, i, size))
            .collect()
    }
}

/// Square letter grid. Every cell holds one uppercase letter.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<char>>,
}

/// Wire shape of a [`Grid`] before the square check.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    rows: Vec<Vec<char>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let claimed = raw.size;
        Grid::from_rows(raw.rows)
            .filter(|grid| grid.size == claimed)
            .ok_or(ConfigError::NotSquare(claimed))
    }
}

impl Grid {
    /// Builds a grid from rows. Returns `None` unless the rows form a square.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self { size, rows })
    }

    /// Builds a grid from rows the caller already knows to be square.
    pub(crate) fn from_square_rows(rows: Vec<Vec<char>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self {
            size: rows.len(),
            rows,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Reads `len` letters starting at `origin` along `direction`.
    pub fn read(&self, origin: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                origin
                    .step(direction, i, self.size)
                    .and_then(|pos| self.get(pos))
            })
            .collect()
    }

    /// Whether `word` reads back exactly from the grid.
    pub fn contains_placement(&self, word: &PlacedWord) -> bool {
        self.read(word.origin(), word.direction, word.len()).as_deref() == Some(word.word.as_str())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    pub word_count: usize,
    pub difficulty: Difficulty,
    pub time_limit_seconds: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            word_count: 10,
            difficulty: Difficulty::Easy,
            time_limit_seconds: 300,
        }
    }
}

impl PuzzleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if !(1..=MAX_WORD_COUNT).contains(&self.word_count) {
            return Err(ConfigError::WordCount(self.word_count));
        }
        if !(MIN_TIME_LIMIT..=MAX_TIME_LIMIT).contains(&self.time_limit_seconds) {
            return Err(ConfigError::TimeLimit(self.time_limit_seconds));
        }
        Ok(())
    }
}

/// A finished puzzle: the filled grid plus the authoritative placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
    /// Selected words that could not be placed, even after substitution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<String>,
}

impl Puzzle {
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    pub fn is_complete(&self) -> bool {
        self.words.iter().all(|w| w.found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_rows(lines.iter().map(|l| l.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_direction_deltas_are_unit_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
            assert!((dx, dy) != (0, 0));
            assert!(seen.insert((dx, dy)));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up, 1, 5), None);
        assert_eq!(origin.step(Direction::DownRight, 4, 5), Some(Position::new(4, 4)));
        assert_eq!(origin.step(Direction::DownRight, 5, 5), None);
    }

    #[test]
    fn test_grid_reads_words_in_every_direction() {
        let g = grid(&["CAT", "XOX", "DOG"]);
        assert_eq!(g.read(Position::new(0, 0), Direction::Right, 3).as_deref(), Some("CAT"));
        assert_eq!(g.read(Position::new(0, 2), Direction::Left, 3).as_deref(), Some("TAC"));
        assert_eq!(g.read(Position::new(2, 0), Direction::Right, 3).as_deref(), Some("DOG"));
        assert_eq!(g.read(Position::new(0, 1), Direction::Down, 3).as_deref(), Some("AOO"));
        assert_eq!(g.read(Position::new(0, 1), Direction::Down, 4), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec!['A', 'B'], vec!['C']]).is_none());
    }

    #[test]
    fn test_deserialize_checks_square_shape() {
        let g: Grid = serde_json::from_str(r#"{"size": 2, "rows": [["A", "B"], ["C", "D"]]}"#).unwrap();
        assert_eq!(g, grid(&["AB", "CD"]));

        let ragged = serde_json::from_str::<Grid>(r#"{"size": 2, "rows": [["A", "B"], ["C"]]}"#);
        assert!(ragged.is_err(), "ragged rows must not deserialize");

        let wrong_size = serde_json::from_str::<Grid>(r#"{"size": 3, "rows": [["A", "B"], ["C", "D"]]}"#);
        assert!(wrong_size.is_err(), "size must match the rows");

        // Puzzles carry their grid through the same check.
        let puzzle = r#"{"grid": {"size": 2, "rows": [["A"], ["C", "D"]]}, "words": []}"#;
        assert!(serde_json::from_str::<Puzzle>(puzzle).is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(PuzzleConfig::default().validate().is_ok());
        let too_small = PuzzleConfig { grid_size: 2, ..PuzzleConfig::default() };
        assert!(matches!(too_small.validate(), Err(ConfigError::GridSize(2))));
        let no_words = PuzzleConfig { word_count: 0, ..PuzzleConfig::default() };
        assert!(matches!(no_words.validate(), Err(ConfigError::WordCount(0))));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: PuzzleConfig =
            serde_json::from_str(r#"{"gridSize": 8, "difficulty": "hard"}"#).unwrap();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.word_count, 10);
        assert_eq!(config.time_limit_seconds, 300);
    }
}
