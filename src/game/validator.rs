use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    game::scorer::Scorer,
    models::{Grid, PlacedWord, Position},
};

/// Shortest selection accepted for a partial match.
pub const MIN_PARTIAL_LEN: usize = 3;

/// How a selection was matched to a word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Selected letters spell the word.
    Exact,
    /// Selected letters spell the word backwards.
    Reverse,
    /// The selection contains the word.
    Contains,
    /// The reversed selection contains the word.
    ReverseContains,
    /// The selection is part of the word.
    Partial,
    /// The reversed selection is part of the word.
    ReversePartial,
}

impl MatchKind {
    /// Relaxed matches only occur under [`MatchPolicy::Relaxed`] and earn reduced points.
    pub fn is_relaxed(self) -> bool {
        !matches!(self, MatchKind::Exact | MatchKind::Reverse)
    }
}

/// Whether selections that merely overlap a word count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Only exact and reverse spellings match.
    #[default]
    Strict,
    /// Contained and partial selections also match, for reduced points.
    Relaxed,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Strict => f.write_str("strict"),
            MatchPolicy::Relaxed => f.write_str("relaxed"),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MatchPolicy::Strict),
            "relaxed" => Ok(MatchPolicy::Relaxed),
            other => Err(ConfigError::UnknownMatchPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub kind: MatchKind,
    pub points: u32,
    /// Index of the word in the placement list.
    pub index: usize,
}

/// Checks cell selections against the placed words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordValidator {
    policy: MatchPolicy,
}

impl WordValidator {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Letters under the selected cells, in click order. `None` if any cell
    /// is outside the grid.
    pub fn extract_word(&self, grid: &Grid, positions: &[Position]) -> Option<String> {
        positions.iter().map(|pos| grid.get(*pos)).collect()
    }

    /// Match a selection to an unfound word and mark it found.
    ///
    /// Exact and reverse spellings are tried against every unfound word
    /// before any relaxed match is considered. Returns `None` and leaves
    /// `words` untouched when nothing matches.
    pub fn evaluate(
        &self,
        grid: &Grid,
        words: &mut [PlacedWord],
        positions: &[Position],
    ) -> Option<WordMatch> {
        let selected = self.extract_word(grid, positions)?;
        if selected.is_empty() {
            return None;
        }
        let reversed: String = selected.chars().rev().collect();

        let (index, kind) = Self::find_exact(words, &selected, &reversed).or_else(|| {
            match self.policy {
                MatchPolicy::Strict => None,
                MatchPolicy::Relaxed => Self::find_relaxed(words, &selected, &reversed),
            }
        })?;

        let placed = &mut words[index];
        placed.found = true;
        Some(WordMatch {
            word: placed.word.clone(),
            kind,
            points: Scorer::word_points(placed.len(), kind),
            index,
        })
    }

    fn find_exact(words: &[PlacedWord], selected: &str, reversed: &str) -> Option<(usize, MatchKind)> {
        words.iter().enumerate().filter(|(_, w)| !w.found).find_map(|(i, w)| {
            if w.word == selected {
                Some((i, MatchKind::Exact))
            } else if w.word == reversed {
                Some((i, MatchKind::Reverse))
            } else {
                None
            }
        })
    }

    fn find_relaxed(words: &[PlacedWord], selected: &str, reversed: &str) -> Option<(usize, MatchKind)> {
        let long_enough = selected.len() >= MIN_PARTIAL_LEN;
        words.iter().enumerate().filter(|(_, w)| !w.found).find_map(|(i, w)| {
            let word = w.word.as_str();
            if selected.contains(word) {
                Some((i, MatchKind::Contains))
            } else if reversed.contains(word) {
                Some((i, MatchKind::ReverseContains))
            } else if long_enough && word.contains(selected) {
                Some((i, MatchKind::Partial))
            } else if long_enough && word.contains(reversed) {
                Some((i, MatchKind::ReversePartial))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    /// 5x5 grid with CAT left-to-right at (2,2) and DOG down column 0.
    fn fixture() -> (Grid, Vec<PlacedWord>) {
        let rows = ["DXXXX", "OXXXX", "GXCAT", "XXXXX", "XXXXX"];
        let grid = Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap();
        let words = vec![
            PlacedWord::new("CAT", Position::new(2, 2), Direction::Right),
            PlacedWord::new("DOG", Position::new(0, 0), Direction::Down),
        ];
        assert!(words.iter().all(|w| grid.contains_placement(w)));
        (grid, words)
    }

    fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
        coords.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn test_exact_match() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::default();

        let result = validator
            .evaluate(&grid, &mut words, &cells(&[(2, 2), (2, 3), (2, 4)]))
            .unwrap();

        assert_eq!(result.word, "CAT");
        assert_eq!(result.kind, MatchKind::Exact);
        assert_eq!(result.points, 30);
        assert!(words[0].found);
        assert!(!words[1].found);
    }

    #[test]
    fn test_reverse_match() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::default();

        let result = validator
            .evaluate(&grid, &mut words, &cells(&[(2, 4), (2, 3), (2, 2)]))
            .unwrap();

        assert_eq!(result.word, "CAT");
        assert_eq!(result.kind, MatchKind::Reverse);
        assert_eq!(result.points, 30);
        assert!(words[0].found);
    }

    #[test]
    fn test_no_match_leaves_words_unchanged() {
        let (grid, mut words) = fixture();
        let before = words.clone();
        let validator = WordValidator::default();

        let result = validator.evaluate(&grid, &mut words, &cells(&[(0, 0), (2, 3), (2, 4)]));

        assert!(result.is_none());
        assert_eq!(words, before);
    }

    #[test]
    fn test_found_word_does_not_match_twice() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::default();
        let selection = cells(&[(2, 2), (2, 3), (2, 4)]);

        assert!(validator.evaluate(&grid, &mut words, &selection).is_some());
        assert!(validator.evaluate(&grid, &mut words, &selection).is_none());
    }

    #[test]
    fn test_selection_need_not_be_contiguous() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::default();

        // D, O, G read from anywhere on the board still spell DOG.
        let result = validator
            .evaluate(&grid, &mut words, &cells(&[(0, 0), (1, 0), (2, 0)]))
            .unwrap();
        assert_eq!(result.word, "DOG");
    }

    #[test]
    fn test_out_of_bounds_selection_is_no_match() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::default();
        assert!(validator
            .evaluate(&grid, &mut words, &cells(&[(2, 2), (2, 3), (2, 9)]))
            .is_none());
    }

    #[test]
    fn test_strict_policy_ignores_partial_selection() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::new(MatchPolicy::Strict);
        assert!(validator
            .evaluate(&grid, &mut words, &cells(&[(2, 1), (2, 2), (2, 3), (2, 4)]))
            .is_none());
    }

    #[test]
    fn test_relaxed_contains_scores_seventy_percent() {
        let (grid, mut words) = fixture();
        let validator = WordValidator::new(MatchPolicy::Relaxed);

        // XCAT contains CAT.
        let result = validator
            .evaluate(&grid, &mut words, &cells(&[(2, 1), (2, 2), (2, 3), (2, 4)]))
            .unwrap();

        assert_eq!(result.word, "CAT");
        assert_eq!(result.kind, MatchKind::Contains);
        assert_eq!(result.points, 21);
        assert!(result.points < Scorer::word_points(3, MatchKind::Exact));
    }

    #[test]
    fn test_relaxed_partial_requires_three_letters() {
        let mut words = vec![PlacedWord::new("HOUSE", Position::new(0, 0), Direction::Right)];
        let grid = Grid::from_rows(vec![
            "HOUSE".chars().collect(),
            "XXXXX".chars().collect(),
            "XXXXX".chars().collect(),
            "XXXXX".chars().collect(),
            "XXXXX".chars().collect(),
        ])
        .unwrap();
        let validator = WordValidator::new(MatchPolicy::Relaxed);

        assert!(validator
            .evaluate(&grid, &mut words, &cells(&[(0, 0), (0, 1)]))
            .is_none());

        let result = validator
            .evaluate(&grid, &mut words, &cells(&[(0, 3), (0, 2), (0, 1)]))
            .unwrap();
        assert_eq!(result.kind, MatchKind::ReversePartial);
        assert_eq!(result.points, 35);
    }

    #[test]
    fn test_exact_preferred_over_relaxed() {
        let (grid, mut words) = fixture();
        words.insert(0, PlacedWord::new("CA", Position::new(2, 2), Direction::Right));
        let validator = WordValidator::new(MatchPolicy::Relaxed);

        // CAT contains CA, but CAT is an exact match and wins.
        let result = validator
            .evaluate(&grid, &mut words, &cells(&[(2, 2), (2, 3), (2, 4)]))
            .unwrap();
        assert_eq!(result.word, "CAT");
        assert_eq!(result.kind, MatchKind::Exact);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Relaxed".parse::<MatchPolicy>().unwrap(), MatchPolicy::Relaxed);
        assert!("fuzzy".parse::<MatchPolicy>().is_err());
    }
}
