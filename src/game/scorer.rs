use crate::game::validator::MatchKind;

/// Points per letter of a matched word.
pub const POINTS_PER_LETTER: u32 = 10;
/// Points deducted for each hint.
pub const HINT_PENALTY: u32 = 20;
/// Points per second left on the clock when the puzzle is solved.
pub const TIME_BONUS_PER_SECOND: u32 = 2;

pub struct Scorer;

impl Scorer {
    /// Points for a matched word.
    ///
    /// Scoring rules:
    /// - Exact and reverse matches earn 10 points per letter
    /// - Relaxed matches earn 70% of that, rounded down
    pub fn word_points(length: usize, kind: MatchKind) -> u32 {
        let full = length as u32 * POINTS_PER_LETTER;
        if kind.is_relaxed() {
            full * 7 / 10
        } else {
            full
        }
    }

    /// Deduct the hint penalty. The score never drops below zero.
    pub fn apply_hint_penalty(score: u32) -> u32 {
        score.saturating_sub(HINT_PENALTY)
    }

    /// Bonus for the seconds remaining when the last word is found.
    pub fn time_bonus(remaining_seconds: u32) -> u32 {
        remaining_seconds * TIME_BONUS_PER_SECOND
    }
}
