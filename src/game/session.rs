use chrono::Utc;
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    dictionary::WordPool,
    error::GameError,
    game::{
        grid::{GeneratorSettings, PuzzleGenerator},
        scorer::Scorer,
        timer::Countdown,
        validator::{MatchPolicy, WordMatch, WordValidator},
    },
    models::{Direction, Position, Puzzle, PuzzleConfig, ScoreRecord},
};

/// Fewest cells a selection needs before it is checked.
pub const MIN_SELECTION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub max_hints: u32,
    pub policy: MatchPolicy,
    pub generator: GeneratorSettings,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_hints: 3,
            policy: MatchPolicy::default(),
            generator: GeneratorSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Won,
    Lost,
}

impl SessionStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }
}

/// A revealed word and where it starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub word: String,
    pub origin: Position,
    pub direction: Direction,
    pub hints_remaining: u32,
}

/// What one scheduler tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or finished; the clock did not move.
    Idle,
    Running(u32),
    /// The clock ran out on this tick and the game is lost.
    Expired,
}

/// One player's game: the puzzle, their selection, score and clock.
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    config: PuzzleConfig,
    settings: SessionSettings,
    puzzle: Puzzle,
    selection: Vec<Position>,
    score: u32,
    hints_used: u32,
    countdown: Countdown,
    status: SessionStatus,
    show_words: bool,
    validator: WordValidator,
    rng: StdRng,
}

impl GameSession {
    pub fn new(
        config: PuzzleConfig,
        pool: &WordPool,
        settings: SessionSettings,
    ) -> Result<Self, GameError> {
        Self::with_rng(config, pool, settings, StdRng::from_os_rng())
    }

    /// Same as [`GameSession::new`] but reproducible.
    pub fn with_seed(
        config: PuzzleConfig,
        pool: &WordPool,
        settings: SessionSettings,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_rng(config, pool, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: PuzzleConfig,
        pool: &WordPool,
        settings: SessionSettings,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let puzzle = PuzzleGenerator::new(pool, settings.generator).generate_with_rng(&config, &mut rng);
        let id = Uuid::new_v4();

        tracing::debug!(
            "Session {} started: {}x{} {} with {} words",
            id,
            config.grid_size,
            config.grid_size,
            config.difficulty,
            puzzle.words.len()
        );

        Ok(Self {
            id,
            config,
            settings,
            puzzle,
            selection: Vec::new(),
            score: 0,
            hints_used: 0,
            countdown: Countdown::new(config.time_limit_seconds),
            status: SessionStatus::Active,
            show_words: false,
            validator: WordValidator::new(settings.policy),
            rng,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn hints_remaining(&self) -> u32 {
        self.settings.max_hints.saturating_sub(self.hints_used)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn show_words(&self) -> bool {
        self.show_words
    }

    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    /// Letters under the current selection, in click order.
    pub fn selected_letters(&self) -> String {
        self.selection
            .iter()
            .filter_map(|pos| self.puzzle.grid.get(*pos))
            .collect()
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.status {
            SessionStatus::Active => Ok(()),
            SessionStatus::Paused => Err(GameError::Paused),
            SessionStatus::Won | SessionStatus::Lost => Err(GameError::GameOver),
        }
    }

    /// Select a cell, or deselect it if it is already part of the selection.
    pub fn toggle_cell(&mut self, pos: Position) -> Result<&[Position], GameError> {
        self.ensure_active()?;
        if self.puzzle.grid.get(pos).is_none() {
            return Err(GameError::OutOfBounds(pos));
        }

        match self.selection.iter().position(|p| *p == pos) {
            Some(index) => {
                self.selection.remove(index);
            }
            None => self.selection.push(pos),
        }
        Ok(&self.selection)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check the selection against the unfound words.
    ///
    /// A match adds its points and clears the selection. Finding the last
    /// word wins the game and adds the time bonus. A miss leaves the
    /// selection as it was.
    pub fn check_selection(&mut self) -> Result<Option<WordMatch>, GameError> {
        self.ensure_active()?;
        if self.selection.len() < MIN_SELECTION {
            return Err(GameError::SelectionTooShort { min: MIN_SELECTION });
        }

        let Some(found) =
            self.validator
                .evaluate(&self.puzzle.grid, &mut self.puzzle.words, &self.selection)
        else {
            return Ok(None);
        };

        self.score += found.points;
        self.selection.clear();

        if self.puzzle.is_complete() {
            let bonus = Scorer::time_bonus(self.countdown.remaining());
            self.score += bonus;
            self.status = SessionStatus::Won;
            tracing::info!(
                "Session {} won with {} points ({} time bonus)",
                self.id,
                self.score,
                bonus
            );
        }

        Ok(Some(found))
    }

    /// Reveal a random unfound word at the cost of the hint penalty.
    pub fn use_hint(&mut self) -> Result<Hint, GameError> {
        self.ensure_active()?;
        if self.hints_used >= self.settings.max_hints {
            return Err(GameError::HintsExhausted {
                max: self.settings.max_hints,
            });
        }

        let unfound: Vec<_> = self.puzzle.words.iter().filter(|w| !w.found).collect();
        let target = unfound.choose(&mut self.rng).ok_or(GameError::NothingToHint)?;
        let (word, origin, direction) = (target.word.clone(), target.origin(), target.direction);

        self.hints_used += 1;
        self.score = Scorer::apply_hint_penalty(self.score);

        Ok(Hint {
            word,
            origin,
            direction,
            hints_remaining: self.hints_remaining(),
        })
    }

    /// Pause or resume. Returns whether the game is now paused.
    pub fn toggle_pause(&mut self) -> Result<bool, GameError> {
        self.status = match self.status {
            SessionStatus::Active => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Active,
            SessionStatus::Won | SessionStatus::Lost => return Err(GameError::GameOver),
        };
        Ok(self.status == SessionStatus::Paused)
    }

    /// Show or hide the word positions. Never changes the score.
    pub fn toggle_show_words(&mut self) -> Result<bool, GameError> {
        self.ensure_active()?;
        self.show_words = !self.show_words;
        Ok(self.show_words)
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Active {
            return TickOutcome::Idle;
        }

        let remaining = self.countdown.decrement();
        if self.countdown.is_expired() {
            self.status = SessionStatus::Lost;
            self.selection.clear();
            tracing::info!("Session {} ran out of time with {} points", self.id, self.score);
            return TickOutcome::Expired;
        }
        TickOutcome::Running(remaining)
    }

    /// Start over with a fresh puzzle and the same settings. Allowed while
    /// playing and after the game is over, but not while paused.
    pub fn new_puzzle(&mut self, pool: &WordPool) -> Result<(), GameError> {
        if self.status == SessionStatus::Paused {
            return Err(GameError::Paused);
        }
        self.puzzle = PuzzleGenerator::new(pool, self.settings.generator)
            .generate_with_rng(&self.config, &mut self.rng);
        self.selection.clear();
        self.score = 0;
        self.hints_used = 0;
        self.countdown.reset();
        self.status = SessionStatus::Active;
        self.show_words = false;
        Ok(())
    }

    /// High score entry for a won game.
    pub fn score_record(&self) -> Option<ScoreRecord> {
        (self.status == SessionStatus::Won)
            .then(|| ScoreRecord::new(self.score, &self.config, Utc::now()))
    }
}
