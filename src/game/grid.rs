use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::{seq::SliceRandom, Rng};

use crate::{
    dictionary::{WordPool, FALLBACK_WORDS},
    models::{Direction, Grid, PlacedWord, Position, Puzzle, PuzzleConfig},
    utils::letters::random_letter,
};

/// Shortest word worth hiding; a selection needs at least two cells.
pub const MIN_WORD_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Random origin/direction tries per word.
    pub max_attempts: usize,
    /// Shorter replacements tried for a word that would not fit.
    pub max_substitutions: usize,
    /// More unplaced words than this discards the round.
    pub max_unplaced: usize,
    /// Rounds started from an empty grid before settling for the best one.
    pub max_rounds: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_attempts: 2000,
            max_substitutions: 3,
            max_unplaced: 2,
            max_rounds: 3,
        }
    }
}

/// Builds word search puzzles from a word pool.
pub struct PuzzleGenerator<'a> {
    pool: &'a WordPool,
    settings: GeneratorSettings,
}

/// Words chosen for a puzzle, longest first, plus the replacements held in reserve.
#[derive(Debug, Clone, Default)]
struct WordSelection {
    chosen: Vec<String>,
    reserve: Vec<String>,
}

/// Grid under construction. `None` marks a cell no word has claimed yet.
#[derive(Debug, Clone)]
struct LetterGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

#[derive(Debug)]
struct Round {
    grid: LetterGrid,
    placed: Vec<PlacedWord>,
    unplaced: Vec<String>,
}

impl<'a> PuzzleGenerator<'a> {
    pub fn new(pool: &'a WordPool, settings: GeneratorSettings) -> Self {
        Self { pool, settings }
    }

    /// Generate a puzzle using the thread-local RNG.
    pub fn generate(&self, config: &PuzzleConfig) -> Puzzle {
        self.generate_with_rng(config, &mut rand::rng())
    }

    /// Generate a puzzle. Always terminates and always returns a fully
    /// lettered `grid_size` x `grid_size` grid, even if no word could be placed.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, config: &PuzzleConfig, rng: &mut R) -> Puzzle {
        let size = config.grid_size;
        let selection = self.select_words(config, rng);

        let (best, round) = self.best_round(|| self.place_round(&selection, size, rng));

        if !best.unplaced.is_empty() {
            tracing::warn!(
                "Could not place {} words: {:?}",
                best.unplaced.len(),
                best.unplaced
            );
        }

        tracing::debug!(
            "Generated {}x{} {} puzzle with {} words in {} round(s)",
            size,
            size,
            config.difficulty,
            best.placed.len(),
            round
        );

        Puzzle {
            grid: best.grid.fill(rng),
            words: best.placed,
            unplaced: best.unplaced,
        }
    }

    /// Run placement rounds until one leaves at most `max_unplaced` words
    /// out or `max_rounds` have run. Returns the round with the fewest
    /// unplaced words and the number of rounds run.
    fn best_round(&self, mut run: impl FnMut() -> Round) -> (Round, usize) {
        let mut best = run();
        let mut rounds = 1;
        while best.unplaced.len() > self.settings.max_unplaced && rounds < self.settings.max_rounds {
            tracing::warn!(
                "Round {} left {} words unplaced ({:?}), retrying from an empty grid",
                rounds,
                best.unplaced.len(),
                best.unplaced
            );
            rounds += 1;
            let next = run();
            if next.unplaced.len() < best.unplaced.len() {
                best = next;
            }
        }
        (best, rounds)
    }

    /// Pick `word_count` distinct words that fit the grid, topping up from
    /// the fallback list when the difficulty list runs short.
    fn select_words<R: Rng + ?Sized>(&self, config: &PuzzleConfig, rng: &mut R) -> WordSelection {
        let fits = |word: &str| (MIN_WORD_LEN..=config.grid_size).contains(&word.len());

        let mut seen = HashSet::new();
        let mut eligible: Vec<String> = self
            .pool
            .words(config.difficulty)
            .iter()
            .filter(|word| fits(word))
            .filter(|word| seen.insert(word.as_str().to_owned()))
            .cloned()
            .collect();
        eligible.shuffle(rng);

        let mut fallback: Vec<String> = FALLBACK_WORDS
            .iter()
            .filter(|word| fits(word))
            .filter(|word| seen.insert((**word).to_owned()))
            .map(|word| (*word).to_owned())
            .collect();
        fallback.shuffle(rng);

        let mut candidates = eligible.into_iter().chain(fallback);
        let mut chosen: Vec<String> = candidates.by_ref().take(config.word_count).collect();
        if chosen.len() < config.word_count {
            tracing::debug!(
                "Only {} words fit a {}x{} grid, wanted {}",
                chosen.len(),
                config.grid_size,
                config.grid_size,
                config.word_count
            );
        }
        chosen.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut reserve: Vec<String> = candidates.collect();
        reserve.sort_by(|a, b| b.len().cmp(&a.len()));

        WordSelection { chosen, reserve }
    }

    fn place_round<R: Rng + ?Sized>(&self, selection: &WordSelection, size: usize, rng: &mut R) -> Round {
        let mut grid = LetterGrid::new(size);
        let mut placed = Vec::with_capacity(selection.chosen.len());
        let mut unplaced = Vec::new();
        let mut reserve = selection.reserve.clone();

        for word in &selection.chosen {
            if let Some(placement) = self.place_word(&mut grid, word, rng) {
                placed.push(placement);
                continue;
            }
            tracing::debug!(
                "Could not place {} after {} attempts",
                word,
                self.settings.max_attempts
            );

            match self.place_substitute(&mut grid, word, &mut reserve, rng) {
                Some(placement) => {
                    tracing::debug!("Replaced {} with {}", word, placement.word);
                    placed.push(placement);
                }
                None => unplaced.push(word.clone()),
            }
        }

        Round {
            grid,
            placed,
            unplaced,
        }
    }

    /// Try reserve words strictly shorter than `word`, longest first.
    /// A placed substitute leaves the reserve.
    fn place_substitute<R: Rng + ?Sized>(
        &self,
        grid: &mut LetterGrid,
        word: &str,
        reserve: &mut Vec<String>,
        rng: &mut R,
    ) -> Option<PlacedWord> {
        let candidates: Vec<usize> = reserve
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.len() < word.len())
            .map(|(i, _)| i)
            .take(self.settings.max_substitutions)
            .collect();

        for i in candidates {
            if let Some(placement) = self.place_word(grid, &reserve[i], rng) {
                reserve.remove(i);
                return Some(placement);
            }
        }
        None
    }

    /// Place one word, or leave the grid untouched and return `None`.
    fn place_word<R: Rng + ?Sized>(&self, grid: &mut LetterGrid, word: &str, rng: &mut R) -> Option<PlacedWord> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() || letters.len() > grid.size {
            return None;
        }

        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        for attempt in 0..self.settings.max_attempts {
            let direction = directions[attempt % directions.len()];
            let Some((rows, cols)) = origin_range(grid.size, letters.len(), direction) else {
                continue;
            };
            let origin = Position::new(rng.random_range(rows), rng.random_range(cols));

            if grid.fits(&letters, origin, direction) {
                grid.write(&letters, origin, direction);
                return Some(PlacedWord::new(word, origin, direction));
            }
        }
        None
    }
}

/// Origins from which a word of `len` letters stays inside the grid, as
/// (row range, column range).
fn origin_range(
    size: usize,
    len: usize,
    direction: Direction,
) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
    if len == 0 || len > size {
        return None;
    }
    let axis = |step: isize| match step {
        1 => 0..=size - len,
        -1 => len - 1..=size - 1,
        _ => 0..=size - 1,
    };
    Some((axis(direction.dx()), axis(direction.dy())))
}

impl LetterGrid {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Each target cell must be empty or already hold the same letter.
    fn fits(&self, letters: &[char], origin: Position, direction: Direction) -> bool {
        letters.iter().enumerate().all(|(i, &letter)| {
            let Some(pos) = origin.step(direction, i, self.size) else {
                return false;
            };
            match self.cells[self.index(pos)] {
                None => true,
                Some(existing) => existing == letter,
            }
        })
    }

    fn write(&mut self, letters: &[char], origin: Position, direction: Direction) {
        for (i, &letter) in letters.iter().enumerate() {
            if let Some(pos) = origin.step(direction, i, self.size) {
                let index = self.index(pos);
                self.cells[index] = Some(letter);
            }
        }
    }

    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let rows: Vec<Vec<char>> = self
            .cells
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
                    .collect::<Vec<char>>()
            })
            .collect();
        Grid::from_square_rows(rows)
    }
}
