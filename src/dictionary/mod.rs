use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use tokio::fs;

use crate::{models::Difficulty, utils::letters::normalize_word};

mod builtin;

pub use builtin::FALLBACK_WORDS;

static BUILTIN_POOL: Lazy<WordPool> = Lazy::new(|| {
    let mut pool = WordPool::empty();
    pool.insert(Difficulty::Easy, builtin::EASY.iter().copied());
    pool.insert(Difficulty::Medium, builtin::MEDIUM.iter().copied());
    pool.insert(Difficulty::Hard, builtin::HARD.iter().copied());
    pool
});

/// Candidate words for each difficulty, in their listed order.
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    lists: HashMap<Difficulty, Vec<String>>,
}

impl WordPool {
    /// The word lists compiled into the binary.
    pub fn builtin() -> Self {
        BUILTIN_POOL.clone()
    }

    /// A pool with no words at all. Puzzles built from it use only fallback words.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load word lists from a JSON file shaped like
    /// `{"easy": ["CAT", ...], "medium": [...], "hard": [...]}`.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let pool = Self::from_json(&content)
            .with_context(|| format!("failed to parse word list {}", path.display()))?;
        if pool.is_empty() {
            anyhow::bail!("word list {} has no usable words", path.display());
        }

        tracing::info!(
            "Loaded {} words from {}: {} easy, {} medium, {} hard",
            pool.len(),
            path.display(),
            pool.words(Difficulty::Easy).len(),
            pool.words(Difficulty::Medium).len(),
            pool.words(Difficulty::Hard).len()
        );

        Ok(pool)
    }

    /// Load from `path`, or fall back to the built-in lists if that fails.
    pub async fn load_or_builtin<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!("{:#}. Using built-in word lists.", e);
                Self::builtin()
            }
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<Difficulty, Vec<String>> = serde_json::from_str(content)?;
        let mut pool = Self::empty();
        for (difficulty, words) in &raw {
            pool.insert(*difficulty, words.iter().map(String::as_str));
        }
        Ok(pool)
    }

    /// Append words to a difficulty list. Words that are not plain letters
    /// are skipped.
    pub fn insert<'a>(&mut self, difficulty: Difficulty, words: impl IntoIterator<Item = &'a str>) {
        let list = self.lists.entry(difficulty).or_default();
        for raw in words {
            match normalize_word(raw) {
                Some(word) => list.push(word),
                None => tracing::warn!("Skipping word list entry {:?}: not plain letters", raw),
            }
        }
    }

    pub fn words(&self, difficulty: Difficulty) -> &[String] {
        self.lists.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
