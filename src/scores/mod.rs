use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};

use crate::{error::ScoreStoreError, models::ScoreRecord};

/// Default length of the high score list.
pub const DEFAULT_MAX_SCORES: usize = 10;

/// Persisted high score list, best first.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Current list. A store that cannot be read reports no scores.
    async fn load(&self) -> Vec<ScoreRecord>;

    /// Insert a record and return the updated list.
    async fn record(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>, ScoreStoreError>;

    async fn clear(&self) -> Result<(), ScoreStoreError>;
}

/// Insert `record`, keep the list sorted by descending score and cut it to
/// `max_scores`. Equal scores keep the older record first.
pub fn insert_ranked(scores: &mut Vec<ScoreRecord>, record: ScoreRecord, max_scores: usize) {
    scores.push(record);
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(max_scores);
}

/// Scores kept for the lifetime of the process.
pub struct MemoryScoreStore {
    scores: Mutex<Vec<ScoreRecord>>,
    max_scores: usize,
}

impl MemoryScoreStore {
    pub fn new(max_scores: usize) -> Self {
        Self {
            scores: Mutex::new(Vec::new()),
            max_scores,
        }
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn load(&self) -> Vec<ScoreRecord> {
        self.scores.lock().await.clone()
    }

    async fn record(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>, ScoreStoreError> {
        let mut scores = self.scores.lock().await;
        insert_ranked(&mut scores, record, self.max_scores);
        Ok(scores.clone())
    }

    async fn clear(&self) -> Result<(), ScoreStoreError> {
        self.scores.lock().await.clear();
        Ok(())
    }
}

/// Scores kept as a JSON array in a file.
pub struct FileScoreStore {
    path: PathBuf,
    max_scores: usize,
    // Serializes read-modify-write cycles on the file.
    lock: Mutex<()>,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>, max_scores: usize) -> Self {
        Self {
            path: path.into(),
            max_scores,
            lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> Vec<ScoreRecord> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read scores from {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ScoreRecord>>(&content) {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed scores in {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn write(&self, scores: &[ScoreRecord]) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(scores)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl ScoreStore for FileScoreStore {
    async fn load(&self) -> Vec<ScoreRecord> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn record(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>, ScoreStoreError> {
        let _guard = self.lock.lock().await;
        let mut scores = self.read().await;
        insert_ranked(&mut scores, record, self.max_scores);
        self.write(&scores).await?;
        Ok(scores)
    }

    async fn clear(&self) -> Result<(), ScoreStoreError> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio_test::assert_ok;
    use uuid::Uuid;

    use super::*;

    fn record(score: i32, timestamp: i64) -> ScoreRecord {
        ScoreRecord {
            score,
            grid_size: 10,
            word_count: 10,
            difficulty: "easy".to_string(),
            date: "Oct 16, 2026".to_string(),
            timestamp,
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("word-search-scores-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_insert_ranked_sorts_and_caps() {
        let mut scores = Vec::new();
        for (i, score) in [50, 300, 120, 10, 300].into_iter().enumerate() {
            insert_ranked(&mut scores, record(score, i as i64), 4);
        }

        let ranked: Vec<(i32, i64)> = scores.iter().map(|r| (r.score, r.timestamp)).collect();
        assert_eq!(
            ranked,
            vec![(300, 1), (300, 4), (120, 2), (50, 0)],
            "ties should keep the older record first and the lowest score should drop off"
        );
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryScoreStore::new(DEFAULT_MAX_SCORES);
        assert!(store.load().await.is_empty());

        assert_ok!(store.record(record(40, 1)).await);
        let scores = assert_ok!(store.record(record(90, 2)).await);
        assert_eq!(scores[0].score, 90);
        assert_eq!(store.load().await.len(), 2);

        assert_ok!(store.clear().await);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let path = temp_path();
        let store = FileScoreStore::new(&path, 2);

        assert!(store.load().await.is_empty(), "missing file should read as empty");
        assert_ok!(store.record(record(10, 1)).await);
        assert_ok!(store.record(record(30, 2)).await);
        assert_ok!(store.record(record(20, 3)).await);

        let reopened = FileScoreStore::new(&path, 2);
        let scores = reopened.load().await;
        assert_eq!(scores.iter().map(|r| r.score).collect::<Vec<_>>(), vec![30, 20]);

        assert_ok!(reopened.clear().await);
        assert!(reopened.load().await.is_empty());
        assert_ok!(reopened.clear().await, "clearing twice should be fine");
    }

    #[tokio::test]
    async fn test_file_store_malformed_content_reads_as_empty() {
        let path = temp_path();
        let store = FileScoreStore::new(&path, DEFAULT_MAX_SCORES);

        for content in ["not json", r#"{"score": 10}"#, "[1, 2, 3]"] {
            fs::write(&path, content).await.unwrap();
            assert!(store.load().await.is_empty(), "{:?} should read as no scores", content);
        }

        // Recording over a malformed file starts a fresh list.
        let scores = assert_ok!(store.record(record(70, 1)).await);
        assert_eq!(scores.len(), 1);

        fs::remove_file(&path).await.unwrap();
    }
}
