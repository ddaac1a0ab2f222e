use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Result};

use crate::{error::ScoreStoreError, models::ScoreRecord, scores::ScoreStore};

pub mod queries;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// High scores kept in the `high_scores` table.
pub struct PgScoreStore {
    pool: PgPool,
    max_scores: i64,
}

impl PgScoreStore {
    pub fn new(pool: PgPool, max_scores: usize) -> Self {
        Self {
            pool,
            max_scores: i64::try_from(max_scores).unwrap_or(i64::MAX),
        }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn load(&self) -> Vec<ScoreRecord> {
        match queries::get_high_scores(&self.pool, self.max_scores).await {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!("Failed to load high scores: {}", e);
                Vec::new()
            }
        }
    }

    async fn record(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>, ScoreStoreError> {
        queries::insert_high_score(&self.pool, &record).await?;
        let pruned = queries::prune_high_scores(&self.pool, self.max_scores).await?;
        if pruned > 0 {
            tracing::debug!("Pruned {} scores below the top {}", pruned, self.max_scores);
        }
        Ok(queries::get_high_scores(&self.pool, self.max_scores).await?)
    }

    async fn clear(&self) -> Result<(), ScoreStoreError> {
        queries::clear_high_scores(&self.pool).await?;
        Ok(())
    }
}
