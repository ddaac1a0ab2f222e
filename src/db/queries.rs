use sqlx::{PgPool, Result};

use crate::models::ScoreRecord;

/// Best `limit` scores. Ties go to the earlier insert.
pub async fn get_high_scores(pool: &PgPool, limit: i64) -> Result<Vec<ScoreRecord>> {
    sqlx::query_as::<_, ScoreRecord>(
        r#"
        SELECT score, grid_size, word_count, difficulty, date, timestamp_ms
        FROM high_scores
        ORDER BY score DESC, id ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn insert_high_score(pool: &PgPool, record: &ScoreRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO high_scores (score, grid_size, word_count, difficulty, date, timestamp_ms)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(record.score)
    .bind(record.grid_size)
    .bind(record.word_count)
    .bind(&record.difficulty)
    .bind(&record.date)
    .bind(record.timestamp)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete everything outside the best `keep` scores.
pub async fn prune_high_scores(pool: &PgPool, keep: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM high_scores
        WHERE id NOT IN (
            SELECT id FROM high_scores
            ORDER BY score DESC, id ASC
            LIMIT $1
        )
        "#,
    )
    .bind(keep)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn clear_high_scores(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM high_scores").execute(pool).await?;
    Ok(())
}
