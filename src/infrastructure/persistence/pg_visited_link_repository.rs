//! PostgreSQL implementation of the visited link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{TimeRange, VisitedLink};
use crate::domain::repositories::VisitedLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for visited links.
///
/// Connections are taken from the pool per operation and returned when the
/// query or transaction completes.
pub struct PgVisitedLinkRepository {
    pool: Arc<PgPool>,
}

impl PgVisitedLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitedLinkRepository for PgVisitedLinkRepository {
    async fn insert_batch(&self, links: Vec<String>) -> Result<Vec<VisitedLink>, AppError> {
        let mut tx = self.pool.begin().await?;

        // `visited_at` defaults to now(), which is fixed for the whole
        // transaction, so every row of the batch shares one timestamp.
        let rows: Vec<(i64, String, DateTime<Utc>)> = sqlx::query_as(
            r#"
            INSERT INTO visited_links (link)
            SELECT batch.link
            FROM UNNEST($1::text[]) WITH ORDINALITY AS batch(link, position)
            ORDER BY batch.position
            RETURNING id, link, visited_at
            "#,
        )
        .bind(&links)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(rows
            .into_iter()
            .map(|(id, link, visited_at)| VisitedLink::new(id, link, visited_at))
            .collect())
    }

    async fn find_links_in_range(&self, range: TimeRange) -> Result<Vec<String>, AppError> {
        let links: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT link
            FROM visited_links
            WHERE visited_at BETWEEN $1 AND $2
            "#,
        )
        .bind(range.from())
        .bind(range.to())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visited_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM visited_links WHERE visited_at < $1")
            .bind(cutoff)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
