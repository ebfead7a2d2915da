//! Repository trait for visited link storage.

use crate::domain::entities::{TimeRange, VisitedLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable, range-queryable storage of [`VisitedLink`] records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitedLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_visited_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitedLinkRepository: Send + Sync {
    /// Stores one record per link, all stamped with the same server time.
    ///
    /// The batch is all-or-nothing: if any row fails, none become visible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_batch(&self, links: Vec<String>) -> Result<Vec<VisitedLink>, AppError>;

    /// Returns the distinct links whose `visited_at` lies in `range`,
    /// both ends inclusive. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_links_in_range(&self, range: TimeRange) -> Result<Vec<String>, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Deletes records visited strictly before `cutoff` and returns how many
    /// were removed. Only the admin CLI calls this.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;
}
