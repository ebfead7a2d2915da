//! Link ingestion and visited domain queries.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::entities::TimeRange;
use crate::domain::repositories::VisitedLinkRepository;
use crate::error::AppError;
use crate::utils::domain_extractor::distinct_domains;

pub const RANGE_REQUIRED: &str = "Parameters 'from' and 'to' are required";
pub const RANGE_NOT_TIMESTAMPS: &str = "Values of parameters must be timestamps";
pub const RANGE_INVERTED: &str = "Parameter 'from' is greater than parameter 'to'";

/// Service for recording visited links and reporting visited domains.
///
/// Ingestion batches arrive already validated by
/// [`VisitedLinksRequest`](crate::api::dto::VisitedLinksRequest); time range
/// parameters are validated here before the repository is touched.
pub struct VisitService {
    repository: Arc<dyn VisitedLinkRepository>,
}

impl VisitService {
    /// Creates a new visit service.
    pub fn new(repository: Arc<dyn VisitedLinkRepository>) -> Self {
        Self { repository }
    }

    /// Stores one validated ingestion batch.
    ///
    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. Nothing from the
    /// batch is stored in that case.
    pub async fn record_links(&self, links: Vec<String>) -> Result<usize, AppError> {
        let stored = self.repository.insert_batch(links).await?;

        metrics::counter!("visited_links_recorded_total").increment(stored.len() as u64);
        tracing::info!(count = stored.len(), "Recorded visited links");

        Ok(stored.len())
    }

    /// Returns the distinct domains visited between `from` and `to`.
    ///
    /// Both parameters are raw query string values holding Unix timestamps
    /// in seconds. The range is inclusive on both ends.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a parameter is missing, is not an
    /// integer timestamp, or `from` is greater than `to`.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn visited_domains(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<BTreeSet<String>, AppError> {
        let range = parse_time_range(from, to)?;

        let links = self.repository.find_links_in_range(range).await?;
        let domains = distinct_domains(&links);

        metrics::counter!("visited_domains_queries_total").increment(1);
        tracing::debug!(
            links = links.len(),
            domains = domains.len(),
            "Resolved visited domains"
        );

        Ok(domains)
    }

    /// Counts all stored records. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn total_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Parses raw `from`/`to` query values into a [`TimeRange`].
///
/// Surrounding whitespace is ignored; a leading `+` or `-` sign is accepted.
pub fn parse_time_range(from: Option<&str>, to: Option<&str>) -> Result<TimeRange, AppError> {
    let (Some(from), Some(to)) = (from, to) else {
        return Err(AppError::bad_request(RANGE_REQUIRED));
    };

    let (Ok(from), Ok(to)) = (from.trim().parse::<i64>(), to.trim().parse::<i64>()) else {
        return Err(AppError::bad_request(RANGE_NOT_TIMESTAMPS));
    };

    if from > to {
        return Err(AppError::bad_request(RANGE_INVERTED));
    }

    TimeRange::from_unix_seconds(from, to)
        .ok_or_else(|| AppError::bad_request(RANGE_NOT_TIMESTAMPS))
}
