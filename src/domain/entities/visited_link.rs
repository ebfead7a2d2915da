//! Visited link entity.

use chrono::{DateTime, Utc};

/// One visited URL as persisted by the link store.
///
/// Records are append-only: `id` and `visited_at` are assigned by the store
/// at insertion time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedLink {
    pub id: i64,
    pub link: String,
    pub visited_at: DateTime<Utc>,
}

impl VisitedLink {
    pub fn new(id: i64, link: String, visited_at: DateTime<Utc>) -> Self {
        Self {
            id,
            link,
            visited_at,
        }
    }
}
