//! DTOs for the visited domains endpoint.

use serde::{Deserialize, Serialize};

/// Raw `from`/`to` query parameters.
///
/// Kept as strings so that a missing parameter and a non-integer one can be
/// reported with different messages.
#[derive(Debug, Default, Deserialize)]
pub struct VisitedDomainsParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Distinct domains visited within the requested window.
#[derive(Debug, Serialize)]
pub struct VisitedDomainsResponse {
    pub domains: Vec<String>,
    pub status: &'static str,
}

impl VisitedDomainsResponse {
    pub fn ok(domains: impl IntoIterator<Item = String>) -> Self {
        Self {
            domains: domains.into_iter().collect(),
            status: "ok",
        }
    }
}
