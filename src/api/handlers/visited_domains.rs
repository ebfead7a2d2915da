//! Handler for visited domains endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::{VisitedDomainsParams, VisitedDomainsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the distinct domains visited within a time window.
///
/// # Endpoint
///
/// `GET /visited_domains?from=<unix seconds>&to=<unix seconds>`
///
/// Both bounds are inclusive. Domains have a leading `www.` removed and are
/// deduplicated; the list is returned in lexicographic order.
///
/// # Response
///
/// ```json
/// { "domains": ["stackoverflow.com", "ya.ru"], "status": "ok" }
/// ```
///
/// # Errors
///
/// - 400 if `from` or `to` is missing, is not an integer, or `from > to`
/// - 500 `{"status": "<error detail>"}` on storage errors
pub async fn visited_domains_handler(
    State(state): State<AppState>,
    params: Result<Query<VisitedDomainsParams>, QueryRejection>,
) -> Result<Json<VisitedDomainsResponse>, AppError> {
    let Query(params) =
        params.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let domains = state
        .visit_service
        .visited_domains(params.from.as_deref(), params.to.as_deref())
        .await?;

    Ok(Json(VisitedDomainsResponse::ok(domains)))
}
