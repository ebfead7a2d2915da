//! Handler for link ingestion endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::{StatusResponse, VisitedLinksRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Records a batch of visited links.
///
/// # Endpoint
///
/// `POST /visited_links`
///
/// # Request Body
///
/// ```json
/// { "links": ["https://dzen.ru/news", "https://vk.com/feed"] }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok" }
/// ```
///
/// # Errors
///
/// - 400 `{"status": "Empty list"}` if `links` is empty or absent
/// - 400 if a link is blank or too long, or the body is not valid JSON
/// - 500 `{"status": "<error detail>"}` on storage errors
pub async fn visited_links_handler(
    State(state): State<AppState>,
    payload: Result<Json<VisitedLinksRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    payload.validate()?;

    state
        .visit_service
        .record_links(payload.into_links())
        .await?;

    Ok(Json(StatusResponse::ok()))
}
