//! API route configuration.

use crate::api::handlers::{visited_domains_handler, visited_links_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public visit tracking routes.
///
/// # Endpoints
///
/// - `POST /visited_links`   - Record a batch of visited links
/// - `GET  /visited_domains` - Distinct domains visited in a time window
pub fn visit_routes() -> Router<AppState> {
    Router::new()
        .route("/visited_links", post(visited_links_handler))
        .route("/visited_domains", get(visited_domains_handler))
}
