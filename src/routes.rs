//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /visited_links`   - Record visited links (rate limited)
//! - `GET  /visited_domains` - Visited domains in a time window (rate limited)
//! - `GET  /health`          - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings are out of range.
pub fn app_router(
    state: AppState,
    rate_limit: RateLimitSettings,
) -> anyhow::Result<NormalizePath<Router>> {
    let limiter = rate_limit::layer(rate_limit)
        .context("Rate limit must be 1-1000 requests per second with a burst above 0")?;

    let visit_router = api::routes::visit_routes().layer(limiter);

    let router = Router::new()
        .merge(visit_router)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
