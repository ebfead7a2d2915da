#![allow(dead_code)]

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use visited_domains::api::handlers::{
    health_handler, visited_domains_handler, visited_links_handler,
};
use visited_domains::infrastructure::persistence::PgVisitedLinkRepository;
use visited_domains::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgVisitedLinkRepository::new(Arc::new(pool)));
    AppState::from_repository(repository)
}

/// Server with every public route and no rate limiting.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/visited_links", post(visited_links_handler))
        .route("/visited_domains", get(visited_domains_handler))
        .route("/health", get(health_handler))
        .with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

pub async fn insert_link_at(pool: &PgPool, link: &str, visited_at: DateTime<Utc>) {
    sqlx::query("INSERT INTO visited_links (link, visited_at) VALUES ($1, $2)")
        .bind(link)
        .bind(visited_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visited_links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap()
}
