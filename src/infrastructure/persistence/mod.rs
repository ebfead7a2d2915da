//! PostgreSQL repository implementations.
//!
//! - [`PgVisitedLinkRepository`] - Visited link storage and range queries
//! - [`ensure_schema`] - Idempotent table creation run once at startup

pub mod pg_visited_link_repository;
pub mod schema;

pub use pg_visited_link_repository::PgVisitedLinkRepository;
pub use schema::ensure_schema;
