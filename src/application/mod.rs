//! Application layer services implementing business logic.
//!
//! Services validate client input, coordinate repository calls and apply the
//! domain rules. HTTP handlers call services and never touch repositories
//! directly.
//!
//! # Available Services
//!
//! - [`services::visit_service::VisitService`] - Link ingestion and visited domain queries

pub mod services;
