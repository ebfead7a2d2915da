//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations and schema setup

pub mod persistence;
