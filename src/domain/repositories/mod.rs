//! Repository trait definitions for the domain layer.
//!
//! - [`VisitedLinkRepository`] - Append-only storage of visited links
//!
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.

pub mod visited_link_repository;

pub use visited_link_repository::VisitedLinkRepository;

#[cfg(test)]
pub use visited_link_repository::MockVisitedLinkRepository;
