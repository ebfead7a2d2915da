//! Utility functions used across the application.
//!
//! - [`domain_extractor`] - URL to domain normalization and deduplication

pub mod domain_extractor;
