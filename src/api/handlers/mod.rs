//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod visited_domains;
pub mod visited_links;

pub use health::health_handler;
pub use visited_domains::visited_domains_handler;
pub use visited_links::visited_links_handler;
