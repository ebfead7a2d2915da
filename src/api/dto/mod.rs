//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and query string (de)serialization.

pub mod health;
pub mod visited_domains;
pub mod visited_links;

pub use visited_domains::{VisitedDomainsParams, VisitedDomainsResponse};
pub use visited_links::{MAX_LINK_LENGTH, StatusResponse, VisitedLinksRequest};
