//! Core domain entities.
//!
//! - [`VisitedLink`] - A stored record of one visited URL
//! - [`TimeRange`] - An inclusive window of time used for domain queries

pub mod time_range;
pub mod visited_link;

pub use time_range::TimeRange;
pub use visited_link::VisitedLink;
