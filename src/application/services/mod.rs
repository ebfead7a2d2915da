//! Business logic services for the application layer.

pub mod visit_service;

pub use visit_service::VisitService;
