//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::VisitService;
use crate::domain::repositories::VisitedLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub visit_service: Arc<VisitService>,
}

impl AppState {
    pub fn new(visit_service: Arc<VisitService>) -> Self {
        Self { visit_service }
    }

    /// Builds the state around a single link store.
    pub fn from_repository(repository: Arc<dyn VisitedLinkRepository>) -> Self {
        Self::new(Arc::new(VisitService::new(repository)))
    }
}
