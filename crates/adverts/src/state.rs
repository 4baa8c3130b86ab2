//! Application state shared by every request handler.

use std::sync::Arc;

use adverts_core::storage::AdvertRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler; the repository itself is shared.
#[derive(Clone)]
pub struct AppState {
    /// Advert repository (DynamoDB or in-memory).
    pub advert_repo: Arc<dyn AdvertRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(advert_repo: Arc<dyn AdvertRepository>) -> Self {
        Self { advert_repo }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
