//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use adverts_core::advert::{apply_confirmation, Advert, AdvertInput, ConfirmAdvert, ConfirmOutcome};
use adverts_core::storage::{AdvertRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// The backend can be marked unavailable to simulate an unreachable table.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    adverts: Arc<RwLock<HashMap<String, Advert>>>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            adverts: Arc::new(RwLock::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Marks the backing store reachable or unreachable.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::StorageUnavailable(
                "In-memory store marked unavailable".to_string(),
            ))
        }
    }
}

#[async_trait]
impl AdvertRepository for InMemoryRepository {
    async fn add_advert(&self, input: &AdvertInput) -> Result<String> {
        self.ensure_available()?;

        let advert = Advert::new_pending(input.clone());
        let id = advert.id.clone();
        self.adverts.write().await.insert(id.clone(), advert);

        Ok(id)
    }

    async fn confirm_advert(&self, confirmation: &ConfirmAdvert) -> Result<()> {
        self.ensure_available()?;

        let mut adverts = self.adverts.write().await;
        let record = adverts
            .get(&confirmation.id)
            .cloned()
            .ok_or_else(|| RepositoryError::advert_not_found(&confirmation.id))?;

        match apply_confirmation(record, confirmation) {
            ConfirmOutcome::Activate(advert) => {
                adverts.insert(advert.id.clone(), advert);
            }
            ConfirmOutcome::Remove => {
                adverts.remove(&confirmation.id);
            }
            ConfirmOutcome::Unchanged => {}
        }

        Ok(())
    }

    async fn get_all_adverts(&self) -> Result<Vec<Advert>> {
        self.ensure_available()?;

        let adverts = self.adverts.read().await;
        Ok(adverts.values().cloned().collect())
    }

    async fn get_advert(&self, id: &str) -> Result<Advert> {
        self.ensure_available()?;

        let adverts = self.adverts.read().await;
        adverts
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::advert_not_found(id))
    }

    async fn check_health(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
