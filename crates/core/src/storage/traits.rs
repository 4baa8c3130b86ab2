use async_trait::async_trait;

use crate::advert::{Advert, AdvertInput, ConfirmAdvert};

use super::Result;

/// Storage for advert records and their confirmation lifecycle.
#[async_trait]
pub trait AdvertRepository: Send + Sync {
    /// Stores a new pending advert and returns its generated ID.
    ///
    /// Callers check the input with `validate_advert_input` first.
    async fn add_advert(&self, input: &AdvertInput) -> Result<String>;

    /// Activates or removes a pending advert.
    ///
    /// An advert that is already `Active` is left untouched and the call
    /// succeeds. Fails with `NotFound` if the advert does not exist, including
    /// when it was already rejected. Callers check the payload with
    /// `validate_confirmation` first, so an acceptance always carries a file
    /// path.
    async fn confirm_advert(&self, confirmation: &ConfirmAdvert) -> Result<()>;

    /// Gets every stored advert, in no particular order.
    async fn get_all_adverts(&self) -> Result<Vec<Advert>>;

    /// Gets an advert by its ID.
    async fn get_advert(&self, id: &str) -> Result<Advert>;

    /// Probes the backing store. Never fails; any error reads as unhealthy.
    async fn check_health(&self) -> bool;
}
