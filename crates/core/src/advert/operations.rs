use super::error::AdvertError;
use super::requests::{AdvertInput, ConfirmAdvert, ConfirmStatus};
use super::types::{Advert, AdvertStatus};

const MAX_TITLE_LEN: usize = 200;

/// Smallest non-zero magnitude the DynamoDB Number type can hold.
const MIN_STORABLE_PRICE: f64 = 1e-130;
/// Prices must stay strictly below this to fit the DynamoDB Number type.
const MAX_STORABLE_PRICE: f64 = 1e126;

/// What a storage backend must do with a record after a confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// Overwrite the stored record with this one.
    Activate(Advert),
    /// Delete the stored record.
    Remove,
    /// Leave the stored record as it is.
    Unchanged,
}

/// Applies a confirmation to a stored advert.
///
/// Only a `Pending` advert can change: accepting sets the file path and
/// moves it to `Active`, rejecting removes it. An advert that is already
/// `Active` is never mutated again, whatever the confirmation says.
pub fn apply_confirmation(mut record: Advert, confirmation: &ConfirmAdvert) -> ConfirmOutcome {
    if record.is_active() {
        return ConfirmOutcome::Unchanged;
    }

    match confirmation.status {
        ConfirmStatus::Active => {
            record.file_path = confirmation.file_path.clone();
            record.status = AdvertStatus::Active;
            ConfirmOutcome::Activate(record)
        }
        ConfirmStatus::Rejected => ConfirmOutcome::Remove,
    }
}

/// Validates caller input before an advert is created.
pub fn validate_advert_input(input: &AdvertInput) -> Result<(), AdvertError> {
    if input.title.trim().is_empty() {
        return Err(AdvertError::EmptyTitle);
    }
    if input.title.chars().count() > MAX_TITLE_LEN {
        return Err(AdvertError::TitleTooLong);
    }
    if !is_storable_price(input.price) {
        return Err(AdvertError::InvalidPrice);
    }
    Ok(())
}

/// Validates a confirmation before it reaches the store.
///
/// An acceptance must name the file backing the advert.
pub fn validate_confirmation(confirmation: &ConfirmAdvert) -> Result<(), AdvertError> {
    let has_path = confirmation
        .file_path
        .as_deref()
        .is_some_and(|path| !path.trim().is_empty());

    match confirmation.status {
        ConfirmStatus::Active if !has_path => Err(AdvertError::MissingFilePath),
        _ => Ok(()),
    }
}

/// Returns true if a table status reported by the store means "usable".
pub fn is_table_active(table_status: &str) -> bool {
    table_status.eq_ignore_ascii_case("active")
}

fn is_storable_price(price: f64) -> bool {
    // NaN fails every comparison below.
    price == 0.0 || (MIN_STORABLE_PRICE..MAX_STORABLE_PRICE).contains(&price)
}
