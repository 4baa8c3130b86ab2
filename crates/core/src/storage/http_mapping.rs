//! Pure functions for mapping domain errors to HTTP status codes.

use crate::advert::AdvertError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `StorageUnavailable` -> 503 (Service Unavailable)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use adverts_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::advert_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::StorageUnavailable(_) => 503,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps an [`AdvertError`] to an HTTP status code.
///
/// Every variant describes bad caller input, so all map to 400.
pub fn advert_error_to_status_code(_error: &AdvertError) -> u16 {
    400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::advert_not_found("adv-123");
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_storage_unavailable_maps_to_503() {
        let error = RepositoryError::StorageUnavailable("connection refused".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("bad price".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_advert_errors_map_to_400() {
        assert_eq!(advert_error_to_status_code(&AdvertError::EmptyTitle), 400);
        assert_eq!(advert_error_to_status_code(&AdvertError::InvalidPrice), 400);
        assert_eq!(
            advert_error_to_status_code(&AdvertError::MissingFilePath),
            400
        );
    }
}
