use adverts_core::advert::AdvertError;
use adverts_core::storage::{
    advert_error_to_status_code, repository_error_to_status_code, RepositoryError,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that wraps `anyhow::Error`.
///
/// Repository and validation errors keep their own status codes; anything
/// else becomes a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(advert_error) = self.0.downcast_ref::<AdvertError>() {
            advert_error_to_status_code(advert_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "API error");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
