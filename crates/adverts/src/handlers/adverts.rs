//! Advert handlers.
//!
//! Thin JSON wrappers over the advert repository; the lifecycle rules live
//! in `adverts_core`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use adverts_core::advert::{
    validate_advert_input, validate_confirmation, Advert, AdvertInput, ConfirmAdvert,
};

use crate::{handlers::AppError, state::AppState};

/// Response body for a created advert.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAdvertResponse {
    pub id: String,
}

/// Create a new advert (POST /api/adverts).
pub async fn create_advert(
    State(state): State<AppState>,
    Json(input): Json<AdvertInput>,
) -> Result<(StatusCode, Json<CreateAdvertResponse>), AppError> {
    tracing::debug!(payload = ?input, "Received create advert request");

    validate_advert_input(&input)?;
    let id = state.advert_repo.add_advert(&input).await?;

    tracing::info!(advert_id = %id, title = %input.title, "Created new advert");

    Ok((StatusCode::CREATED, Json(CreateAdvertResponse { id })))
}

/// Confirm or reject an advert (PUT /api/adverts/confirm).
pub async fn confirm_advert(
    State(state): State<AppState>,
    Json(confirmation): Json<ConfirmAdvert>,
) -> Result<StatusCode, AppError> {
    validate_confirmation(&confirmation)?;
    state.advert_repo.confirm_advert(&confirmation).await?;

    tracing::info!(
        advert_id = %confirmation.id,
        status = ?confirmation.status,
        "Confirmed advert"
    );

    Ok(StatusCode::OK)
}

/// List all adverts (GET /api/adverts).
pub async fn list_adverts(State(state): State<AppState>) -> Result<Json<Vec<Advert>>, AppError> {
    let adverts = state.advert_repo.get_all_adverts().await?;
    Ok(Json(adverts))
}

/// Get a single advert by ID (GET /api/adverts/{id}).
pub async fn get_advert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Advert>, AppError> {
    let advert = state.advert_repo.get_advert(&id).await?;
    Ok(Json(advert))
}
