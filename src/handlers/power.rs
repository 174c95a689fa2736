//! Power handlers: list, detail, partial update.

use crate::error::AppError;
use crate::model::PowerChanges;
use crate::state::AppState;
use crate::validation::validate_description;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let powers = state.store.list_powers().await?;
    Ok(Json(powers))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let power = state
        .store
        .power(id)
        .await?
        .ok_or_else(|| AppError::not_found("Power"))?;
    Ok(Json(power))
}

/// PATCH /powers/{id}. Existence is checked before field validation, and the
/// single UPDATE runs only once every supplied field has passed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<PowerChanges>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if state.store.power(id).await?.is_none() {
        return Err(AppError::not_found("Power"));
    }
    if let Some(description) = changes.description.as_deref() {
        validate_description(description)?;
    }
    let power = state
        .store
        .update_power(id, &changes)
        .await?
        .ok_or_else(|| AppError::not_found("Power"))?;
    Ok(Json(power))
}
