//! Hero read handlers: shallow list, deep detail.

use crate::error::AppError;
use crate::response::hero_detail;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let heroes = state.store.list_heroes().await?;
    Ok(Json(heroes))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let hero = state
        .store
        .hero(id)
        .await?
        .ok_or_else(|| AppError::not_found("Hero"))?;
    let detail = hero_detail(state.store.as_ref(), hero).await?;
    Ok(Json(detail))
}
