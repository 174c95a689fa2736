//! Join-record handlers: create and delete.

use crate::error::AppError;
use crate::model::NewHeroPower;
use crate::response::{hero_power_deleted, hero_power_detail};
use crate::state::AppState;
use crate::validation::validate_strength;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateHeroPower {
    pub strength: Option<String>,
    pub hero_id: Option<i32>,
    pub power_id: Option<i32>,
}

/// POST /hero_powers. Checks run strength first, then both lookups, so a
/// request missing hero and power reports the combined error.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateHeroPower>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let strength = validate_strength(body.strength.as_deref().unwrap_or_default())?;

    let hero = match body.hero_id {
        Some(id) => state.store.hero(id).await?,
        None => None,
    };
    let power = match body.power_id {
        Some(id) => state.store.power(id).await?,
        None => None,
    };
    let (hero, power) = match (hero, power) {
        (Some(hero), Some(power)) => (hero, power),
        (None, None) => return Err(AppError::not_found("Hero and Power")),
        (None, Some(_)) => return Err(AppError::not_found("Hero")),
        (Some(_), None) => return Err(AppError::not_found("Power")),
    };

    let hero_power = state
        .store
        .create_hero_power(NewHeroPower {
            strength,
            hero_id: hero.id,
            power_id: power.id,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(hero_power_detail(hero_power, hero, power)),
    ))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    state
        .store
        .delete_hero_power(id)
        .await?
        .ok_or_else(|| AppError::not_found("Hero Power"))?;
    Ok(Json(hero_power_deleted()))
}
