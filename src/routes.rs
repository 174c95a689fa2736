//! Router assembly: data API, root greeting, health and version probes.

use crate::handlers::{hero, hero_power, power};
use crate::state::AppState;
use axum::{
    response::Html,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn index() -> Html<&'static str> {
    Html("<h1>SupaCell</h1>")
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Data API routes from the endpoint table.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/heroes", get(hero::list))
        .route("/heroes/:id", get(hero::read))
        .route("/powers", get(power::list))
        .route("/powers/:id", get(power::read).patch(power::update))
        .route("/hero_powers", post(hero_power::create))
        .route("/hero_powers/:id", delete(hero_power::remove))
        .with_state(state)
}

/// Full application: greeting, probes, data API, open CORS for testing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/version", get(version))
        .merge(api_routes(state))
        .layer(CorsLayer::permissive())
}
