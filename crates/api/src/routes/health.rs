//! Service health, mounted at the root.
//!
//! A single `placesdata` count doubles as the database reachability probe
//! and tells operators whether the quiz has anything to serve yet (a fresh
//! deployment has an empty place store until the seed script runs).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use globetrotter_db::repositories::PlaceRepo;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answered, `"degraded"` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of places available for question generation (0 when the
    /// database is unreachable or unseeded).
    pub places: i64,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let places = PlaceRepo::count(&state.pool).await.ok();

    Json(HealthResponse {
        status: if places.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: places.is_some(),
        places: places.unwrap_or(0),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
