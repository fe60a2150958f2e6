//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::types::Json;
use sqlx::PgPool;
use tower::ServiceExt;

use globetrotter_api::config::ServerConfig;
use globetrotter_api::router::build_app_router;
use globetrotter_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the permissive `*` CORS posture (the production default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Seed one place row with deterministic clue/fact/trivia lists derived
/// from the city name. Returns the new row's id.
pub async fn insert_place(pool: &PgPool, city: &str, country: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO placesdata (city, country, clues, fun_fact, trivia) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(city)
    .bind(country)
    .bind(Json(vec![
        format!("First clue about {city}"),
        format!("Second clue about {city}"),
    ]))
    .bind(Json(vec![format!("Fun fact about {city}")]))
    .bind(Json(vec![format!("Trivia about {city}")]))
    .fetch_one(pool)
    .await
    .expect("insert place")
}
