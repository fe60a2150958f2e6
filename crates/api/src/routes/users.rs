//! Routes for registration and scoring, mounted at `/users`.
//!
//! ```text
//! POST /register          -> register
//! POST /score             -> update_score
//! GET  /score/{user_id}   -> get_score
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/score", post(users::update_score))
        .route("/score/{user_id}", get(users::get_score))
}
