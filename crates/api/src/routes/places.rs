//! Routes for questions and guesses, mounted at `/places`.
//!
//! ```text
//! GET  /random   -> random_question
//! GET  /{id}     -> get_place
//! POST /guess    -> check_guess
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::places;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/random", get(places::random_question))
        .route("/guess", post(places::check_guess))
        .route("/{id}", get(places::get_place))
}
