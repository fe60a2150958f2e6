//! Route definitions.
//!
//! Routes are mounted at the root (no version prefix):
//!
//! ```text
//! GET  /health                    service + database health
//!
//! GET  /places/random             random question
//! GET  /places/{id}               full place record
//! POST /places/guess              answer verification
//!
//! POST /users/register            idempotent registration
//! POST /users/score               record an answer outcome
//! GET  /users/score/{user_id}     derived score
//! ```

pub mod health;
pub mod places;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except middleware).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/places", places::router())
        .nest("/users", users::router())
}
