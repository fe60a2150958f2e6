//! User entity model and registration/score DTOs.

use globetrotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub correct_answers: i32,
    pub incorrect_answers: i32,
    pub created_at: Timestamp,
}

/// Request body for `POST /users/register`.
///
/// No format validation is applied; the username is taken verbatim.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
}

/// Response payload for `POST /users/register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: DbId,
}

/// Request body for `POST /users/score`.
#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    pub user_id: DbId,
    pub correct: bool,
}

/// Plain acknowledgment payload (`POST /users/score`).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response payload for `GET /users/score/{user_id}`.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: i64,
    pub message: String,
}
