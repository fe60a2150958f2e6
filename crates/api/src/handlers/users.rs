//! Handlers for registration and score tracking.

use axum::extract::{Path, State};
use axum::Json;

use globetrotter_core::error::CoreError;
use globetrotter_core::scoring;
use globetrotter_core::types::DbId;
use globetrotter_db::models::user::{
    MessageResponse, RegisterRequest, RegisterResponse, ScoreResponse, UpdateScoreRequest,
};
use globetrotter_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /users/register
///
/// Idempotent on username: a repeated registration returns the existing
/// user's id without creating a row or touching the counters.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    let (user, created) = UserRepo::create_or_get(&state.pool, &input.username).await?;

    let message = if created {
        tracing::info!(user_id = user.id, "User registered");
        "User registered successfully!"
    } else {
        "Username already taken"
    };

    Ok(Json(RegisterResponse {
        message: message.to_string(),
        user_id: user.id,
    }))
}

/// POST /users/score
///
/// Record an answer outcome for a user. Exactly one counter changes, as a
/// single atomic row update.
pub async fn update_score(
    State(state): State<AppState>,
    Json(input): Json<UpdateScoreRequest>,
) -> AppResult<Json<MessageResponse>> {
    let updated = UserRepo::record_answer(&state.pool, input.user_id, input.correct).await?;
    if !updated {
        return Err(CoreError::NotFound {
            entity: "user",
            id: input.user_id,
        }
        .into());
    }

    tracing::info!(
        user_id = input.user_id,
        correct = input.correct,
        "Score updated",
    );

    Ok(Json(MessageResponse {
        message: "Score updated successfully!".to_string(),
    }))
}

/// GET /users/score/{user_id}
///
/// The displayed score, derived from the stored counters on every read.
pub async fn get_score(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ScoreResponse>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    let score = scoring::compute_score(user.correct_answers, user.incorrect_answers);

    Ok(Json(ScoreResponse {
        score,
        message: "Score fetched successfully".to_string(),
    }))
}
