//! Handlers for question generation and answer verification.
//!
//! Both operations are pure reads: question generation samples clues and
//! options from a randomly selected place, answer verification compares the
//! guess against the stored city and reveals a fun fact either way.

use axum::extract::{Path, State};
use axum::Json;

use globetrotter_core::error::CoreError;
use globetrotter_core::types::DbId;
use globetrotter_core::{answer, question};
use globetrotter_db::models::place::{GuessRequest, GuessResponse, Place, QuestionResponse};
use globetrotter_db::repositories::PlaceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /places/random
///
/// Select one place uniformly at random and derive a question from it:
/// up to two of its clues plus a shuffled 4-option city list.
pub async fn random_question(State(state): State<AppState>) -> AppResult<Json<QuestionResponse>> {
    let place = PlaceRepo::find_random(&state.pool)
        .await?
        .ok_or(CoreError::EmptyCollection { entity: "places" })?;

    let distractor_pool = PlaceRepo::distractor_cities(&state.pool, &place.city).await?;

    let mut rng = rand::rng();
    let clues = question::sample_clues(&mut rng, &place.clues.0);
    let options = question::build_options(&mut rng, &place.city, &distractor_pool)?;

    Ok(Json(QuestionResponse {
        question_id: place.id,
        clues,
        options,
    }))
}

/// POST /places/guess
///
/// Check a submitted answer against the question's place. The comparison is
/// case-insensitive exact equality; the response always carries a randomly
/// chosen fun fact about the correct place.
pub async fn check_guess(
    State(state): State<AppState>,
    Json(input): Json<GuessRequest>,
) -> AppResult<Json<GuessResponse>> {
    let place = PlaceRepo::find_by_id(&state.pool, input.question_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "question",
            id: input.question_id,
        })?;

    let correct = answer::is_correct_guess(&place.city, &input.user_answer);

    let fun_fact = answer::pick_fun_fact(&mut rand::rng(), &place.fun_fact.0)
        .ok_or_else(|| AppError::Internal(format!("place {} has no fun facts", place.id)))?
        .to_string();

    Ok(Json(GuessResponse {
        correct,
        fun_fact,
        correct_ans: place.city,
    }))
}

/// GET /places/{id}
///
/// Full place record, including the trivia list that question generation
/// never surfaces.
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "place",
            id,
        })?;

    Ok(Json(place))
}
