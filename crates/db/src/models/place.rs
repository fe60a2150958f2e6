//! Place entity model and question/guess DTOs.

use globetrotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Full place row from the `placesdata` table.
///
/// The list-valued columns are stored as JSONB arrays of strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub city: String,
    pub country: String,
    pub clues: Json<Vec<String>>,
    pub fun_fact: Json<Vec<String>>,
    pub trivia: Json<Vec<String>>,
    pub created_at: Timestamp,
}

/// Response payload for `GET /places/random`.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    /// The selected place's id, echoed back on guess submission.
    pub question_id: DbId,
    pub clues: Vec<String>,
    /// Shuffled 4-entry multiple-choice city list.
    pub options: Vec<String>,
}

/// Request body for `POST /places/guess`.
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub question_id: DbId,
    pub user_answer: String,
}

/// Response payload for `POST /places/guess`.
///
/// The fun fact describes the correct place even when the guess was wrong.
#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub correct: bool,
    pub fun_fact: String,
    pub correct_ans: String,
}
