//! Repository for the `users` table.

use sqlx::PgPool;

use globetrotter_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, username, correct_answers, incorrect_answers, created_at";

/// CRUD operations for players.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by exact username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Register a user or return the existing one for this username.
    ///
    /// Idempotent and race-safe: the `uq_users_username` index plus
    /// `ON CONFLICT DO NOTHING` guarantee at most one row per username even
    /// under concurrent first registrations. The returned flag is `true`
    /// when a new row was created.
    pub async fn create_or_get(pool: &PgPool, username: &str) -> Result<(User, bool), sqlx::Error> {
        if let Some(user) = Self::find_by_username(pool, username).await? {
            return Ok((user, false));
        }

        let query = format!(
            "INSERT INTO users (username) VALUES ($1) \
             ON CONFLICT (username) DO NOTHING \
             RETURNING {USER_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(user) => Ok((user, true)),
            // Lost a registration race: the row now exists, fetch it.
            None => {
                let user = Self::find_by_username(pool, username)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok((user, false))
            }
        }
    }

    /// Record an answer outcome: exactly one counter is incremented, as a
    /// single atomic row update (no read-modify-write in process memory).
    ///
    /// Returns `false` when no user with the given ID exists.
    pub async fn record_answer(
        pool: &PgPool,
        user_id: DbId,
        correct: bool,
    ) -> Result<bool, sqlx::Error> {
        let query = if correct {
            "UPDATE users SET correct_answers = correct_answers + 1 WHERE id = $1"
        } else {
            "UPDATE users SET incorrect_answers = incorrect_answers + 1 WHERE id = $1"
        };

        let result = sqlx::query(query).bind(user_id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
