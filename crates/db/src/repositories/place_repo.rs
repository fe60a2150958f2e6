//! Repository for the `placesdata` table.
//!
//! Places are seeded out of band and read-only at runtime, so this
//! repository only provides lookups: by id, by random selection, and the
//! distractor-city pool for option building.

use rand::Rng;
use sqlx::PgPool;

use globetrotter_core::types::DbId;

use crate::models::place::Place;

/// Column list for `placesdata` queries.
const PLACE_COLUMNS: &str = "id, city, country, clues, fun_fact, trivia, created_at";

/// Read-only access to quiz places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Find a place by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {PLACE_COLUMNS} FROM placesdata WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of places currently in the store.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM placesdata")
            .fetch_one(pool)
            .await
    }

    /// Pick one place uniformly at random among current rows.
    ///
    /// Uses a random offset over a stable ordering instead of
    /// `ORDER BY random()`, which would sort the whole table per request.
    /// Returns `None` when the table is empty.
    pub async fn find_random(pool: &PgPool) -> Result<Option<Place>, sqlx::Error> {
        let count = Self::count(pool).await?;
        if count == 0 {
            return Ok(None);
        }

        // The RNG handle must not live across an await point.
        let offset = rand::rng().random_range(0..count);

        let query = format!("SELECT {PLACE_COLUMNS} FROM placesdata ORDER BY id LIMIT 1 OFFSET $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(offset)
            .fetch_optional(pool)
            .await
    }

    /// Distinct city names of all places other than `city` (compared by
    /// value, so a duplicate of the correct city is excluded as well).
    pub async fn distractor_cities(pool: &PgPool, city: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT city FROM placesdata WHERE city <> $1 ORDER BY city",
        )
        .bind(city)
        .fetch_all(pool)
        .await
    }
}
