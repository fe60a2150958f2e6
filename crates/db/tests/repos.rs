//! Repository-level integration tests.
//!
//! Each test runs against a fresh database provisioned by `#[sqlx::test]`
//! with this crate's migrations applied.

use sqlx::types::Json;
use sqlx::PgPool;

use globetrotter_db::repositories::{PlaceRepo, UserRepo};

/// Insert a place with fixed clue/fact/trivia lists.
async fn insert_place(pool: &PgPool, city: &str, country: &str) -> i64 {
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

// ---------------------------------------------------------------------------
// UserRepo
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_or_get_creates_then_reuses(pool: PgPool) {
    let (created, was_created) = UserRepo::create_or_get(&pool, "alice").await.unwrap();
    assert!(was_created);
    assert_eq!(created.username, "alice");
    assert_eq!(created.correct_answers, 0);
    assert_eq!(created.incorrect_answers, 0);

    let (reused, was_created) = UserRepo::create_or_get(&pool, "alice").await.unwrap();
    assert!(!was_created);
    assert_eq!(reused.id, created.id);
    assert_eq!(reused.correct_answers, 0);
    assert_eq!(reused.incorrect_answers, 0);
}

#[sqlx::test]
async fn usernames_are_case_sensitive(pool: PgPool) {
    let (alice, _) = UserRepo::create_or_get(&pool, "alice").await.unwrap();
    let (alice_upper, was_created) = UserRepo::create_or_get(&pool, "Alice").await.unwrap();

    assert!(was_created);
    assert_ne!(alice.id, alice_upper.id);
}

#[sqlx::test]
async fn empty_username_is_accepted(pool: PgPool) {
    let (user, was_created) = UserRepo::create_or_get(&pool, "").await.unwrap();
    assert!(was_created);
    assert_eq!(user.username, "");
}

#[sqlx::test]
async fn record_answer_increments_exactly_one_counter(pool: PgPool) {
    let (user, _) = UserRepo::create_or_get(&pool, "bob").await.unwrap();

    assert!(UserRepo::record_answer(&pool, user.id, true).await.unwrap());
    assert!(UserRepo::record_answer(&pool, user.id, true).await.unwrap());
    assert!(UserRepo::record_answer(&pool, user.id, false).await.unwrap());

    let user = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(user.correct_answers, 2);
    assert_eq!(user.incorrect_answers, 1);
}

#[sqlx::test]
async fn record_answer_for_unknown_user_affects_nothing(pool: PgPool) {
    assert!(!UserRepo::record_answer(&pool, 9999, true).await.unwrap());
}

// ---------------------------------------------------------------------------
// PlaceRepo
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn find_random_on_empty_table_returns_none(pool: PgPool) {
    assert!(PlaceRepo::find_random(&pool).await.unwrap().is_none());
}

#[sqlx::test]
async fn find_random_returns_an_existing_row(pool: PgPool) {
    let mut ids = Vec::new();
    for city in ["Paris", "Tokyo", "Rome"] {
        ids.push(insert_place(&pool, city, "Somewhere").await);
    }

    let place = PlaceRepo::find_random(&pool).await.unwrap().unwrap();
    assert!(ids.contains(&place.id));
}

#[sqlx::test]
async fn distractor_cities_excludes_the_correct_city_by_value(pool: PgPool) {
    insert_place(&pool, "Paris", "France").await;
    // A second place with the same city name must also be excluded.
    insert_place(&pool, "Paris", "Texas").await;
    insert_place(&pool, "Tokyo", "Japan").await;
    insert_place(&pool, "Rome", "Italy").await;

    let cities = PlaceRepo::distractor_cities(&pool, "Paris").await.unwrap();
    assert_eq!(cities, vec!["Rome".to_string(), "Tokyo".to_string()]);
}

#[sqlx::test]
async fn find_by_id_round_trips_jsonb_lists(pool: PgPool) {
    let id = insert_place(&pool, "Cairo", "Egypt").await;

    let place = PlaceRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(place.city, "Cairo");
    assert_eq!(place.clues.0.len(), 2);
    assert_eq!(place.fun_fact.0, vec!["Fun fact about Cairo".to_string()]);
}
