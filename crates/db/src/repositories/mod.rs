//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod place_repo;
pub mod user_repo;

pub use place_repo::PlaceRepo;
pub use user_repo::UserRepo;
