//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` request DTOs and `Serialize` response DTOs for the
//!   endpoints that touch the entity

pub mod place;
pub mod user;
