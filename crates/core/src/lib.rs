//! Globetrotter domain logic.
//!
//! Pure functions with zero internal dependencies so they can be used by
//! the repository layer, the API handlers, and any future CLI tooling.
//! Everything that touches randomness is generic over [`rand::Rng`] so
//! tests can drive it with a seeded generator.

pub mod answer;
pub mod error;
pub mod question;
pub mod scoring;
pub mod types;
