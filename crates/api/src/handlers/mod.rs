//! HTTP request handlers.

pub mod places;
pub mod users;
