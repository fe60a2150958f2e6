use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} available")]
    EmptyCollection { entity: &'static str },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}
