use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecycledError {
    #[error("Listing not found: {0}")]
    NotFound(String),
    #[error("Listing validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
