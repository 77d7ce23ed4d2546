use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid user: {0}")]
    InvalidUser(String),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),
    #[error("Payment failed: {0}")]
    PaymentFailed(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
