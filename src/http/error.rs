use crate::auth::AuthError;
use crate::cart_actor::CartError;
use crate::comment_actor::CommentError;
use crate::favorite_actor::FavoriteError;
use crate::integrations::IntegrationError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::recycled_actor::RecycledError;
use crate::session_actor::SessionError;
use crate::user_actor::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// One error type at the HTTP boundary. Every domain error converts into a
/// status code plus the flat `{"error": "..."}` body the frontend expects.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized(e.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound(e.to_string()),
            UserError::AlreadyExists(_) => ApiError::Conflict(e.to_string()),
            // Wrong password is a 400, not a 401: the storefront's login form
            // relies on it.
            UserError::InvalidCredentials => ApiError::BadRequest(e.to_string()),
            UserError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            UserError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProductError::InsufficientStock(_) => ApiError::Conflict(e.to_string()),
            ProductError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            ProductError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CartError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            CartError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::InvalidUser(_)
            | OrderError::InvalidProduct(_)
            | OrderError::EmptyCart
            | OrderError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            OrderError::InsufficientStock(_) => ApiError::Conflict(e.to_string()),
            OrderError::PaymentFailed(_) | OrderError::ActorCommunicationError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<FavoriteError> for ApiError {
    fn from(e: FavoriteError) -> Self {
        match e {
            FavoriteError::NotFound(_) => ApiError::NotFound(e.to_string()),
            FavoriteError::AlreadyExists(_) => ApiError::Conflict(e.to_string()),
            FavoriteError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(e: CommentError) -> Self {
        match e {
            CommentError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            CommentError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RecycledError> for ApiError {
    fn from(e: RecycledError) -> Self {
        match e {
            RecycledError::NotFound(_) => ApiError::NotFound(e.to_string()),
            RecycledError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            RecycledError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => ApiError::NotFound(e.to_string()),
            SessionError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<IntegrationError> for ApiError {
    fn from(e: IntegrationError) -> Self {
        match e {
            // An address that geocodes to nothing is the caller's problem.
            IntegrationError::NoResult(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
