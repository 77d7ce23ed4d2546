use super::{ApiError, AppState, AuthUser};
use crate::auth::{hash_password, verify_password};
use crate::domain::{Role, User, UserCreate};
use crate::user_actor::UserError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if body.password.len() < 8 {
        return Err(ApiError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let password_hash = hash_password(&body.password).map_err(ApiError::Internal)?;
    let id = state
        .users
        .create_user(UserCreate {
            email: body.email,
            password_hash,
            name: body.name,
            role: Role::User,
        })
        .await?;

    let user = state
        .users
        .get_user(id.clone())
        .await?
        .ok_or(ApiError::NotFound(id))?;

    info!(user_id = %user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Unknown email and wrong password answer identically.
    let user = state
        .users
        .find_by_email(body.email)
        .await?
        .ok_or(UserError::InvalidCredentials)
        .map_err(ApiError::from)?;

    if !verify_password(&body.password, &user.password_hash) {
        return Err(UserError::InvalidCredentials.into());
    }

    let session_id = state
        .sessions
        .open(user.id.clone(), Utc::now() + state.token_ttl)
        .await?;

    let token = state
        .jwt
        .issue(&user.id, user.role, &session_id, state.token_ttl)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(user_id = %user.id, "User logged in");
    Ok(Json(LoginResponse { token, user }))
}

#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    state.sessions.close(auth.session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
