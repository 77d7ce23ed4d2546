use super::{ApiError, AppState, AuthUser};
use crate::auth::hash_password;
use crate::domain::{Session, User, UserPatch};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .users
        .get_user(auth.user_id.clone())
        .await?
        .ok_or(ApiError::NotFound(auth.user_id.clone()))?;
    let sessions = state.sessions.list_for_user(auth.user_id).await?;
    Ok(Json(ProfileResponse { user, sessions }))
}

#[instrument(skip(state, body))]
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    let password_hash = match body.password {
        Some(password) if password.len() < 8 => {
            return Err(ApiError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ))
        }
        Some(password) => Some(hash_password(&password).map_err(ApiError::Internal)?),
        None => None,
    };

    let user = state
        .users
        .update_user(
            auth.user_id,
            UserPatch {
                name: body.name,
                email: body.email,
                password_hash,
            },
        )
        .await?;
    Ok(Json(user))
}
