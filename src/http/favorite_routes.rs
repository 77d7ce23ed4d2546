use super::{ApiError, AppState, AuthUser};
use crate::domain::Favorite;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub product_id: String,
}

#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    Ok(Json(state.favorites.list_for_user(auth.user_id).await?))
}

#[instrument(skip(state, body))]
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    // Pinning a product that isn't in the catalog is a 400.
    if state
        .products
        .get_product(body.product_id.clone())
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest(format!(
            "Unknown product: {}",
            body.product_id
        )));
    }
    let favorite = state.favorites.add(auth.user_id, body.product_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.favorites.remove(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
