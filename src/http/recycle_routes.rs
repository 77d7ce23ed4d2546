use super::{ApiError, AppState, AuthUser};
use crate::domain::{RecycledProduct, RecycledProductCreate, RecycledProductPatch};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub material: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    /// Listings start private unless the seller opts in.
    #[serde(default)]
    pub public: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub material: Option<String>,
    pub price_cents: Option<i64>,
    #[serde(default, with = "super::double_option")]
    pub image_url: Option<Option<String>>,
    pub public: Option<bool>,
}

#[instrument(skip(state))]
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecycledProduct>>, ApiError> {
    Ok(Json(state.recycled.list_public().await?))
}

#[instrument(skip(state))]
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<RecycledProduct>>, ApiError> {
    Ok(Json(state.recycled.list_for_seller(auth.user_id).await?))
}

#[instrument(skip(state, body))]
pub async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<RecycledProduct>), ApiError> {
    let listing = state
        .recycled
        .create_listing(RecycledProductCreate {
            seller_id: auth.user_id,
            title: body.title,
            description: body.description,
            material: body.material,
            price_cents: body.price_cents,
            image_url: body.image_url,
            public: body.public,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

#[instrument(skip(state, body))]
pub async fn update_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateListingRequest>,
) -> Result<Json<RecycledProduct>, ApiError> {
    let listing = state
        .recycled
        .update_for_seller(
            id,
            auth.user_id,
            RecycledProductPatch {
                title: body.title,
                description: body.description,
                material: body.material,
                price_cents: body.price_cents,
                image_url: body.image_url,
                public: body.public,
            },
        )
        .await?;
    Ok(Json(listing))
}

#[instrument(skip(state))]
pub async fn delete_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.recycled.delete_for_seller(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
