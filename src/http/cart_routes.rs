use super::{ApiError, AppState, AuthUser};
use crate::domain::{CartItem, Product};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(default)]
    pub size: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: u32,
}

/// A cart row joined with its catalog product. The product is optional
/// because an admin may have deleted it after the row was created.
#[derive(Serialize)]
pub struct CartRow {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Option<Product>,
}

#[instrument(skip(state))]
pub async fn list_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CartRow>>, ApiError> {
    let items = state.cart.list_for_user(auth.user_id).await?;
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let product = state.products.get_product(item.product_id.clone()).await?;
        rows.push(CartRow { item, product });
    }
    Ok(Json(rows))
}

#[instrument(skip(state, body))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<CartItem>), ApiError> {
    let item = state
        .cart
        .add_item(auth.user_id, body.product_id, body.size, body.quantity)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state, body))]
pub async fn update_cart_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<CartItem>, ApiError> {
    let item = state
        .cart
        .update_quantity(id, auth.user_id, body.quantity)
        .await?;
    Ok(Json(item))
}

#[instrument(skip(state))]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.cart.remove_item(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
