use super::{ApiError, AppState, AuthUser};
use crate::domain::Order;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub shipping_address: String,
    pub parcel_shop_id: Option<String>,
}

#[instrument(skip(state, body))]
pub async fn checkout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    if body.shipping_address.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Shipping address is required".to_string(),
        ));
    }
    let order = state
        .orders
        .checkout(auth.user_id, body.shipping_address, body.parcel_shop_id)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list_for_user(auth.user_id).await?))
}

#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    state
        .orders
        .get_order_for_user(id.clone(), auth.user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(format!("Order not found: {}", id)))
}

#[instrument(skip(state))]
pub async fn initiate_return(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order = state.orders.initiate_return(id, auth.user_id).await?;
    Ok(Json(order))
}
