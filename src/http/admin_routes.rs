use super::{AdminUser, ApiError, AppState};
use crate::domain::{Order, OrderStatus, Product, ProductCreate, ProductPatch};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price_cents: i64,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub stock: u32,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub stock: Option<u32>,
    #[serde(default, with = "super::double_option")]
    pub image_url: Option<Option<String>>,
}

#[instrument(skip(state, _admin))]
pub async fn list_all_orders(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list_all().await?))
}

#[instrument(skip(state, admin, body))]
pub async fn set_order_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Json(body): Json<SetStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    let status: OrderStatus = body.status.parse().map_err(ApiError::BadRequest)?;
    let order = state.orders.set_status(id, status).await?;
    info!(admin_id = %admin.0.user_id, order_id = %order.id, %status, "Order status set");
    Ok(Json(order))
}

#[instrument(skip(state, _admin, body))]
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let id = state
        .products
        .create_product(ProductCreate {
            name: body.name,
            description: body.description,
            category: body.category,
            price_cents: body.price_cents,
            sizes: body.sizes,
            stock: body.stock,
            image_url: body.image_url,
        })
        .await?;
    let product = state
        .products
        .get_product(id.clone())
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, _admin, body))]
pub async fn update_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .update_product(
            id,
            ProductPatch {
                name: body.name,
                description: body.description,
                category: body.category,
                price_cents: body.price_cents,
                sizes: body.sizes,
                stock: body.stock,
                image_url: body.image_url,
            },
        )
        .await?;
    Ok(Json(product))
}

#[instrument(skip(state, _admin))]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.products.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
