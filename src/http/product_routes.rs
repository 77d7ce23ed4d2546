use super::{ApiError, AppState, AuthUser};
use crate::domain::{Comment, CommentCreate, Product};
use crate::product_actor::ProductFilter;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub body: String,
    pub rating: u8,
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .products
        .list_products(ProductFilter {
            category: query.category,
            q: query.q,
        })
        .await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .products
        .get_product(id.clone())
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(format!("Product not found: {}", id)))
}

#[instrument(skip(state))]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    // Comments for a product that was never in the catalog are a 404, not [].
    if state.products.get_product(id.clone()).await?.is_none() {
        return Err(ApiError::NotFound(format!("Product not found: {}", id)));
    }
    Ok(Json(state.comments.list_for_product(id).await?))
}

#[instrument(skip(state, body))]
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if state.products.get_product(id.clone()).await?.is_none() {
        return Err(ApiError::NotFound(format!("Product not found: {}", id)));
    }
    let author = state
        .users
        .get_user(auth.user_id.clone())
        .await?
        .ok_or(ApiError::NotFound(auth.user_id.clone()))?;

    let comment = state
        .comments
        .add(CommentCreate {
            product_id: id,
            user_id: auth.user_id,
            author_name: author.name,
            body: body.body,
            rating: body.rating,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
