use super::{ApiError, AppState};
use crate::integrations::ParcelShop;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct ParcelShopQuery {
    pub address: String,
}

/// Geocode the customer's address, then list pickup points around it.
#[instrument(skip(state))]
pub async fn parcel_shops(
    State(state): State<AppState>,
    Query(query): Query<ParcelShopQuery>,
) -> Result<Json<Vec<ParcelShop>>, ApiError> {
    if query.address.trim().is_empty() {
        return Err(ApiError::BadRequest("Address is required".to_string()));
    }
    let position = state.geocoder.geocode(&query.address).await?;
    let shops = state.geocoder.nearby_parcel_shops(position).await?;
    Ok(Json(shops))
}
