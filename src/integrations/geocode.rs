use super::IntegrationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A pickup point near the customer's address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelShop {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-form address to coordinates.
    async fn geocode(&self, address: &str) -> Result<Coordinates, IntegrationError>;

    /// Parcel shops near a point, as returned by the hosted place search.
    async fn nearby_parcel_shops(
        &self,
        position: Coordinates,
    ) -> Result<Vec<ParcelShop>, IntegrationError>;
}

/// Live client for the hosted geocoding + place-search API.
pub struct HostedGeocoder {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedGeocoder {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, IntegrationError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(IntegrationError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Geocoder for HostedGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinates, IntegrationError> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("q", address), ("key", &self.api_key)])
            .send()
            .await?;

        let hits: Vec<Coordinates> = Self::check(response).await?.json().await?;
        hits.into_iter()
            .next()
            .ok_or_else(|| IntegrationError::NoResult(address.to_string()))
    }

    #[instrument(skip(self))]
    async fn nearby_parcel_shops(
        &self,
        position: Coordinates,
    ) -> Result<Vec<ParcelShop>, IntegrationError> {
        let response = self
            .http
            .get(format!("{}/nearby", self.base_url))
            .query(&[
                ("lat", position.lat.to_string()),
                ("lon", position.lon.to_string()),
                ("category", "parcel_shop".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }
}
