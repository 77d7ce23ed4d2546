use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a catalog product.
///
/// Prices are integer cents throughout the system; the frontend formats them.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub sizes: Vec<String>,
    pub stock: u32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the shop offers this product in the given size. Products with
    /// no size list (e.g. brooches) accept the empty size only.
    pub fn offers_size(&self, size: &str) -> bool {
        if self.sizes.is_empty() {
            size.is_empty()
        } else {
            self.sizes.iter().any(|s| s == size)
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub sizes: Vec<String>,
    pub stock: u32,
    pub image_url: Option<String>,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub stock: Option<u32>,
    pub image_url: Option<Option<String>>,
}
