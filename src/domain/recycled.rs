use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user-submitted secondhand listing in the recycle marketplace.
///
/// `public` controls whether the listing appears in the open marketplace;
/// the seller always sees their own listings.
#[derive(Debug, Clone, Serialize)]
pub struct RecycledProduct {
    pub id: String,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub material: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub public: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecycledProductCreate {
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub material: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub public: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RecycledProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub material: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<Option<String>>,
    pub public: Option<bool>,
}
