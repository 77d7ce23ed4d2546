use chrono::{DateTime, Utc};
use serde::Serialize;

/// A customer review attached to a product.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub author_name: String,
    pub body: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub product_id: String,
    pub user_id: String,
    pub author_name: String,
    pub body: String,
    pub rating: u8,
}
