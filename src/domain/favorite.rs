use serde::Serialize;

/// Membership row: a product pinned by a user.
#[derive(Debug, Clone, Serialize)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
}

#[derive(Debug, Clone)]
pub struct FavoriteCreate {
    pub user_id: String,
    pub product_id: String,
}
