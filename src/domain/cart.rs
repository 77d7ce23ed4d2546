use serde::Serialize;

/// One row of a user's cart: a product+size mapped to a quantity.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub size: String,
    pub quantity: u32,
}

/// Payload for inserting a cart row.
#[derive(Debug, Clone)]
pub struct CartItemCreate {
    pub user_id: String,
    pub product_id: String,
    pub size: String,
    pub quantity: u32,
}

/// Payload for changing a cart row's quantity.
#[derive(Debug, Clone)]
pub struct CartItemPatch {
    pub quantity: u32,
}
