use crate::actor_framework::Entity;
use crate::domain::{CartItem, CartItemCreate, CartItemPatch};

#[derive(Debug, Clone)]
pub enum CartFilter {
    ByUser(String),
    /// Exact row for merge-on-add: same user, product and size.
    ByUserProductSize {
        user_id: String,
        product_id: String,
        size: String,
    },
}

impl Entity for CartItem {
    type Id = String;
    type CreateParams = CartItemCreate;
    type Patch = CartItemPatch;
    type Filter = CartFilter;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: CartItemCreate) -> Result<Self, String> {
        if params.quantity == 0 {
            return Err("Quantity must be at least 1".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
            size: params.size,
            quantity: params.quantity,
        })
    }

    fn matches(&self, filter: &CartFilter) -> bool {
        match filter {
            CartFilter::ByUser(user_id) => &self.user_id == user_id,
            CartFilter::ByUserProductSize {
                user_id,
                product_id,
                size,
            } => {
                &self.user_id == user_id && &self.product_id == product_id && &self.size == size
            }
        }
    }

    fn on_update(&mut self, patch: CartItemPatch) -> Result<(), String> {
        if patch.quantity == 0 {
            return Err("Quantity must be at least 1".to_string());
        }
        self.quantity = patch.quantity;
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
