use super::actions::{ProductAction, ProductActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};
use chrono::Utc;

/// Catalog query filter, mirroring the storefront's list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name.
    pub q: Option<String>,
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Filter = ProductFilter;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        if params.price_cents < 0 {
            return Err(format!("Negative price: {}", params.price_cents));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            category: params.category,
            price_cents: params.price_cents,
            sizes: params.sizes,
            stock: params.stock,
            image_url: params.image_url,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        if let Some(category) = &filter.category {
            if !self.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(q) = &filter.q {
            if !self.name.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        true
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            if name.is_empty() {
                return Err("Product name must not be empty".to_string());
            }
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price_cents) = patch.price_cents {
            if price_cents < 0 {
                return Err(format!("Negative price: {}", price_cents));
            }
            self.price_cents = price_cents;
        }
        if let Some(sizes) = patch.sizes {
            self.sizes = sizes;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        Ok(())
    }

    /// # Actions
    /// - `ReserveStock(amount)`: decrements stock by the specified amount
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::ReserveStock(amount) => {
                if self.stock >= amount {
                    self.stock -= amount;
                    Ok(ProductActionResult::Reserved)
                } else {
                    Err(format!(
                        "Insufficient stock: {} available, {} requested",
                        self.stock, amount
                    ))
                }
            }
        }
    }
}
