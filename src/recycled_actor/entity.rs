use crate::actor_framework::Entity;
use crate::domain::{RecycledProduct, RecycledProductCreate, RecycledProductPatch};
use chrono::Utc;

#[derive(Debug, Clone)]
pub enum RecycledFilter {
    /// Listings shown in the open marketplace.
    PublicOnly,
    /// Everything a seller has listed, public or not.
    BySeller(String),
}

impl Entity for RecycledProduct {
    type Id = String;
    type CreateParams = RecycledProductCreate;
    type Patch = RecycledProductPatch;
    type Filter = RecycledFilter;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: RecycledProductCreate) -> Result<Self, String> {
        if params.title.is_empty() {
            return Err("Listing title must not be empty".to_string());
        }
        if params.price_cents < 0 {
            return Err(format!("Negative price: {}", params.price_cents));
        }
        Ok(Self {
            id,
            seller_id: params.seller_id,
            title: params.title,
            description: params.description,
            material: params.material,
            price_cents: params.price_cents,
            image_url: params.image_url,
            public: params.public,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &RecycledFilter) -> bool {
        match filter {
            RecycledFilter::PublicOnly => self.public,
            RecycledFilter::BySeller(seller_id) => &self.seller_id == seller_id,
        }
    }

    fn on_update(&mut self, patch: RecycledProductPatch) -> Result<(), String> {
        if let Some(title) = patch.title {
            if title.is_empty() {
                return Err("Listing title must not be empty".to_string());
            }
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(material) = patch.material {
            self.material = material;
        }
        if let Some(price_cents) = patch.price_cents {
            if price_cents < 0 {
                return Err(format!("Negative price: {}", price_cents));
            }
            self.price_cents = price_cents;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(public) = patch.public {
            self.public = public;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
