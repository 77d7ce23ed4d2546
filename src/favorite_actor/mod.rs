//! Favorite collection: product pins per user.

use crate::actor_framework::Entity;
use crate::domain::{Favorite, FavoriteCreate};
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum FavoriteFilter {
    ByUser(String),
    ByUserProduct { user_id: String, product_id: String },
}

impl Entity for Favorite {
    type Id = String;
    type CreateParams = FavoriteCreate;
    type Patch = ();
    type Filter = FavoriteFilter;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: FavoriteCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
        })
    }

    fn matches(&self, filter: &FavoriteFilter) -> bool {
        match filter {
            FavoriteFilter::ByUser(user_id) => &self.user_id == user_id,
            FavoriteFilter::ByUserProduct {
                user_id,
                product_id,
            } => &self.user_id == user_id && &self.product_id == product_id,
        }
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FavoriteError {
    #[error("Favorite not found: {0}")]
    NotFound(String),
    #[error("Already a favorite: {0}")]
    AlreadyExists(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
