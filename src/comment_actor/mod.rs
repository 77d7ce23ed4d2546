//! Comment collection: customer reviews per product.

use crate::actor_framework::Entity;
use crate::domain::{Comment, CommentCreate};
use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum CommentFilter {
    ByProduct(String),
}

impl Entity for Comment {
    type Id = String;
    type CreateParams = CommentCreate;
    type Patch = ();
    type Filter = CommentFilter;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: CommentCreate) -> Result<Self, String> {
        if !(1..=5).contains(&params.rating) {
            return Err(format!("Rating out of range: {}", params.rating));
        }
        if params.body.is_empty() {
            return Err("Comment body must not be empty".to_string());
        }
        Ok(Self {
            id,
            product_id: params.product_id,
            user_id: params.user_id,
            author_name: params.author_name,
            body: params.body,
            rating: params.rating,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &CommentFilter) -> bool {
        match filter {
            CommentFilter::ByProduct(product_id) => &self.product_id == product_id,
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
pub enum CommentError {
    #[error("Comment validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
