//! Session collection: login records backing logout and the profile view.

use crate::actor_framework::Entity;
use crate::domain::{Session, SessionCreate};
use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum SessionFilter {
    ByUser(String),
}

impl Entity for Session {
    type Id = String;
    type CreateParams = SessionCreate;
    type Patch = ();
    type Filter = SessionFilter;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: SessionCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            user_id: params.user_id,
            created_at: Utc::now(),
            expires_at: params.expires_at,
        })
    }

    fn matches(&self, filter: &SessionFilter) -> bool {
        match filter {
            SessionFilter::ByUser(user_id) => &self.user_id == user_id,
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
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
