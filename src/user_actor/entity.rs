use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use chrono::Utc;

/// Lookup predicates for the user collection.
#[derive(Debug, Clone)]
pub enum UserFilter {
    All,
    ByEmail(String),
}

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Filter = UserFilter;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        if params.email.is_empty() || !params.email.contains('@') {
            return Err(format!("Invalid email: {}", params.email));
        }
        Ok(Self {
            id,
            email: params.email,
            password_hash: params.password_hash,
            name: params.name,
            role: params.role,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::All => true,
            UserFilter::ByEmail(email) => self.email.eq_ignore_ascii_case(email),
        }
    }

    /// Updates the user's profile information.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            if email.is_empty() || !email.contains('@') {
                return Err(format!("Invalid email: {}", email));
            }
            self.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            self.password_hash = password_hash;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
