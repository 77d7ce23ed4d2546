use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{User, UserCreate, UserPatch};
use crate::user_actor::{UserError, UserFilter};
use tracing::{debug, instrument};

/// Client for the user collection.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Creates a user after a uniqueness check on the email.
    ///
    /// Check-then-insert: the email "unique constraint" is this check,
    /// nothing stronger. The check and the insert are separate messages, so
    /// two racing registrations for the same email can both pass.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn create_user(&self, params: UserCreate) -> Result<String, UserError> {
        debug!("Sending request");
        let existing = self
            .inner
            .list(UserFilter::ByEmail(params.email.clone()))
            .await
            .map_err(map_user_err)?;
        if !existing.is_empty() {
            return Err(UserError::AlreadyExists(params.email));
        }
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Rejected(msg) => UserError::ValidationError(msg),
            other => map_user_err(other),
        })
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: String) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let mut users = self
            .inner
            .list(UserFilter::ByEmail(email))
            .await
            .map_err(map_user_err)?;
        Ok(users.pop())
    }

    /// Updates a profile. An email change gets the same uniqueness check as
    /// registration; a hit on a different user's record is a conflict.
    #[instrument(skip(self, patch))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        if let Some(email) = &patch.email {
            let existing = self
                .inner
                .list(UserFilter::ByEmail(email.clone()))
                .await
                .map_err(map_user_err)?;
            if existing.iter().any(|u| u.id != id) {
                return Err(UserError::AlreadyExists(email.clone()));
            }
        }
        self.inner.update(id, patch).await.map_err(|e| match e {
            FrameworkError::Rejected(msg) => UserError::ValidationError(msg),
            other => map_user_err(other),
        })
    }
}
