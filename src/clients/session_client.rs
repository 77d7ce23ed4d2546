use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Session, SessionCreate};
use crate::session_actor::{SessionError, SessionFilter};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for login session records.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }

    /// Opens a session at login; the returned id becomes the token's `jti`.
    #[instrument(skip(self))]
    pub async fn open(
        &self,
        user_id: String,
        expires_at: DateTime<Utc>,
    ) -> Result<String, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate {
                user_id,
                expires_at,
            })
            .await
            .map_err(map_session_err)
    }

    /// Closes a session at logout. Closing an already-closed session is fine.
    #[instrument(skip(self))]
    pub async fn close(&self, id: String) -> Result<(), SessionError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(()) | Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(other) => Err(map_session_err(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: String) -> Result<Vec<Session>, SessionError> {
        debug!("Sending request");
        self.inner
            .list(SessionFilter::ByUser(user_id))
            .await
            .map_err(map_session_err)
    }
}

pub(crate) fn map_session_err(e: FrameworkError) -> SessionError {
    match e {
        FrameworkError::NotFound(id) => SessionError::NotFound(id),
        other => SessionError::ActorCommunicationError(other.to_string()),
    }
}
