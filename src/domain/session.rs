use chrono::{DateTime, Utc};
use serde::Serialize;

/// A login session record. Auth itself is a stateless JWT check; session rows
/// back the profile's "active sessions" view and logout.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}
