use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note owned by a user, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Note body text.
    pub note: String,
    /// Owning user's id. Not checked against the users table at this layer.
    pub user_id: String,
}

/// Request to create a note for the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub note: String,
}
