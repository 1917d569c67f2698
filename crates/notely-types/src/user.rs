use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user, as returned by the API.
///
/// Built from a stored row once both timestamps have been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Freeform display name.
    pub name: String,
    /// Opaque bearer secret (64 lowercase hex characters when minted here).
    pub api_key: String,
}

/// Request to create a new user. The API key is minted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}
