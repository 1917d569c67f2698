//! User row type and repository trait definition.

use notely_types::error::RepositoryError;
use serde::{Deserialize, Serialize};

/// A user as persisted. Timestamps are unvalidated strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub api_key: String,
}

/// Repository trait for user persistence.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait UserRepository: Send + Sync {
    /// Insert a new user row. Returns the row as stored.
    fn create(
        &self,
        user: &UserRow,
    ) -> impl std::future::Future<Output = Result<UserRow, RepositoryError>> + Send;

    /// Look up a user by its API key.
    fn get_by_api_key(
        &self,
        api_key: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRow>, RepositoryError>> + Send;
}
