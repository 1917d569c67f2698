//! Note row type and repository trait definition.

use notely_types::error::RepositoryError;
use serde::{Deserialize, Serialize};

/// A note as persisted. Timestamps are unvalidated strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRow {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub note: String,
    pub user_id: String,
}

/// Repository trait for note persistence.
pub trait NoteRepository: Send + Sync {
    /// Insert a new note row. Returns the row as stored.
    fn create(
        &self,
        note: &NoteRow,
    ) -> impl std::future::Future<Output = Result<NoteRow, RepositoryError>> + Send;

    /// List every note owned by `user_id`, in storage order.
    fn list_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<NoteRow>, RepositoryError>> + Send;
}
