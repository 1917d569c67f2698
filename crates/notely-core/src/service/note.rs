//! Note service.

use chrono::Utc;
use notely_types::error::NoteError;
use notely_types::note::{CreateNoteRequest, Note};
use uuid::Uuid;

use crate::convert::{format_timestamp, to_domain_note, to_domain_notes};
use crate::repository::note::{NoteRepository, NoteRow};

/// Service for creating and listing a user's notes.
pub struct NoteService<R: NoteRepository> {
    note_repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(note_repo: R) -> Self {
        Self { note_repo }
    }

    /// Create a note owned by `user_id`.
    pub async fn create_note(
        &self,
        user_id: &str,
        request: CreateNoteRequest,
    ) -> Result<Note, NoteError> {
        if request.note.trim().is_empty() {
            return Err(NoteError::InvalidNote("note cannot be empty".to_string()));
        }

        let now = format_timestamp(&Utc::now());
        let row = NoteRow {
            id: Uuid::now_v7().to_string(),
            created_at: now.clone(),
            updated_at: now,
            note: request.note,
            user_id: user_id.to_string(),
        };

        let stored = self.note_repo.create(&row).await?;
        Ok(to_domain_note(stored)?)
    }

    /// List all notes owned by `user_id`.
    ///
    /// A single malformed stored note fails the whole listing.
    pub async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, NoteError> {
        let rows = self.note_repo.list_for_user(user_id).await?;
        let count = rows.len();
        let notes = to_domain_notes(rows)?;
        tracing::debug!(user_id, count, "notes listed");
        Ok(notes)
    }
}
