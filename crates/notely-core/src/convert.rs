//! Row-to-domain conversion.
//!
//! Stored timestamps are RFC 3339 strings (e.g. `2023-01-01T00:00:00Z`).
//! Conversion parses both of them and normalises to UTC; every other field is
//! passed through untouched. A row with either timestamp unparsable yields a
//! [`FormatError`] naming the field and no domain value at all.

use chrono::{DateTime, Utc};
use notely_types::error::FormatError;
use notely_types::note::Note;
use notely_types::user::User;

use crate::repository::note::NoteRow;
use crate::repository::user::UserRow;

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, FormatError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| FormatError {
            field,
            value: value.to_string(),
            source,
        })
}

/// Format a timestamp the way rows store it.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Convert a stored user row into an API-facing [`User`].
pub fn to_domain_user(row: UserRow) -> Result<User, FormatError> {
    let created_at = parse_timestamp("created_at", &row.created_at)?;
    let updated_at = parse_timestamp("updated_at", &row.updated_at)?;

    Ok(User {
        id: row.id,
        created_at,
        updated_at,
        name: row.name,
        api_key: row.api_key,
    })
}

/// Convert a stored note row into an API-facing [`Note`].
pub fn to_domain_note(row: NoteRow) -> Result<Note, FormatError> {
    let created_at = parse_timestamp("created_at", &row.created_at)?;
    let updated_at = parse_timestamp("updated_at", &row.updated_at)?;

    Ok(Note {
        id: row.id,
        created_at,
        updated_at,
        note: row.note,
        user_id: row.user_id,
    })
}

/// Convert a batch of note rows, preserving order.
///
/// Fail-fast: the first malformed row aborts the batch and only its error is
/// returned. Notes converted before it are dropped.
pub fn to_domain_notes(rows: Vec<NoteRow>) -> Result<Vec<Note>, FormatError> {
    rows.into_iter().map(to_domain_note).collect()
}
