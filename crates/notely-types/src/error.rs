use thiserror::Error;

/// A stored timestamp could not be parsed as RFC 3339.
///
/// Indicates stored data violating the expected format; callers map it to a
/// server-side error.
#[derive(Debug, Error)]
#[error("invalid {field} '{value}': {source}")]
pub struct FormatError {
    /// Name of the offending row field (`created_at` or `updated_at`).
    pub field: &'static str,
    /// The raw stored value.
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Errors from minting random tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("entropy source failed: {0}")]
    Generation(String),
}

/// Errors from repository operations (used by trait definitions in notely-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors related to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("invalid user name: {0}")]
    InvalidName(String),

    #[error("api key generation failed: {0}")]
    Token(#[from] TokenError),

    #[error("stored user is malformed: {0}")]
    Format(#[from] FormatError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Errors related to note operations.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("invalid note: {0}")]
    InvalidNote(String),

    #[error("stored note is malformed: {0}")]
    Format(#[from] FormatError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_failure() -> chrono::ParseError {
        chrono::DateTime::parse_from_rfc3339("invalid-date").unwrap_err()
    }

    #[test]
    fn test_format_error_names_field() {
        let err = FormatError {
            field: "updated_at",
            value: "invalid-date".to_string(),
            source: parse_failure(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid updated_at 'invalid-date'"));
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_user_error_from_token_error() {
        let err: UserError = TokenError::Generation("no entropy".to_string()).into();
        assert!(matches!(err, UserError::Token(_)));
        assert_eq!(
            err.to_string(),
            "api key generation failed: entropy source failed: no entropy"
        );
    }
}
