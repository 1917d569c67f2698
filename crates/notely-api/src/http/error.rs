//! Application error type mapping service failures to HTTP responses.
//!
//! Client-facing messages are fixed strings (or validation text); the
//! underlying error of any 5xx is handed to the encoder as the logged cause.

use std::error::Error;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use notely_types::error::{NoteError, UserError};

use crate::http::response::respond_with_error;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// User-related errors.
    User(UserError),
    /// Note-related errors.
    Note(NoteError),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        AppError::User(e)
    }
}

impl From<NoteError> for AppError {
    fn from(e: NoteError) -> Self {
        AppError::Note(e)
    }
}

impl AppError {
    /// Status code and client-visible message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::User(UserError::NotFound) => {
                (StatusCode::NOT_FOUND, "Couldn't find user".to_string())
            }
            AppError::User(UserError::InvalidName(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::User(UserError::Token(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Couldn't generate api key".to_string(),
            ),
            AppError::User(UserError::Format(_)) | AppError::Note(NoteError::Format(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Couldn't convert stored record".to_string(),
            ),
            AppError::User(UserError::Storage(_)) | AppError::Note(NoteError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Couldn't reach data store".to_string(),
            ),
            AppError::Note(NoteError::InvalidNote(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }

    fn inner(&self) -> &(dyn Error + 'static) {
        match self {
            AppError::User(e) => e,
            AppError::Note(e) => e,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let cause = status.is_server_error().then(|| self.inner());
        respond_with_error(status, &message, cause)
    }
}
