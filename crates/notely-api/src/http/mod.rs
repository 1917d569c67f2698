//! HTTP/REST API layer for Notely.
//!
//! Axum-based API under `/v1/` with a uniform JSON response encoder and the
//! `{"error": message}` failure envelope.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
