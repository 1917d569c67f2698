//! Shared domain types for Notely.
//!
//! This crate contains the API-facing domain types (User, Note), the error
//! enums shared across the workspace, and the global configuration shape.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod note;
pub mod user;
