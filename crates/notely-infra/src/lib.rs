//! Infrastructure layer for Notely.
//!
//! Contains implementations of the traits defined in `notely-core` backed by
//! the operating system (secure entropy for API keys) plus the configuration
//! loader used at startup.

pub mod config;
pub mod crypto;
