//! TokenGenerator trait for minting opaque secrets.
//!
//! Defined in notely-core so services can mint API keys without coupling to
//! a specific entropy source. The `OsRngTokenGenerator` adapter lives in
//! notely-infra.

use notely_types::error::TokenError;

/// Abstraction over secure random token generation.
///
/// Used by UserService to mint API keys on user creation.
pub trait TokenGenerator: Send + Sync {
    /// Produce a new lowercase-hex token, or report an entropy failure.
    fn generate(&self) -> Result<String, TokenError>;
}
