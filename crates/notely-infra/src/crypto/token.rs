//! Random API key generation from the operating system's CSPRNG.
//!
//! Implements the `TokenGenerator` trait from `notely-core`.

use notely_core::service::token::TokenGenerator;
use notely_types::error::TokenError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes per token (64 hex characters once encoded).
pub const TOKEN_BYTES: usize = 32;

/// Generate a new token: 32 bytes from `OsRng`, lowercase hex encoded.
///
/// An entropy failure is returned as-is; there is no fallback to a weaker
/// generator.
pub fn generate_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::Generation(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// `TokenGenerator` backed by [`generate_token`].
pub struct OsRngTokenGenerator;

impl OsRngTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRngTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGenerator for OsRngTokenGenerator {
    fn generate(&self) -> Result<String, TokenError> {
        generate_token()
    }
}
