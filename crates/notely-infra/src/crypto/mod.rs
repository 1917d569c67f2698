//! Cryptographic primitives.

pub mod token;
