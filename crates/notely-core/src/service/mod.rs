//! Business logic services (use cases).
//!
//! Services orchestrate repository calls, token minting and row conversion.
//! They depend on traits (ports) -- never on concrete infrastructure.

pub mod note;
pub mod token;
pub mod user;
