//! Repository trait definitions (ports).
//!
//! These traits define the storage interface the data-access layer must
//! satisfy. Implementations hand back rows exactly as stored; turning them
//! into domain values is the job of [`crate::convert`].

pub mod note;
pub mod user;
