//! Domain conversion, repository ports and services for Notely.
//!
//! This crate defines the row types and repository traits that the external
//! data-access layer implements, the pure row-to-domain converters, and the
//! services that combine them. It depends only on `notely-types` -- never on
//! `notely-infra` or any database/IO crate.

pub mod convert;
pub mod repository;
pub mod service;
