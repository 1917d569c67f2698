//! Notely application layer: REST API and CLI command definitions.
//!
//! The `notely` binary (`src/main.rs`) wires these together.

pub mod cli;
pub mod http;
