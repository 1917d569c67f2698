//! Observability setup for Notely: structured logging with an optional
//! OpenTelemetry bridge.

pub mod tracing_setup;
