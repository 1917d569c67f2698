//! Axum router configuration with middleware.
//!
//! Versioned routes live under `/v1/`.
//! Middleware: CORS (scheme-pattern origins), request tracing.

use std::time::Duration;

use axum::Router;
use axum::http::request::Parts;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use notely_types::config::GlobalConfig;

use crate::http::handlers;

/// Build the complete router with all routes and middleware.
pub fn build_router(config: &GlobalConfig) -> Router {
    let v1_routes = Router::new().route("/healthz", get(handlers::health::handle_readiness));

    Router::new()
        .nest("/v1", v1_routes)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy accepting origins that match any of `patterns`.
fn cors_layer(patterns: &[String]) -> CorsLayer {
    let patterns = patterns.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| origin_allowed(&patterns, o))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300))
}

/// Match an origin against patterns. A trailing `*` matches any suffix
/// (`https://*` accepts every HTTPS origin); otherwise the match is exact.
pub fn origin_allowed(patterns: &[String], origin: &str) -> bool {
    patterns.iter().any(|pattern| match pattern.strip_suffix('*') {
        Some(prefix) => origin.starts_with(prefix),
        None => origin == pattern,
    })
}
