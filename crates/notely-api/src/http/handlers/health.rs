//! Liveness endpoint.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

use crate::http::response::respond_with_json;

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
}

/// GET /v1/healthz - always `200 {"status":"ok"}`.
///
/// The request is accepted only to make the contract explicit: nothing in it
/// is read.
pub async fn handle_readiness(_request: Request) -> Response {
    respond_with_json(StatusCode::OK, &Readiness { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};

    async fn assert_ready(request: Request) {
        let resp = handle_readiness(request).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_readiness_get() {
        let req = Request::builder()
            .uri("/v1/healthz")
            .body(Body::empty())
            .unwrap();
        assert_ready(req).await;
    }

    #[tokio::test]
    async fn test_readiness_ignores_method_headers_and_body() {
        for method in [Method::POST, Method::DELETE, Method::PATCH] {
            let req = Request::builder()
                .method(method)
                .uri("/v1/healthz?verbose=true")
                .header(header::CONTENT_TYPE, "text/plain")
                .header("x-api-key", "whatever")
                .body(Body::from("{not json"))
                .unwrap();
            assert_ready(req).await;
        }
    }
}
