//! JSON response encoding.
//!
//! Success bodies are the bare JSON encoding of the payload (no wrapper).
//! Failures always use the envelope:
//! ```json
//! { "error": "human readable message" }
//! ```

use std::error::Error;

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error envelope body. Carries only the caller-chosen message.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// Encode `payload` as JSON with the given status and an
/// `application/json` content type.
///
/// The payload is serialized before anything is emitted; if serialization
/// fails the response is a bare `500` with an empty body.
pub fn respond_with_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(body),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Error marshalling JSON response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Encode `{"error": message}` with the given status, passed through as-is.
///
/// `cause` is logged server-side and never written to the body. 5xx
/// responses are logged as well.
pub fn respond_with_error(
    status: StatusCode,
    message: &str,
    cause: Option<&(dyn Error + 'static)>,
) -> Response {
    if let Some(cause) = cause {
        tracing::error!(error = %cause, "{message}");
    }
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), "Responding with 5XX error: {message}");
    }

    respond_with_json(status, &ErrorBody { error: message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    async fn body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(resp: &Response) -> Option<&str> {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_json_map_payload() {
        let payload = HashMap::from([("status", "ok")]);
        let resp = respond_with_json(StatusCode::OK, &payload);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), Some("application/json"));
        assert_eq!(body_string(resp).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_json_string_payload() {
        let resp = respond_with_json(StatusCode::OK, "hello");
        assert_eq!(content_type(&resp), Some("application/json"));
        assert_eq!(body_string(resp).await, r#""hello""#);
    }

    #[tokio::test]
    async fn test_json_number_payload() {
        let resp = respond_with_json(StatusCode::OK, &42);
        assert_eq!(body_string(resp).await, "42");
    }

    #[tokio::test]
    async fn test_json_status_passed_through() {
        let resp = respond_with_json(StatusCode::CREATED, &serde_json::json!({"id": "1"}));
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_unserializable_payload_falls_back_to_500() {
        // Non-string map keys are rejected by serde_json.
        let payload = HashMap::from([((1, 2), "pair")]);
        let resp = respond_with_json(StatusCode::OK, &payload);

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_error_envelopes() {
        let cases = [
            (StatusCode::BAD_REQUEST, "Bad request", r#"{"error":"Bad request"}"#),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                r#"{"error":"Internal server error"}"#,
            ),
            (StatusCode::NOT_FOUND, "Not found", r#"{"error":"Not found"}"#),
        ];

        for (status, message, expected) in cases {
            let resp = respond_with_error(status, message, None);
            assert_eq!(resp.status(), status);
            assert_eq!(content_type(&resp), Some("application/json"));
            assert_eq!(body_string(resp).await, expected);
        }
    }

    #[tokio::test]
    async fn test_error_cause_never_in_body() {
        let cause = std::io::Error::other("password=hunter2 at db-primary:5432");

        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let resp = respond_with_error(status, "Something went wrong", Some(&cause));
            assert_eq!(resp.status(), status);
            let body = body_string(resp).await;
            assert_eq!(body, r#"{"error":"Something went wrong"}"#);
            assert!(!body.contains("hunter2"));
        }
    }

    #[tokio::test]
    async fn test_error_message_is_json_escaped() {
        let resp = respond_with_error(StatusCode::BAD_REQUEST, "bad \"name\"", None);
        assert_eq!(body_string(resp).await, r#"{"error":"bad \"name\""}"#);
    }
}
