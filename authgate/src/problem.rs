//! RFC-9457 problem responses for middleware-terminated requests.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Minimal RFC-9457 problem document.
///
/// Every middleware decision that terminates a request renders one of
/// these. Titles and details stay generic: no identity attributes and no
/// internal error strings ever reach the response body.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    status: u16,
    title: &'static str,
    detail: &'static str,
}

impl Problem {
    /// Build a problem document for `status`.
    #[must_use]
    pub fn new(status: StatusCode, title: &'static str, detail: &'static str) -> Self {
        Self {
            status: status.as_u16(),
            title,
            detail,
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Json(self).into_response();
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn carries_status_and_media_type() {
        let response =
            Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized", "Authentication failed")
                .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/problem+json")
        );
    }

    #[test]
    fn serializes_the_rfc_members() {
        let problem = Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Authentication could not be performed",
        );
        let body = serde_json::to_value(&problem).unwrap();
        assert_eq!(body["status"], 500);
        assert_eq!(body["title"], "Internal Server Error");
        assert_eq!(body["detail"], "Authentication could not be performed");
    }
}
