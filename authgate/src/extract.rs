//! Extractor for the identity bound by the auth middleware.

use authgate_sdk::AuthData;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use crate::problem::Problem;

/// Extractor for [`AuthData`] — validates that the auth middleware has run.
///
/// A missing binding means the handler was mounted without the auth
/// middleware ahead of it, or the binding step failed. Either way it is a
/// wiring defect, reported as a server error — never a credentials problem,
/// and never a default identity.
#[derive(Debug, Clone)]
pub struct AuthIdentity(pub AuthData);

impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthData>()
            .cloned()
            .map(AuthIdentity)
            .ok_or_else(missing_binding)
    }
}

/// Response for the internal-misconfiguration case shared by the extractor
/// and the role gate.
pub(crate) fn missing_binding() -> Response {
    tracing::error!("identity binding missing - auth middleware not mounted ahead");
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "Identity context is not configured",
    )
    .into_response()
}
