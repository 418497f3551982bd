//! Delegating authentication middleware.
//!
//! For each request:
//! 1. Calls the configured [`AuthCheckClient`] exactly once
//! 2. On success: binds the resolved identity into the request's
//!    extensions and runs the next handler
//! 3. On failure: terminates with the status for the classified outcome,
//!    never touching downstream code
//!
//! There is no caching and no retry across requests — every request is
//! independently verified.

use std::sync::Arc;

use authgate_sdk::{AuthCheckClient, AuthCheckError};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::problem::Problem;

/// Shared state for the auth middleware.
#[derive(Clone)]
pub struct AuthGateState {
    client: Arc<dyn AuthCheckClient>,
}

impl AuthGateState {
    #[must_use]
    pub fn new(client: Arc<dyn AuthCheckClient>) -> Self {
        Self { client }
    }
}

/// Authentication middleware that delegates the verdict to the remote
/// auth service.
///
/// Mount with `axum::middleware::from_fn_with_state`; the role gate, if
/// any, composes after it:
///
/// ```ignore
/// let state = AuthGateState::new(Arc::new(client));
/// let app = router.layer(middleware::from_fn_with_state(state, auth_middleware));
/// ```
pub async fn auth_middleware(
    State(state): State<AuthGateState>,
    mut req: Request,
    next: Next,
) -> Response {
    match state.client.check(req.headers()).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(err) => check_error_to_response(&err),
    }
}

/// Terminal response for a failed delegation check.
///
/// Infrastructure faults (service missing, transport, protocol) are all
/// reported as internal errors — distinct in the logs, indistinguishable
/// to the caller.
fn check_error_to_response(err: &AuthCheckError) -> Response {
    log_check_error(err);
    let (status, title, detail) = match err {
        AuthCheckError::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Authentication failed",
        ),
        AuthCheckError::ServiceUnavailable(_)
        | AuthCheckError::Transport(_)
        | AuthCheckError::Protocol(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Authentication could not be performed",
        ),
    };
    Problem::new(status, title, detail).into_response()
}

/// A denied user is expected traffic; a broken auth service is not.
fn log_check_error(err: &AuthCheckError) {
    match err {
        AuthCheckError::Unauthenticated => {
            tracing::info!("auth check rejected the request");
        }
        AuthCheckError::ServiceUnavailable(msg) => {
            tracing::error!("auth service unavailable: {msg}");
        }
        AuthCheckError::Transport(msg) => {
            tracing::error!("auth check transport failure: {msg}");
        }
        AuthCheckError::Protocol(msg) => {
            tracing::error!("auth check protocol violation: {msg}");
        }
    }
}
