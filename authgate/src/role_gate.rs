//! Role gate: authorize an already-bound identity against an allowed set.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use authgate_sdk::{AuthData, Role};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower::{Layer, Service};

use crate::config::DenialConvention;
use crate::extract::missing_binding;
use crate::problem::Problem;

/// Layer restricting handler execution to identities whose role is in the
/// allowed set.
///
/// Must be mounted behind the auth middleware: a request that reaches the
/// gate without a bound identity is a configuration bug and is rejected as
/// a server error, not a user denial.
///
/// ```ignore
/// router = router.layer(RoleGateLayer::new([Role::Admin, Role::Moderator]));
/// ```
#[derive(Debug, Clone)]
pub struct RoleGateLayer {
    allowed: Arc<[Role]>,
    denial: DenialConvention,
}

impl RoleGateLayer {
    /// Build a gate for the given allowed-role set. An empty set denies
    /// every identity.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
            denial: DenialConvention::default(),
        }
    }

    /// Status convention for denials (401 by default).
    #[must_use]
    pub fn with_denial(mut self, denial: DenialConvention) -> Self {
        self.denial = denial;
        self
    }
}

impl<S> Layer<S> for RoleGateLayer {
    type Service = RoleGateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RoleGateService {
            inner,
            allowed: self.allowed.clone(),
            denial: self.denial,
        }
    }
}

/// Service applying the role gate to requests.
#[derive(Debug, Clone)]
pub struct RoleGateService<S> {
    inner: S,
    allowed: Arc<[Role]>,
    denial: DenialConvention,
}

impl<S> Service<Request> for RoleGateService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let allowed = self.allowed.clone();
        let denial = self.denial;
        let not_ready_inner = self.inner.clone();
        let mut ready_inner = std::mem::replace(&mut self.inner, not_ready_inner);

        Box::pin(async move {
            let role = request.extensions().get::<AuthData>().map(|d| d.role);
            match role {
                None => Ok(missing_binding()),
                Some(role) if is_member(&allowed, role) => ready_inner.call(request).await,
                Some(role) => {
                    tracing::info!(role = ?role, "role gate denied the request");
                    Ok(denied(denial))
                }
            }
        })
    }
}

/// Plain equality against each entry, first match wins. No ordering —
/// a gate for `{Moderator}` does not admit `Admin`.
fn is_member(allowed: &[Role], role: Role) -> bool {
    allowed.iter().any(|r| *r == role)
}

fn denied(denial: DenialConvention) -> Response {
    let (status, title) = match denial {
        DenialConvention::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        DenialConvention::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
    };
    Problem::new(status, title, "Not enough authority").into_response()
}
