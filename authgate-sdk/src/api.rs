//! Public API trait for delegation checks.

use async_trait::async_trait;
use http::HeaderMap;

use crate::error::AuthCheckError;
use crate::models::AuthData;

/// A client able to verify the credentials carried by an inbound request.
///
/// The auth middleware calls [`check`](Self::check) exactly once per
/// request and hands over the inbound header map, so the implementation can
/// replay the original session material (cookies, and optionally the full
/// header set) to the verifier. Implementations must not cache or retry:
/// every request is verified independently.
#[async_trait]
pub trait AuthCheckClient: Send + Sync {
    /// Verify the credentials in `headers` and resolve the caller's
    /// identity.
    ///
    /// # Errors
    ///
    /// - [`AuthCheckError::Unauthenticated`] when the verifier denies the
    ///   credentials
    /// - [`AuthCheckError::ServiceUnavailable`] when the verifier endpoint
    ///   is missing or not serving
    /// - [`AuthCheckError::Transport`] on connect failure or timeout
    /// - [`AuthCheckError::Protocol`] on any response outside the agreed
    ///   contract, including a usable status with an unusable identity
    async fn check(&self, headers: &HeaderMap) -> Result<AuthData, AuthCheckError>;
}
