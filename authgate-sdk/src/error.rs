//! Error taxonomy for delegation checks.

use thiserror::Error;

/// Classified failure of a delegation check.
///
/// Every failure path of a check maps to exactly one variant. The client
/// never recovers locally; the middleware translates each variant into a
/// terminal HTTP response, so no failure ever crosses into downstream
/// handler code.
#[derive(Debug, Error)]
pub enum AuthCheckError {
    /// The auth service rejected the request's credentials.
    #[error("unauthenticated")]
    Unauthenticated,

    /// The auth service endpoint is missing or not serving (HTTP 404/405).
    /// An infrastructure fault, not a user denial.
    #[error("auth service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The round trip failed below HTTP: connect failure, timeout, or a
    /// broken transfer. A timeout never leaves a partial state behind.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered, but outside the agreed protocol: an unexpected
    /// status, an undecodable body, or an empty/invalid identity.
    #[error("protocol violation: {0}")]
    Protocol(String),
}
