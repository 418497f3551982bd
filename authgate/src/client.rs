//! HTTP delegation client for the auth service.
//!
//! One network round trip per check against the auth service's check
//! endpoint, replaying the inbound request's session material so the
//! verifier sees the same credentials the original request carried. Every
//! remote outcome is normalized into the [`AuthCheckError`] taxonomy —
//! a usable status code does not imply a usable identity.

use async_trait::async_trait;
use authgate_sdk::{AuthCheckClient, AuthCheckError, AuthData};
use http::header::{self, HeaderMap, HeaderName};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::{AuthGateConfig, ForwardMode};

const CHECK_PATH: &str = "/srv-auth/api/v1/auth/check";
const PING_PATH: &str = "/srv-auth/ping";

/// Envelope returned by the check endpoint.
#[derive(Debug, Deserialize)]
struct CheckEnvelope {
    value: AuthData,
    #[serde(default)]
    message: String,
}

/// Envelope returned by the liveness endpoint.
#[derive(Debug, Deserialize)]
struct PingEnvelope {
    message: String,
}

/// The `reqwest` client failed to initialize.
#[derive(Debug, thiserror::Error)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// Delegation client performing one HTTP round trip per check.
///
/// Holds an immutable `reqwest::Client` plus configuration; cheap to clone
/// and safe to share across concurrent requests. There is no caching and no
/// retry — every failure is surfaced immediately as a terminal outcome for
/// that request. Cancellation follows the caller: dropping the future of an
/// in-flight check aborts the outbound request.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
    forward: ForwardMode,
}

impl HttpAuthClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the underlying `reqwest` client
    /// cannot be initialized (for example, TLS backend setup failure).
    pub fn new(config: &AuthGateConfig) -> Result<Self, ClientBuildError> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            base_url: format!("http://{}:{}", config.host, config.port),
            forward: config.forward,
        })
    }

    /// Liveness probe against the auth service.
    ///
    /// Not part of the per-request hot path; meant for external health
    /// verification. Returns the service's greeting message.
    ///
    /// # Errors
    ///
    /// - [`AuthCheckError::Transport`] on connect failure or timeout
    /// - [`AuthCheckError::ServiceUnavailable`] on any non-200 status
    /// - [`AuthCheckError::Protocol`] when the body cannot be decoded
    pub async fn ping(&self) -> Result<String, AuthCheckError> {
        let url = format!("{}{PING_PATH}", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(into_transport)?;
        let status = response.status();
        log_round_trip(&url, status);

        if status != StatusCode::OK {
            return Err(AuthCheckError::ServiceUnavailable(format!(
                "auth service not reachable (status {status})"
            )));
        }
        let pong: PingEnvelope = response.json().await.map_err(into_decode)?;
        Ok(pong.message)
    }

    /// Select the inbound headers replayed to the auth service.
    fn forwarded_headers(&self, inbound: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match self.forward {
            ForwardMode::CookiesOnly => {
                for value in inbound.get_all(header::COOKIE) {
                    headers.append(header::COOKIE, value.clone());
                }
            }
            ForwardMode::FullHeaders => {
                for (name, value) in inbound {
                    if !is_hop_by_hop(name) {
                        headers.append(name.clone(), value.clone());
                    }
                }
            }
        }
        headers
    }
}

#[async_trait]
impl AuthCheckClient for HttpAuthClient {
    async fn check(&self, headers: &HeaderMap) -> Result<AuthData, AuthCheckError> {
        let url = format!("{}{CHECK_PATH}", self.base_url);
        let response = self
            .http
            .get(&url)
            .headers(self.forwarded_headers(headers))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(into_transport)?;
        let status = response.status();
        log_round_trip(&url, status);

        match status {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(AuthCheckError::Unauthenticated),
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => {
                return Err(AuthCheckError::ServiceUnavailable(format!(
                    "auth service not found (status {status})"
                )));
            }
            other => {
                return Err(AuthCheckError::Protocol(format!("unexpected status {other}")));
            }
        }

        let envelope: CheckEnvelope = response.json().await.map_err(into_decode)?;
        if !envelope.value.is_valid() {
            return Err(AuthCheckError::Protocol("empty or invalid user".to_owned()));
        }
        if !envelope.message.is_empty() {
            tracing::debug!(message = %envelope.message, "auth service check message");
        }
        Ok(envelope.value)
    }
}

/// One structured line per round trip; an observability hook, not a
/// correctness dependency.
fn log_round_trip(url: &str, status: StatusCode) {
    tracing::debug!(method = "GET", url = %url, status = status.as_u16(), "auth service round trip");
}

fn into_transport(e: reqwest::Error) -> AuthCheckError {
    if e.is_timeout() {
        AuthCheckError::Transport(format!("timed out: {e}"))
    } else {
        AuthCheckError::Transport(e.to_string())
    }
}

/// Body-read failures after a 200 split by cause: serde problems are
/// protocol violations, interrupted transfers are transport failures.
fn into_decode(e: reqwest::Error) -> AuthCheckError {
    if e.is_decode() {
        AuthCheckError::Protocol(format!("undecodable body: {e}"))
    } else {
        into_transport(e)
    }
}

/// Headers that describe the inbound connection rather than the request;
/// never replayed to the verifier.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    *name == header::CONNECTION
        || *name == header::TE
        || *name == header::TRAILER
        || *name == header::TRANSFER_ENCODING
        || *name == header::UPGRADE
        || *name == header::PROXY_AUTHENTICATE
        || *name == header::PROXY_AUTHORIZATION
        || *name == header::HOST
        || *name == header::CONTENT_LENGTH
        || name.as_str() == "keep-alive"
}
