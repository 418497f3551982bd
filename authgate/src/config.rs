//! Configuration for the delegation client and middleware.

use std::time::Duration;

use serde::Deserialize;

/// Configuration.
///
/// Set once at construction and never mutated afterwards — the client and
/// the layers built from it share no mutable state across requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthGateConfig {
    /// Host of the auth service.
    pub host: String,

    /// Port of the auth service.
    pub port: u16,

    /// Whole-round-trip timeout for a delegation call, in milliseconds.
    pub timeout_ms: u64,

    /// Which parts of the inbound request reach the auth service.
    pub forward: ForwardMode,

    /// Status convention for role-gate denials.
    pub denial: DenialConvention,
}

impl Default for AuthGateConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8082,
            timeout_ms: 5_000,
            forward: ForwardMode::default(),
            denial: DenialConvention::default(),
        }
    }
}

impl AuthGateConfig {
    /// Delegation timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Which inbound request material is replayed to the auth service.
///
/// The verifier re-validates with the original request's session material
/// rather than a derived token. Whether arbitrary client headers should
/// reach it as well is a deployment decision, so it is configuration, not
/// behavior baked into the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForwardMode {
    /// Forward only `Cookie` headers.
    #[default]
    CookiesOnly,
    /// Forward the full inbound header set, minus hop-by-hop headers.
    FullHeaders,
}

/// HTTP status used when the role gate denies an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DenialConvention {
    /// Respond 401.
    #[default]
    Unauthorized,
    /// Respond 403.
    Forbidden,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AuthGateConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8082);
        assert_eq!(config.timeout(), Duration::from_millis(5_000));
        assert_eq!(config.forward, ForwardMode::CookiesOnly);
        assert_eq!(config.denial, DenialConvention::Unauthorized);
    }

    #[test]
    fn deserializes_snake_case_modes() {
        let config: AuthGateConfig = serde_json::from_str(
            r#"{"host": "auth.internal", "port": 9000, "forward": "full_headers", "denial": "forbidden"}"#,
        )
        .expect("valid config");
        assert_eq!(config.host, "auth.internal");
        assert_eq!(config.port, 9000);
        assert_eq!(config.forward, ForwardMode::FullHeaders);
        assert_eq!(config.denial, DenialConvention::Forbidden);
        // Unset fields keep their defaults.
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = serde_json::from_str::<AuthGateConfig>(r#"{"hosts": "typo"}"#);
        assert!(result.is_err());
    }
}
