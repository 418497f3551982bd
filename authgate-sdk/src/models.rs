//! Domain models shared between the delegation client and the middleware.

use serde::{Deserialize, Serialize};

/// Role granted to an authenticated principal.
///
/// The wire encoding is the numeric value assigned by the auth service:
/// `0` = admin, `1` = moderator, `2` = user. The set is closed — any other
/// value is a decode error, which the delegation client surfaces as a
/// protocol violation. Roles deliberately carry no ordering: authorization
/// is set membership, never a privilege comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
}

impl TryFrom<u8> for Role {
    type Error = UnknownRole;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Admin),
            1 => Ok(Self::Moderator),
            2 => Ok(Self::User),
            other => Err(UnknownRole(other)),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => 0,
            Role::Moderator => 1,
            Role::User => 2,
        }
    }
}

/// Wire value outside the closed role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown role value: {0}")]
pub struct UnknownRole(pub u8);

/// Identity of the authenticated principal, resolved once per request.
///
/// Decoded from the auth service's check envelope, bound into the request's
/// extensions by the auth middleware, and read by downstream handlers
/// through the `AuthIdentity` extractor. Immutable after construction and
/// dropped with the request — there is no persistence and no sharing across
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    /// Principal identifier assigned by the auth service. Only positive
    /// values denote a real principal; the delegation client rejects the
    /// rest before an identity ever reaches a request.
    pub id: i64,

    /// Role granted to the principal. Absent in the envelope means
    /// [`Role::User`].
    #[serde(default)]
    pub role: Role,
}

impl AuthData {
    /// Whether the identity refers to a real principal.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.id > 0
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn role_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "2");
    }

    #[test]
    fn role_round_trips_every_value() {
        for role in [Role::Admin, Role::Moderator, Role::User] {
            let wire = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn role_outside_closed_set_is_rejected() {
        assert!(serde_json::from_str::<Role>("3").is_err());
        assert!(serde_json::from_str::<Role>("255").is_err());
        assert!(serde_json::from_str::<Role>("-1").is_err());
    }

    #[test]
    fn roles_compare_by_equality_only() {
        // Membership semantics: a moderator gate does not admit an admin.
        let allowed = [Role::Moderator];
        assert!(!allowed.contains(&Role::Admin));
        assert!(allowed.contains(&Role::Moderator));
    }

    #[test]
    fn auth_data_round_trips() {
        for (id, role) in [(1, Role::Admin), (42, Role::Moderator), (7, Role::User)] {
            let original = AuthData { id, role };
            let wire = serde_json::to_string(&original).unwrap();
            let back: AuthData = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, original);
        }
    }

    #[test]
    fn missing_role_defaults_to_user() {
        let decoded: AuthData = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(decoded.role, Role::User);
    }

    #[test]
    fn non_positive_ids_are_invalid() {
        assert!(!AuthData { id: 0, role: Role::Admin }.is_valid());
        assert!(!AuthData { id: -3, role: Role::User }.is_valid());
        assert!(AuthData { id: 1, role: Role::User }.is_valid());
    }
}
