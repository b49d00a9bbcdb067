// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Token claims and the request-scoped identity derived from them.

use serde::{Deserialize, Serialize};

use super::roles::Role;

/// Claims embedded in a signed identity token.
///
/// Produced by the codec at issuance and reconstructed at verification;
/// never persisted. Timestamps are Unix epoch seconds.
///
/// Invariants: `exp > iat`, `sub` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the username of the authenticated principal
    pub sub: String,

    /// The user's stable unique ID
    pub uid: String,

    /// Roles granted to the subject (wire strings, e.g. `ROLE_USER`)
    pub roles: Vec<String>,

    /// Issued-at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

/// Request-scoped identity established by the authentication middleware.
///
/// Attached to exactly one in-flight request (via axum request extensions)
/// and discarded when that request completes. Downstream consumers receive it
/// explicitly; there is no process-wide "current user".
#[derive(Debug, Clone)]
pub struct IdentityContext {
    /// Username (the token subject)
    pub username: String,

    /// Stable user ID
    pub user_id: String,

    /// Roles held by this identity
    pub roles: Vec<Role>,
}

impl IdentityContext {
    /// Build an identity from verified claims.
    ///
    /// Role strings the service does not know are dropped rather than
    /// rejected, so a token minted with extra roles still authenticates.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            username: claims.sub.clone(),
            user_id: claims.uid.clone(),
            roles: claims.roles.iter().filter_map(|r| Role::parse(r)).collect(),
        }
    }

    /// Check whether this identity holds the given role.
    pub fn has_role(&self, required: Role) -> bool {
        self.roles.contains(&required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> Claims {
        Claims {
            sub: "user".to_string(),
            uid: "c0ffee".to_string(),
            roles: vec!["ROLE_USER".to_string()],
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        }
    }

    #[test]
    fn from_claims_copies_identity_fields() {
        let identity = IdentityContext::from_claims(&sample_claims());
        assert_eq!(identity.username, "user");
        assert_eq!(identity.user_id, "c0ffee");
        assert_eq!(identity.roles, vec![Role::User]);
    }

    #[test]
    fn from_claims_drops_unknown_role_strings() {
        let mut claims = sample_claims();
        claims.roles = vec!["ROLE_WIZARD".to_string(), "ROLE_ADMIN".to_string()];
        let identity = IdentityContext::from_claims(&claims);
        assert_eq!(identity.roles, vec![Role::Admin]);
    }

    #[test]
    fn has_role_is_membership_not_hierarchy() {
        let identity = IdentityContext::from_claims(&sample_claims());
        assert!(identity.has_role(Role::User));
        assert!(!identity.has_role(Role::Admin));
    }
}
