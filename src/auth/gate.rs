// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Authorization gate: route policy and per-request access decisions.
//!
//! The policy is plain data - a public-prefix allow-list plus a table of
//! role requirements - and the decision is a pure function over
//! `(path, optional identity)`, so both are testable without a server.
//! An axum middleware applies the decision per request after the
//! authentication middleware has run.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::claims::IdentityContext;
use super::error::AuthError;
use super::roles::Role;
use crate::state::AppState;

/// Data-driven route authorization policy.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Path prefixes that require no identity
    public_prefixes: Vec<String>,
    /// Path prefixes that additionally require a role
    role_rules: Vec<(String, Role)>,
}

impl RoutePolicy {
    pub fn new(
        public_prefixes: impl IntoIterator<Item = impl Into<String>>,
        role_rules: impl IntoIterator<Item = (impl Into<String>, Role)>,
    ) -> Self {
        Self {
            public_prefixes: public_prefixes.into_iter().map(Into::into).collect(),
            role_rules: role_rules
                .into_iter()
                .map(|(prefix, role)| (prefix.into(), role))
                .collect(),
        }
    }

    /// The service's standard policy.
    ///
    /// `/api/public` is open; `/api/admin` requires `ROLE_ADMIN`; everything
    /// else requires any authenticated identity. The docs endpoints are
    /// public so the Swagger UI stays reachable.
    pub fn standard() -> Self {
        Self::new(
            ["/api/public", "/docs", "/api-doc"],
            [("/api/admin", Role::Admin)],
        )
    }

    /// Whether the path is on the public allow-list.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }

    /// The role the path requires beyond authentication, if any.
    pub fn required_role(&self, path: &str) -> Option<Role> {
        self.role_rules
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, role)| *role)
    }
}

/// Outcome of an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request may proceed
    Permitted,
    /// Protected route, no identity attached (401)
    AuthenticationRequired,
    /// Identity present but missing the required role (403)
    InsufficientRole(Role),
}

/// Decide whether a request may proceed.
///
/// Stateless per request: public paths are always permitted; all other paths
/// need an identity, and role-ruled paths need that role on the identity.
pub fn decide(policy: &RoutePolicy, path: &str, identity: Option<&IdentityContext>) -> Decision {
    if policy.is_public(path) {
        return Decision::Permitted;
    }

    let Some(identity) = identity else {
        return Decision::AuthenticationRequired;
    };

    match policy.required_role(path) {
        Some(role) if !identity.has_role(role) => Decision::InsufficientRole(role),
        _ => Decision::Permitted,
    }
}

/// Authorization middleware. Must run after [`super::middleware::authenticate`].
pub async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let identity = request.extensions().get::<IdentityContext>();

    match decide(&state.policy, &path, identity) {
        Decision::Permitted => next.run(request).await,
        Decision::AuthenticationRequired => AuthError::AuthenticationRequired
            .into_api_error(&path)
            .into_response(),
        Decision::InsufficientRole(role) => AuthError::InsufficientRole(role)
            .into_api_error(&path)
            .into_response(),
    }
}
