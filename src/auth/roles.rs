// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roles a user can hold.
///
/// The wire form matches the role strings stored on user records and embedded
/// in token claims (`ROLE_ADMIN`, `ROLE_USER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Full administrative access
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Regular authenticated user
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    /// The canonical wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }

    /// Parse a role from its wire string.
    ///
    /// Unknown strings return `None`; callers decide whether to drop or
    /// reject them.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_USER" => Some(Role::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
