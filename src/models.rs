// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! User records and login DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;

/// A stored user record.
///
/// Owned by the user store; the security core treats it as read-only input.
/// The password hash never leaves the process.
#[derive(Debug, Clone)]
pub struct User {
    /// Stable unique ID
    pub id: String,
    /// Login name, unique across the store
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// The user's single assigned role
    pub role: Role,
}

/// Login request body.
///
/// Transient: never persisted, never logged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,
    /// The user's stable ID
    pub user_id: String,
    /// The user's login name
    pub username: String,
    /// Roles embedded in the token
    pub roles: Vec<String>,
    /// Token validity window in milliseconds
    pub expires_in: i64,
}
