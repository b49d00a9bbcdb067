// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Admin-only endpoints.
//!
//! The route policy requires `ROLE_ADMIN` for everything under `/api/admin`;
//! handlers here still take [`CurrentUser`] so an identity is guaranteed at
//! the handler boundary.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{CurrentUser, Role};
use crate::state::AppState;

/// One user in the admin listing. The password hash is never serialized.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminUserItem {
    pub id: String,
    pub username: String,
    pub role: Role,
}

/// Response for `GET /api/admin/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminUsersResponse {
    /// Number of users in the store
    pub total: usize,
    /// All users, ordered by username
    pub users: Vec<AdminUserItem>,
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = AdminUsersResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Authenticated but not an admin")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
) -> Json<AdminUsersResponse> {
    let users = state.users.read().await.list_all();

    Json(AdminUsersResponse {
        total: users.len(),
        users: users
            .into_iter()
            .map(|user| AdminUserItem {
                id: user.id,
                username: user.username,
                role: user.role,
            })
            .collect(),
    })
}
