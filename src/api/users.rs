// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Authenticated user endpoints.

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{AuthError, CurrentUser, Role};
use crate::error::ApiError;
use crate::state::AppState;

/// Response for `GET /api/user/me`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserMeResponse {
    /// The user's stable ID
    pub user_id: String,
    /// Login name
    pub username: String,
    /// Assigned role
    pub role: Role,
}

/// Get the current authenticated user's information.
///
/// The identity comes from the verified token; the record is re-read from
/// the store so the response reflects stored data, not just claims.
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserMeResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    uri: Uri,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<UserMeResponse>, ApiError> {
    let user = state
        .users
        .read()
        .await
        .find_by_username(&identity.username)
        .ok_or_else(|| {
            // A valid token for a user the store no longer knows about.
            AuthError::Internal(format!(
                "authenticated user '{}' not found in store",
                identity.username
            ))
            .into_api_error(uri.path())
        })?;

    Ok(Json(UserMeResponse {
        user_id: user.id,
        username: user.username,
        role: user.role,
    }))
}
