// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Credential verification and token issuance (the login flow).

use chrono::Utc;

use super::error::AuthError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Verify credentials and mint a signed token.
///
/// Unknown usernames and wrong passwords both produce
/// [`AuthError::InvalidCredentials`] so responses cannot be used to probe
/// which usernames exist. No state is written on any path.
pub async fn login(state: &AppState, request: LoginRequest) -> Result<LoginResponse, AuthError> {
    let user = state
        .users
        .read()
        .await
        .find_by_username(&request.username)
        .ok_or(AuthError::InvalidCredentials)?;

    let password_matches = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| AuthError::Internal(format!("password hash verification failed: {e}")))?;
    if !password_matches {
        return Err(AuthError::InvalidCredentials);
    }

    // The model assigns exactly one role per user; the token carries it as a
    // sequence so multi-role identities stay representable.
    let issued = state
        .codec
        .issue(&user.id, &user.username, &[user.role], Utc::now())?;

    Ok(LoginResponse {
        expires_in: issued.expires_in_ms(),
        token: issued.token,
        user_id: user.id,
        username: user.username,
        roles: issued.claims.roles,
    })
}
