// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Per-request authentication middleware.
//!
//! Runs once for every inbound request, before the authorization gate. It
//! only ever *establishes* identity - rejection is the gate's job, so a
//! garbage token on a public route never breaks that route.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::claims::IdentityContext;
use super::error::TokenError;
use super::token::TokenCodec;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Authentication middleware.
///
/// Steps:
/// 1. No `Authorization: Bearer ...` header: continue anonymous.
/// 2. Identity already attached (idempotency guard): no-op.
/// 3. Otherwise extract the subject from the token, then verify the token
///    bound to that subject, and attach the resulting [`IdentityContext`]
///    to the request extensions.
/// 4. Any verification failure is logged at debug level and the request
///    continues anonymous.
///
/// The chain is never halted here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let already_authenticated = request.extensions().get::<IdentityContext>().is_some();

    if !already_authenticated {
        if let Some(token) = bearer_token(&request) {
            match verify_bearer(&state.codec, token) {
                Ok(identity) => {
                    if state.request_logging {
                        tracing::info!(
                            username = %identity.username,
                            user_id = %identity.user_id,
                            method = %request.method(),
                            path = %request.uri().path(),
                            "authenticated request"
                        );
                    }
                    request.extensions_mut().insert(identity);
                }
                Err(err) => {
                    tracing::debug!(
                        error = %err,
                        method = %request.method(),
                        path = %request.uri().path(),
                        "token rejected; continuing unauthenticated"
                    );
                }
            }
        }
    }

    next.run(request).await
}

/// Pull the bearer token out of the `Authorization` header, if present.
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
}

/// Two-phase verification: read the subject out of the token, then verify
/// the token with that subject as the expected principal.
fn verify_bearer(codec: &TokenCodec, token: &str) -> Result<IdentityContext, TokenError> {
    let username = codec.extract_username(token)?;
    let claims = codec.verify(token, Some(&username))?;
    Ok(IdentityContext::from_claims(&claims))
}
