// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Axum extractor for the authenticated identity.
//!
//! Handlers on protected routes receive the identity the authentication
//! middleware attached:
//!
//! ```rust,ignore
//! async fn my_handler(CurrentUser(identity): CurrentUser) -> impl IntoResponse {
//!     // identity is IdentityContext
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::claims::IdentityContext;
use super::error::AuthError;
use crate::error::ApiError;

/// Extractor for the request's authenticated identity.
///
/// The authorization gate already rejects unauthenticated requests to
/// protected routes; this extractor is the handler-boundary backstop and
/// fails closed with 401 if no identity was attached. It never decodes
/// tokens itself.
pub struct CurrentUser(pub IdentityContext);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                AuthError::AuthenticationRequired.into_api_error(parts.uri.path())
            })
    }
}
