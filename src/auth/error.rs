// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Authentication and authorization error taxonomy.
//!
//! `TokenError` covers token verification; these never become responses on
//! their own - the middleware swallows them and the request continues
//! unauthenticated. `AuthError` covers the failures that do surface to the
//! caller: bad login credentials, missing identity on a protected route,
//! missing role, and unexpected internal errors.

use axum::http::StatusCode;
use thiserror::Error;

use super::roles::Role;
use crate::error::ApiError;

/// Why a token failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is structurally invalid or the claims are unparseable
    #[error("token is malformed")]
    Malformed,
    /// Signature does not match (tampering or wrong key)
    #[error("token signature is invalid")]
    BadSignature,
    /// Past the expiration timestamp
    #[error("token has expired")]
    Expired,
    /// Subject claim does not match the expected principal
    #[error("token subject does not match the expected principal")]
    SubjectMismatch,
}

/// User-visible authentication/authorization failure.
#[derive(Debug)]
pub enum AuthError {
    /// Login rejected. Deliberately identical for unknown usernames and wrong
    /// passwords so responses cannot be used to enumerate accounts.
    InvalidCredentials,
    /// Protected route reached without an authenticated identity
    AuthenticationRequired,
    /// Authenticated identity lacks the role the route requires
    InsufficientRole(Role),
    /// Unexpected failure; detail goes to the log, not the response
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::AuthenticationRequired => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::InsufficientRole(_) => StatusCode::FORBIDDEN,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert into a response-ready error for the given request path,
    /// logging the failure with enough context to diagnose it.
    pub fn into_api_error(self, path: &str) -> ApiError {
        match &self {
            AuthError::InvalidCredentials => {
                tracing::warn!(path, "authentication failed: invalid credentials");
            }
            AuthError::AuthenticationRequired => {
                tracing::warn!(path, "authentication required");
            }
            AuthError::InsufficientRole(role) => {
                tracing::warn!(path, required_role = %role, "access denied: missing role");
            }
            AuthError::Internal(detail) => {
                tracing::error!(path, detail, "unexpected error in security layer");
            }
        }

        match self {
            AuthError::Internal(_) => ApiError::internal(path),
            other => ApiError::new(other.status_code(), other.to_string(), path),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::AuthenticationRequired => {
                write!(f, "Authentication is required to access this resource")
            }
            AuthError::InsufficientRole(_) => {
                write!(f, "You do not have permission to access this resource")
            }
            AuthError::Internal(_) => write!(f, "An unexpected error occurred"),
        }
    }
}

impl std::error::Error for AuthError {}
