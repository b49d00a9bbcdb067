// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Standardized JSON error responses.
//!
//! Every non-2xx response produced by the security layers uses the same body:
//! `{status, error, message, path, timestamp}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub path: String,
}

/// Wire form of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase ("Unauthorized", "Forbidden", ...)
    pub error: String,
    /// Human-readable detail
    pub message: String,
    /// Request path that produced the error
    pub path: String,
    /// ISO-8601 timestamp
    pub timestamp: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message, path)
    }

    pub fn forbidden(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message, path)
    }

    /// Generic 500. Detail belongs in the server log, never in the body.
    pub fn internal(path: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
            path,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            status: self.status.as_u16(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.message,
            path: self.path,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_message_and_path() {
        let err = ApiError::unauthorized("no token", "/api/user/me");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "no token");
        assert_eq!(err.path, "/api/user/me");

        let err = ApiError::forbidden("wrong role", "/api/admin/users");
        assert_eq!(err.status, StatusCode::FORBIDDEN);

        let err = ApiError::internal("/api/user/me");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "An unexpected error occurred");
    }

    #[tokio::test]
    async fn into_response_emits_standard_body() {
        let response = ApiError::unauthorized("Invalid username or password", "/api/public/auth/login")
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 401);
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(body["message"], "Invalid username or password");
        assert_eq!(body["path"], "/api/public/auth/login");
        assert!(body["timestamp"].is_string());
    }
}
