// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Public endpoints: health check and login.

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Health check endpoint handler.
///
/// Always answers 200 while the process is running; requires no
/// authentication.
#[utoipa::path(
    get,
    path = "/api/public/health",
    tag = "Public",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        message: "Application is running".to_string(),
    })
}

/// Login endpoint handler.
///
/// Exchanges a username/password pair for a signed bearer token.
#[utoipa::path(
    post,
    path = "/api/public/auth/login",
    tag = "Public",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    uri: Uri,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    auth::login::login(&state, request)
        .await
        .map(Json)
        .map_err(|e| e.into_api_error(uri.path()))
}
