// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! HTTP API: router assembly and OpenAPI documentation.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{gate, middleware as auth_middleware, Role},
    models::{LoginRequest, LoginResponse},
    state::AppState,
};

pub mod admin;
pub mod public;
pub mod users;

/// Build the application router.
///
/// Middleware runs outside-in: CORS, request tracing, authentication
/// (establishes identity, never rejects), then the authorization gate
/// (rejects), then the handlers.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/public/health", get(public::health))
        .route("/api/public/auth/login", post(public::login))
        .route("/api/user/me", get(users::me))
        .route("/api/admin/users", get(admin::list_users))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            gate::authorize,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::authenticate,
        ))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        public::health,
        public::login,
        users::me,
        admin::list_users
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            public::HealthResponse,
            users::UserMeResponse,
            admin::AdminUserItem,
            admin::AdminUsersResponse,
            Role
        )
    ),
    tags(
        (name = "Public", description = "Endpoints that require no authentication"),
        (name = "Users", description = "Endpoints for any authenticated user"),
        (name = "Admin", description = "Endpoints requiring ROLE_ADMIN")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::default());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
