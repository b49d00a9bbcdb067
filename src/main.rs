// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

use gatehouse_server::{
    api::router,
    auth::{RoutePolicy, TokenCodec},
    config::{SecurityConfig, ServerConfig},
    state::AppState,
    store::UserStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let security = SecurityConfig::from_env();
    security.log_warnings();

    // Seed the demo users (admin/admin123, user/user123).
    let mut store = UserStore::new();
    store
        .seed_defaults()
        .expect("failed to seed default users");

    let codec = TokenCodec::new(&security.secret, security.token_lifetime_ms);
    let state = AppState::new(store, codec, RoutePolicy::standard(), security.request_logging);
    let app = router(state);

    let server = ServerConfig::from_env();
    let addr = server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "gatehouse server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
