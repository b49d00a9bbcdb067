// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{RoutePolicy, TokenCodec};
use crate::config::SecurityConfig;
use crate::store::UserStore;

/// Shared application state.
///
/// Cheap to clone: the codec holds its keys behind `Arc`s and everything else
/// is reference-counted. The signing key inside the codec is the only
/// process-wide security state and is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<UserStore>>,
    pub codec: TokenCodec,
    pub policy: Arc<RoutePolicy>,
    pub request_logging: bool,
}

impl AppState {
    pub fn new(store: UserStore, codec: TokenCodec, policy: RoutePolicy, request_logging: bool) -> Self {
        Self {
            users: Arc::new(RwLock::new(store)),
            codec,
            policy: Arc::new(policy),
            request_logging,
        }
    }
}

impl Default for AppState {
    /// Empty store, development secret, standard route policy.
    fn default() -> Self {
        let config = SecurityConfig::default();
        Self::new(
            UserStore::new(),
            TokenCodec::new(&config.secret, config.token_lifetime_ms),
            RoutePolicy::standard(),
            config.request_logging,
        )
    }
}
