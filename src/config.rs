// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and is
//! immutable afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SECURITY_JWT_SECRET` | HMAC-SHA256 signing secret (>= 256 bits recommended) | development fallback |
//! | `SECURITY_JWT_EXPIRATION_MS` | Token lifetime in milliseconds | `86400000` (24h) |
//! | `SECURITY_REQUEST_LOGGING` | Log authenticated requests | `true` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the signing secret.
pub const JWT_SECRET_ENV: &str = "SECURITY_JWT_SECRET";

/// Environment variable name for the token lifetime (milliseconds).
pub const JWT_EXPIRATION_ENV: &str = "SECURITY_JWT_EXPIRATION_MS";

/// Environment variable name for the request-logging toggle.
pub const REQUEST_LOGGING_ENV: &str = "SECURITY_REQUEST_LOGGING";

/// Fallback signing secret for development setups.
///
/// Startup logs a warning whenever this is in use.
pub const DEFAULT_SECRET: &str =
    "default-secret-key-change-in-production-must-be-at-least-256-bits";

/// Default token lifetime: 24 hours, in milliseconds.
pub const DEFAULT_EXPIRATION_MS: i64 = 86_400_000;

/// Security-related configuration.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// HMAC signing secret. Never logged.
    pub secret: String,
    /// Token lifetime in milliseconds.
    pub token_lifetime_ms: i64,
    /// Whether to log authenticated requests.
    pub request_logging: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            token_lifetime_ms: DEFAULT_EXPIRATION_MS,
            request_logging: true,
        }
    }
}

impl SecurityConfig {
    /// Load from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let secret = env::var(JWT_SECRET_ENV).unwrap_or_else(|_| DEFAULT_SECRET.to_string());

        let token_lifetime_ms = env::var(JWT_EXPIRATION_ENV)
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_EXPIRATION_MS);

        let request_logging = env::var(REQUEST_LOGGING_ENV)
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);

        Self {
            secret,
            token_lifetime_ms,
            request_logging,
        }
    }

    /// Emit startup warnings for weak configuration. Never aborts.
    pub fn log_warnings(&self) {
        if self.secret == DEFAULT_SECRET {
            tracing::warn!("using the built-in development signing secret; set SECURITY_JWT_SECRET in production");
        } else if self.secret.len() < 32 {
            tracing::warn!("signing secret is shorter than the recommended 32 bytes");
        }
    }
}

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
