// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Gatehouse - Stateless Token Authentication Service
//!
//! This crate provides stateless JWT authentication and role-based
//! authorization for an HTTP API: signed bearer tokens issued at login,
//! per-request authentication middleware, and a data-driven route
//! authorization gate.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Token codec, login flow, middleware, authorization gate
//! - `config` - Environment-driven configuration
//! - `store` - In-memory user store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
