// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! # Authentication and Authorization
//!
//! Stateless bearer-token security for the HTTP API.
//!
//! ## Request Flow
//!
//! 1. Client logs in at `POST /api/public/auth/login`; the login flow checks
//!    credentials against the user store and mints a signed HS256 token.
//! 2. Client presents `Authorization: Bearer <token>` on later requests.
//! 3. The authentication middleware verifies the token and attaches an
//!    [`IdentityContext`] to the request; failures leave the request
//!    anonymous and are never fatal.
//! 4. The authorization gate then permits or denies the request from the
//!    route policy: public prefixes pass, everything else needs an identity,
//!    admin routes need `ROLE_ADMIN`.
//!
//! ## Security
//!
//! - Single process-wide HMAC-SHA256 signing key, immutable after startup
//! - No server-side session state; expiry is the only token lifecycle end
//! - Identity lives only in per-request extensions, never in globals
//! - Login failures are indistinguishable between unknown-user and
//!   wrong-password

pub mod claims;
pub mod error;
pub mod extractor;
pub mod gate;
pub mod login;
pub mod middleware;
pub mod roles;
pub mod token;

pub use claims::{Claims, IdentityContext};
pub use error::{AuthError, TokenError};
pub use extractor::CurrentUser;
pub use gate::{Decision, RoutePolicy};
pub use roles::Role;
pub use token::{IssuedToken, TokenCodec};
