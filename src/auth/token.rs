// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! Token codec: issuance and verification of signed identity tokens.
//!
//! Tokens are compact JWS strings (`header.claims.signature`) signed with a
//! process-wide HMAC-SHA256 key. The codec is pure: signing and verification
//! are functions of the token bytes, the immutable key, and a timestamp, so
//! tests can inject a clock via [`TokenCodec::verify_at`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::Claims;
use super::error::{AuthError, TokenError};
use super::roles::Role;

/// A freshly minted token together with the claims it encodes.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed token string handed to the client
    pub token: String,
    /// The claims embedded in it
    pub claims: Claims,
}

impl IssuedToken {
    /// Validity window in milliseconds (`exp - iat`).
    pub fn expires_in_ms(&self) -> i64 {
        (self.claims.exp - self.claims.iat) * 1000
    }
}

/// Issues and verifies signed identity tokens.
///
/// Holds the only piece of process-wide shared state in the security core:
/// the signing key. The key is read-only after construction and is never
/// logged or serialized.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
    lifetime_ms: i64,
}

impl TokenCodec {
    /// Create a codec from the signing secret and token lifetime.
    pub fn new(secret: &str, lifetime_ms: i64) -> Self {
        debug_assert!(lifetime_ms > 0, "token lifetime must be positive");

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked manually in `verify_at` so the boundary is
        // exclusive of validity (`now >= exp` is expired) with zero leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = Default::default();

        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation: Arc::new(validation),
            lifetime_ms,
        }
    }

    /// Configured token lifetime in milliseconds.
    pub fn lifetime_ms(&self) -> i64 {
        self.lifetime_ms
    }

    /// Issue a signed token for the given principal.
    ///
    /// `iat` is `now`, `exp` is `now` plus the configured lifetime.
    /// Deterministic for identical inputs and timestamp.
    pub fn issue(
        &self,
        user_id: &str,
        username: &str,
        roles: &[Role],
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        debug_assert!(!username.is_empty(), "token subject must be non-empty");

        let iat = now.timestamp();
        let claims = Claims {
            sub: username.to_string(),
            uid: user_id.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            iat,
            exp: iat + self.lifetime_ms / 1000,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("failed to sign token: {e}")))?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify a token against the current clock.
    ///
    /// When `expected_subject` is supplied the claims' subject must match it;
    /// pass `None` when the caller has not yet decided on a principal.
    pub fn verify(&self, token: &str, expected_subject: Option<&str>) -> Result<Claims, TokenError> {
        self.verify_at(token, expected_subject, Utc::now())
    }

    /// Verify a token at an explicit point in time.
    ///
    /// Checks short-circuit in order: structure, signature, claims decode,
    /// expiry, subject. A token is already invalid at exactly `exp`.
    pub fn verify_at(
        &self,
        token: &str,
        expected_subject: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        if !has_three_segments(token) {
            return Err(TokenError::Malformed);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;
        let claims = data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        if let Some(expected) = expected_subject {
            if claims.sub != expected {
                return Err(TokenError::SubjectMismatch);
            }
        }

        Ok(claims)
    }

    /// Extract the subject (username) from a verified token.
    ///
    /// Performs full verification minus the subject-match step; a bad
    /// signature or malformed token is never masked.
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.verify(token, None)?.sub)
    }

    /// Extract the user ID from a verified token.
    pub fn extract_user_id(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.verify(token, None)?.uid)
    }

    /// Extract the role strings from a verified token.
    pub fn extract_roles(&self, token: &str) -> Result<Vec<String>, TokenError> {
        Ok(self.verify(token, None)?.roles)
    }

    /// Extract the expiration timestamp (epoch seconds) from a verified token.
    pub fn extract_expiration(&self, token: &str) -> Result<i64, TokenError> {
        Ok(self.verify(token, None)?.exp)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keys are deliberately omitted.
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .field("lifetime_ms", &self.lifetime_ms)
            .finish()
    }
}

fn has_three_segments(token: &str) -> bool {
    let mut count = 0;
    for segment in token.split('.') {
        if segment.is_empty() {
            return false;
        }
        count += 1;
    }
    count == 3
}
