// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! In-memory user store.
//!
//! The security core only depends on lookup-by-username; everything else here
//! exists for seeding and the admin listing endpoint.

use std::collections::HashMap;

use uuid::Uuid;

use crate::auth::Role;
use crate::models::User;

#[derive(Debug, Default)]
pub struct UserStore {
    // keyed by username, which is unique
    users: HashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by username.
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    /// Insert a user with an already-computed password hash.
    ///
    /// Replaces any existing user with the same username.
    pub fn insert(&mut self, username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        };
        self.users.insert(user.username.clone(), user.clone());
        user
    }

    /// All users, ordered by username for stable listings.
    pub fn list_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Seed the default demo users (`admin`/`admin123`, `user`/`user123`).
    pub fn seed_defaults(&mut self) -> Result<(), bcrypt::BcryptError> {
        self.seed_defaults_with_cost(bcrypt::DEFAULT_COST)
    }

    /// Seed the default users with an explicit bcrypt cost.
    ///
    /// Tests use a low cost to keep hashing fast; production seeding goes
    /// through [`Self::seed_defaults`].
    pub fn seed_defaults_with_cost(&mut self, cost: u32) -> Result<(), bcrypt::BcryptError> {
        let admin = self.insert("admin", bcrypt::hash("admin123", cost)?, Role::Admin);
        tracing::info!(username = %admin.username, "created seed admin user");

        let user = self.insert("user", bcrypt::hash("user123", cost)?, Role::User);
        tracing::info!(username = %user.username, "created seed regular user");

        Ok(())
    }
}
