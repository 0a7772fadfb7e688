//! In-memory user store.
//!
//! Owns the user collection and the id counter behind a single mutex so
//! the uniqueness invariants hold under concurrent requests. Lookups are
//! linear scans; the store holds dozens of records at most.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};

/// Mutable store state: the records plus the next id to hand out.
struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

/// Thread-safe in-memory collection of user records.
///
/// Ids come from a monotonic counter and are never reused, even after a
/// delete. Construct with [`UserStore::new`] for an empty store (tests) or
/// [`UserStore::seeded`] for the two fixture records the service starts
/// with.
pub struct UserStore {
    inner: Mutex<StoreInner>,
}

impl UserStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the two demo records.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            inner: Mutex::new(StoreInner {
                users: vec![
                    User {
                        id: 1,
                        name: "John Doe".to_string(),
                        email: "john@example.com".to_string(),
                        age: 30,
                        created_at: now,
                    },
                    User {
                        id: 2,
                        name: "Jane Smith".to_string(),
                        email: "jane@example.com".to_string(),
                        age: 25,
                        created_at: now,
                    },
                ],
                next_id: 3,
            }),
        }
    }

    /// Lock the store state. A poisoned lock is recovered rather than
    /// propagated: every operation validates before it mutates, so a panic
    /// cannot leave the list half-updated.
    fn locked(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.locked().users.clone()
    }

    /// Look up a user by id.
    pub fn get(&self, id: u64) -> AppResult<User> {
        self.locked()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_not_found()
    }

    /// Create a new user.
    ///
    /// Rejects missing/empty `name` or `email` and duplicate emails
    /// without mutating the collection or advancing the id counter.
    pub fn create(&self, payload: CreateUser) -> AppResult<User> {
        let name = payload.name.unwrap_or_default();
        let email = payload.email.unwrap_or_default();

        if name.is_empty() || email.is_empty() {
            return Err(AppError::validation("Name and email are required"));
        }

        let mut inner = self.locked();

        // Case-sensitive comparison, matching the uniqueness invariant.
        if inner.users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("Email"));
        }

        let user = User {
            id: inner.next_id,
            name,
            email,
            age: payload.age.unwrap_or(0),
            created_at: Utc::now(),
        };

        inner.users.push(user.clone());
        inner.next_id += 1;

        tracing::debug!(id = user.id, "user created");
        Ok(user)
    }

    /// Apply a partial update to an existing user.
    ///
    /// `name` and `email` are replaced only when supplied non-empty; the
    /// email uniqueness check excludes the record being updated. `age` is
    /// replaced whenever supplied, including `0`.
    pub fn update(&self, id: u64, payload: UpdateUser) -> AppResult<User> {
        let mut inner = self.locked();

        if !inner.users.iter().any(|u| u.id == id) {
            return Err(AppError::NotFound);
        }

        if let Some(email) = payload.email.as_deref() {
            if !email.is_empty() && inner.users.iter().any(|u| u.email == email && u.id != id) {
                return Err(AppError::conflict("Email"));
            }
        }

        // Presence checked above.
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_not_found()?;

        if let Some(name) = payload.name.filter(|n| !n.is_empty()) {
            user.name = name;
        }
        if let Some(email) = payload.email.filter(|e| !e.is_empty()) {
            user.email = email;
        }
        if let Some(age) = payload.age {
            user.age = age;
        }

        tracing::debug!(id, "user updated");
        Ok(user.clone())
    }

    /// Remove a user permanently. The relative order of the remaining
    /// records is preserved.
    pub fn delete(&self, id: u64) -> AppResult<()> {
        let mut inner = self.locked();

        let position = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_not_found()?;

        inner.users.remove(position);
        tracing::debug!(id, "user deleted");
        Ok(())
    }

    /// Case-insensitive substring search over `name` and `email`.
    ///
    /// The caller is expected to pass an already-lowercased, non-empty
    /// query; an empty query is a request-level validation error.
    pub fn search(&self, query: &str) -> Vec<User> {
        self.locked()
            .users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(query) || u.email.to_lowercase().contains(query)
            })
            .cloned()
            .collect()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
