//! Application state - Dependency injection container.
//!
//! Holds the owned store instance handed to the router, so that tests can
//! construct isolated states instead of sharing a process-wide global.

use std::sync::Arc;

use crate::store::UserStore;

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory user store
    pub store: Arc<UserStore>,
}

impl AppState {
    /// Create application state around an existing store.
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Create application state with the seeded demo store.
    ///
    /// This is what the serve command uses; tests that want an empty
    /// collection go through `new` with `UserStore::new()`.
    pub fn seeded() -> Self {
        Self::new(Arc::new(UserStore::seeded()))
    }
}
