//! User Store API - In-memory user CRUD over JSON/HTTP
//!
//! A minimal REST service holding an ordered collection of user records in
//! process memory and exposing list, get, create, update, delete, and
//! search operations with a consistent JSON envelope.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **store**: In-memory state and its mutation contract
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```bash
//! # Start the server (binds 0.0.0.0:3000 by default)
//! cargo run -- serve
//!
//! # Pick a different port
//! cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{CreateUser, UpdateUser, User};
pub use errors::{AppError, AppResult};
pub use store::UserStore;
