//! HTTP request handlers.

pub mod user_handler;

pub use user_handler::{search_users, user_routes};
