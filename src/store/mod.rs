//! Store layer - Owned in-memory state and its mutation contract.

mod user_store;

pub use user_store::UserStore;
