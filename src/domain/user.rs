//! User domain entity and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned from a monotonic counter
    #[schema(example = 1)]
    pub id: u64,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address, unique across the store
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Age in years (0 when not provided)
    #[schema(example = 30)]
    pub age: u32,
    /// Creation timestamp, set server-side
    pub created_at: DateTime<Utc>,
}

/// User creation payload.
///
/// `name` and `email` are optional at the serde level so that a missing
/// field produces the store's validation message instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User display name (required, non-empty)
    #[serde(default)]
    #[schema(example = "Alice Johnson")]
    pub name: Option<String>,
    /// User email address (required, non-empty, unique)
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    /// Age in years, defaults to 0 when omitted
    #[serde(default)]
    #[schema(example = 28)]
    pub age: Option<u32>,
}

/// Partial update payload.
///
/// Absent and `null` fields are left untouched; `age` is applied whenever
/// supplied, including `0`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New display name (ignored when empty)
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address (ignored when empty, must stay unique)
    #[serde(default)]
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,
    /// New age in years
    #[serde(default)]
    #[schema(example = 29)]
    pub age: Option<u32>,
}
