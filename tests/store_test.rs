//! User store unit tests.
//!
//! Each test builds an isolated store instance, so nothing here depends on
//! shared process state.

use user_store_api::domain::{CreateUser, UpdateUser};
use user_store_api::errors::AppError;
use user_store_api::store::UserStore;

fn create_payload(name: &str, email: &str) -> CreateUser {
    CreateUser {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        age: None,
    }
}

// =============================================================================
// Seeding & Id Assignment
// =============================================================================

#[test]
fn seeded_store_has_two_records_and_counter_at_three() {
    let store = UserStore::seeded();
    let users = store.list();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].email, "john@example.com");
    assert_eq!(users[1].id, 2);
    assert_eq!(users[1].email, "jane@example.com");

    let created = store.create(create_payload("Alice", "alice@example.com")).unwrap();
    assert_eq!(created.id, 3);
}

#[test]
fn ids_increase_monotonically_in_creation_order() {
    let store = UserStore::new();

    let a = store.create(create_payload("A", "a@example.com")).unwrap();
    let b = store.create(create_payload("B", "b@example.com")).unwrap();
    let c = store.create(create_payload("C", "c@example.com")).unwrap();

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
}

#[test]
fn deleted_ids_are_never_reused() {
    let store = UserStore::new();

    let a = store.create(create_payload("A", "a@example.com")).unwrap();
    store.delete(a.id).unwrap();

    let b = store.create(create_payload("B", "b@example.com")).unwrap();
    assert_eq!(b.id, 2);
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn create_defaults_age_to_zero() {
    let store = UserStore::new();
    let user = store.create(create_payload("A", "a@example.com")).unwrap();

    assert_eq!(user.age, 0);
}

#[test]
fn create_rejects_missing_fields_without_mutation() {
    let store = UserStore::new();

    let missing_email = CreateUser {
        name: Some("A".to_string()),
        email: None,
        age: None,
    };
    let result = store.create(missing_email);
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let empty_name = CreateUser {
        name: Some(String::new()),
        email: Some("a@example.com".to_string()),
        age: None,
    };
    let result = store.create(empty_name);
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    assert!(store.list().is_empty());

    // Failed attempts must not have advanced the counter
    let user = store.create(create_payload("A", "a@example.com")).unwrap();
    assert_eq!(user.id, 1);
}

#[test]
fn create_rejects_duplicate_email_without_mutation() {
    let store = UserStore::seeded();

    let result = store.create(create_payload("Imposter", "john@example.com"));
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    assert_eq!(store.list().len(), 2);
}

#[test]
fn email_uniqueness_is_case_sensitive() {
    let store = UserStore::seeded();

    // Byte-for-byte comparison: a different casing is a different email
    let user = store.create(create_payload("John", "JOHN@example.com")).unwrap();
    assert_eq!(user.id, 3);
}

// =============================================================================
// Get
// =============================================================================

#[test]
fn get_returns_matching_record_or_not_found() {
    let store = UserStore::seeded();

    assert_eq!(store.get(1).unwrap().name, "John Doe");
    assert!(matches!(store.get(99).unwrap_err(), AppError::NotFound));
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn update_applies_supplied_fields_only() {
    let store = UserStore::seeded();

    let updated = store
        .update(
            1,
            UpdateUser {
                name: Some("Johnny".to_string()),
                email: None,
                age: None,
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Johnny");
    assert_eq!(updated.email, "john@example.com");
    assert_eq!(updated.age, 30);
}

#[test]
fn update_age_zero_is_persisted() {
    let store = UserStore::seeded();

    let updated = store
        .update(
            1,
            UpdateUser {
                name: None,
                email: None,
                age: Some(0),
            },
        )
        .unwrap();

    assert_eq!(updated.age, 0);
    assert_eq!(store.get(1).unwrap().age, 0);
}

#[test]
fn update_ignores_empty_name_and_email() {
    let store = UserStore::seeded();

    let updated = store
        .update(
            1,
            UpdateUser {
                name: Some(String::new()),
                email: Some(String::new()),
                age: None,
            },
        )
        .unwrap();

    assert_eq!(updated.name, "John Doe");
    assert_eq!(updated.email, "john@example.com");
}

#[test]
fn update_rejects_email_taken_by_another_user() {
    let store = UserStore::seeded();

    let result = store.update(
        1,
        UpdateUser {
            name: None,
            email: Some("jane@example.com".to_string()),
            age: None,
        },
    );

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    assert_eq!(store.get(1).unwrap().email, "john@example.com");
}

#[test]
fn update_allows_resubmitting_own_email() {
    let store = UserStore::seeded();

    // The record being updated is excluded from the uniqueness check
    let updated = store
        .update(
            1,
            UpdateUser {
                name: None,
                email: Some("john@example.com".to_string()),
                age: None,
            },
        )
        .unwrap();

    assert_eq!(updated.email, "john@example.com");
}

#[test]
fn update_unknown_id_is_not_found() {
    let store = UserStore::seeded();
    let result = store.update(99, UpdateUser::default());

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn delete_removes_exactly_one_record_preserving_order() {
    let store = UserStore::new();
    for (name, email) in [
        ("A", "a@example.com"),
        ("B", "b@example.com"),
        ("C", "c@example.com"),
    ] {
        store.create(create_payload(name, email)).unwrap();
    }

    store.delete(2).unwrap();

    let remaining: Vec<u64> = store.list().iter().map(|u| u.id).collect();
    assert_eq!(remaining, vec![1, 3]);
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let store = UserStore::seeded();

    let result = store.delete(99);
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
    assert_eq!(store.list().len(), 2);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn search_matches_name_and_email_substrings() {
    let store = UserStore::seeded();

    // Matches "Jane Smith" by name and "jane@example.com" by email
    let results = store.search("jane");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);

    // "example.com" appears in every seeded email
    let results = store.search("example.com");
    assert_eq!(results.len(), 2);
}

#[test]
fn search_is_case_insensitive_over_record_fields() {
    let store = UserStore::new();
    store.create(create_payload("MiXeD CaSe", "mixed@Example.com")).unwrap();

    // Queries arrive lowercased; record fields are lowercased for matching
    assert_eq!(store.search("mixed ca").len(), 1);
    assert_eq!(store.search("example.com").len(), 1);
}

#[test]
fn search_with_no_match_returns_empty() {
    let store = UserStore::seeded();
    assert!(store.search("nobody").is_empty());
}
