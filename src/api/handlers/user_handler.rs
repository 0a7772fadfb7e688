//! User CRUD and search handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created};

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Text matched case-insensitively against user names and emails
    #[serde(default)]
    pub q: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users with a count", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    let users = state.store.list();
    let count = users.len();

    Json(ApiResponse::with_count(users, count))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.store.get(id)?;

    Ok(Json(ApiResponse::success(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Missing required field or duplicate email")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> AppResult<Created<User>> {
    let user = state.store.create(payload)?;

    Ok(Created(ApiResponse::with_message(
        user,
        "User created successfully",
    )))
}

/// Partially update an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Duplicate email"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    JsonBody(payload): JsonBody<UpdateUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.store.update(id, payload)?;

    Ok(Json(ApiResponse::with_message(
        user,
        "User updated successfully",
    )))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.store.delete(id)?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}

/// Search users by name or email
#[utoipa::path(
    get,
    path = "/search",
    tag = "Users",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching users with the normalized query", body = [User]),
        (status = 400, description = "Missing query parameter")
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let query = params.q.unwrap_or_default().to_lowercase();

    if query.is_empty() {
        return Err(AppError::validation(
            "Search query parameter 'q' is required",
        ));
    }

    let results = state.store.search(&query);
    let count = results.len();

    Ok(Json(ApiResponse::search_results(results, count, query)))
}
