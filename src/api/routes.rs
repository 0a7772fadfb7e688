//! Application route configuration.

use std::any::Any;
use std::collections::BTreeMap;

use axum::{
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{API_VERSION, SERVICE_NAME};
use crate::errors::AppError;

use super::handlers::{search_users, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service metadata and health endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User CRUD
        .nest("/users", user_routes())
        // Search across users
        .route("/search", get(search_users))
        // Unmatched routes get the standard 404 envelope
        .fallback(endpoint_not_found)
        // Global middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service metadata returned by the root endpoint
#[derive(Serialize)]
struct ApiInfo {
    message: String,
    version: &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
}

/// Root endpoint: service metadata and endpoint map
async fn root() -> Json<ApiInfo> {
    let endpoints = BTreeMap::from([
        ("GET /", "API Information"),
        ("GET /health", "Health check"),
        ("GET /users", "Get all users"),
        ("GET /users/{id}", "Get user by ID"),
        ("POST /users", "Create new user"),
        ("PUT /users/{id}", "Update user"),
        ("DELETE /users/{id}", "Delete user"),
        ("GET /search?q=<query>", "Search users by name or email"),
    ]);

    Json(ApiInfo {
        message: format!("Welcome to {}", SERVICE_NAME),
        version: API_VERSION,
        endpoints,
    })
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    service: &'static str,
}

/// Health check endpoint. There is no external dependency to probe, so
/// this always reports healthy with the current timestamp.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    })
}

/// Fallback for unmatched routes
async fn endpoint_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Convert a handler panic into the 500 error envelope instead of a bare
/// protocol-level failure.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("handler panicked: {}", detail)).into_response()
}
