//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, User};

/// OpenAPI documentation for the User Store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Store API",
        version = "1.0.0",
        description = "In-memory user store exposed over a JSON REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::search_users,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
