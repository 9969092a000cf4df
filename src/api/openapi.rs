//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for the JSON endpoints. The server-rendered
//! dashboard views are not part of the API surface.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{User, UserInput};
use crate::types::MessageResponse;

/// OpenAPI documentation for the user dashboard backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Dashboard",
        version = "0.1.0",
        description = "User management backend with a server-rendered dashboard",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(user_handler::add_user, user_handler::update_user),
    components(schemas(User, UserInput, MessageResponse)),
    tags(
        (name = "Users", description = "User record management")
    )
)]
pub struct ApiDoc;
