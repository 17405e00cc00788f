use utoipa::OpenApi;

use crate::models::{
    Credentials, ErrorResponse, HealthResponse, LoginResponse, LoginUser, ProfileUpdate,
    ProfileUpdateResponse, SignupRequest, SignupResponse, UserRecord, UserSummary,
};

/// OpenAPI documentation for the mock account API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock Account API",
        version = "0.1.0",
        description = "Demonstration auth and user-management endpoints backed by mock data. No endpoint checks credentials or stores anything.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "Mock login and signup"),
        (name = "Users", description = "Static user lookups and echoed profile updates")
    ),
    paths(
        crate::handlers::login,
        crate::handlers::signup,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::update_profile,
        crate::routes::health_check
    ),
    components(
        schemas(
            Credentials,
            SignupRequest,
            ProfileUpdate,
            LoginUser,
            LoginResponse,
            SignupResponse,
            UserRecord,
            UserSummary,
            ProfileUpdateResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
