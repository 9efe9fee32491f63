use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    ApiKeyResponse, AuthResponse, ChangePasswordRequest, CreateApiKeyRequest,
    CreatedApiKeyResponse, ErrorResponse, FeatureFlagState, HealthResponse, LoginRequest,
    RegisterRequest, Role, UpdateTagsRequest, UploadResponse, UserResponse,
};

/// OpenAPI documentation for the Uploads API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Uploads API",
        version = "1.0.0",
        description = "REST API for user accounts, API keys, feature flags, and paginated upload management.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
        (url = "http://0.0.0.0:8080", description = "Docker development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "User authentication endpoints (register, login, logout)"),
        (name = "Users", description = "User profile, password, and tag management endpoints"),
        (name = "Uploads", description = "Upload management and paginated listing endpoints"),
        (name = "API Keys", description = "API key issuance, listing, and revocation endpoints"),
        (name = "Feature Flags", description = "Tag-based feature flag resolution endpoints")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::logout,
        crate::handlers::get_current_user,
        crate::handlers::change_password,
        crate::handlers::update_tags,
        crate::handlers::list_uploads,
        crate::handlers::create_upload,
        crate::handlers::get_upload,
        crate::handlers::delete_upload,
        crate::handlers::create_api_key,
        crate::handlers::list_api_keys,
        crate::handlers::revoke_api_key,
        crate::handlers::get_feature_flags,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            ChangePasswordRequest,
            UpdateTagsRequest,
            CreateApiKeyRequest,
            Role,
            UserResponse,
            AuthResponse,
            UploadResponse,
            ApiKeyResponse,
            CreatedApiKeyResponse,
            FeatureFlagState,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT token obtained from the /api/auth/login endpoint",
                        ))
                        .build(),
                ),
            );
        }
    }
}
