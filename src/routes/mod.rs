use actix_governor::Governor;
use actix_web::web;

use crate::handlers;
use crate::middleware::{create_auth_rate_limiter_config, AuthMiddleware};
use crate::services::TokenBlacklist;

pub fn configure_routes(cfg: &mut web::ServiceConfig, blacklist: TokenBlacklist) {
    let governor_config = create_auth_rate_limiter_config();

    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Logout needs the verified token from the auth middleware;
            // registered before the /auth scope so it isn't swallowed by it
            .service(
                web::resource("/auth/logout")
                    .wrap(AuthMiddleware::new(blacklist.clone()))
                    .route(web::post().to(handlers::logout)),
            )
            // Auth routes (public, rate limited)
            .service(
                web::scope("/auth")
                    .wrap(Governor::new(&governor_config))
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login)),
            )
            // User routes (protected)
            .service(
                web::scope("/users")
                    .wrap(AuthMiddleware::new(blacklist.clone()))
                    // Get current authenticated user
                    .route("/me", web::get().to(handlers::get_current_user))
                    // Change user password
                    .route("/{id}/password", web::patch().to(handlers::change_password))
                    // Replace account tags (admin only)
                    .route("/{id}/tags", web::patch().to(handlers::update_tags)),
            )
            // Upload routes (protected)
            .service(
                web::scope("/uploads")
                    .wrap(AuthMiddleware::new(blacklist.clone()))
                    // Paginated listing with link headers
                    .route("", web::get().to(handlers::list_uploads))
                    // Multipart file upload
                    .route("", web::post().to(handlers::create_upload))
                    // Get specific upload by ID
                    .route("/{id}", web::get().to(handlers::get_upload))
                    // Delete upload and backing file
                    .route("/{id}", web::delete().to(handlers::delete_upload)),
            )
            // API key routes (protected)
            .service(
                web::scope("/keys")
                    .wrap(AuthMiddleware::new(blacklist.clone()))
                    .route("", web::post().to(handlers::create_api_key))
                    .route("", web::get().to(handlers::list_api_keys))
                    .route("/{id}", web::delete().to(handlers::revoke_api_key)),
            )
            // Feature flag routes (protected)
            .service(
                web::scope("/flags")
                    .wrap(AuthMiddleware::new(blacklist))
                    .route("", web::get().to(handlers::get_feature_flags)),
            ),
    );
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = crate::models::HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
