mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::services::{
    ApiKeyService, AuthService, FileService, FlagService, TokenBlacklist, UploadService,
    UserService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Initialize services
    let user_service = UserService::new(&db);
    let user_repository = user_service.repository();
    let auth_service = AuthService::new(Arc::clone(&user_repository));
    let flag_service = FlagService::new(Arc::clone(&user_repository));
    let upload_service = UploadService::new(&db);
    let api_key_service = ApiKeyService::new(&db);
    let file_service = FileService::new();
    let token_blacklist = TokenBlacklist::new();

    // Create indexes for all collections
    user_repository
        .create_indexes()
        .await
        .expect("Failed to create user indexes");
    upload_service
        .repository()
        .create_indexes()
        .await
        .expect("Failed to create upload indexes");
    api_key_service
        .repository()
        .create_indexes()
        .await
        .expect("Failed to create API key indexes");

    // Seed the initial admin user when enabled
    user_service
        .seed_admin()
        .await
        .expect("Failed to seed admin user");

    let user_service = web::Data::new(user_service);
    let auth_service = web::Data::new(auth_service);
    let flag_service = web::Data::new(flag_service);
    let upload_service = web::Data::new(upload_service);
    let api_key_service = web::Data::new(api_key_service);
    let file_service = web::Data::new(file_service);
    let blacklist_data = web::Data::new(token_blacklist.clone());

    let openapi = ApiDoc::openapi();

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let blacklist = token_blacklist.clone();

        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(auth_service.clone())
            .app_data(flag_service.clone())
            .app_data(upload_service.clone())
            .app_data(api_key_service.clone())
            .app_data(file_service.clone())
            .app_data(blacklist_data.clone())
            .configure(|cfg| routes::configure_routes(cfg, blacklist))
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
