//! Services organized by domain concern.

pub mod api_key_service;
pub mod auth_service;
pub mod file_service;
pub mod flag_service;
pub mod token_blacklist;
pub mod upload_service;
pub mod user_service;

pub use api_key_service::ApiKeyService;
pub use auth_service::AuthService;
pub use file_service::FileService;
pub use flag_service::FlagService;
pub use token_blacklist::TokenBlacklist;
pub use upload_service::UploadService;
pub use user_service::UserService;
