//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_UPLOADS: &str = "uploads";
pub const COLLECTION_API_KEYS: &str = "api_keys";
