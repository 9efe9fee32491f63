//! Success message constants used throughout the application.

// Authentication messages
pub const MSG_USER_REGISTERED: &str = "User registered successfully";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful";
pub const MSG_LOGOUT_SUCCESS: &str = "Logout successful";

// User management messages
pub const MSG_USER_PROFILE_RETRIEVED: &str = "User profile retrieved";
pub const MSG_PASSWORD_CHANGED: &str = "Password changed successfully";
pub const MSG_TAGS_UPDATED: &str = "Account tags updated successfully";

// Upload messages
pub const MSG_UPLOAD_CREATED: &str = "File uploaded successfully";
pub const MSG_UPLOAD_FOUND: &str = "Upload found";
pub const MSG_UPLOAD_DELETED: &str = "Upload deleted successfully";

// API key messages
pub const MSG_API_KEY_CREATED: &str = "API key created. Store it now; it will not be shown again.";
pub const MSG_API_KEYS_LISTED: &str = "API keys retrieved";
pub const MSG_API_KEY_REVOKED: &str = "API key revoked successfully";

// Feature flag messages
pub const MSG_FLAGS_RESOLVED: &str = "Feature flags resolved";
