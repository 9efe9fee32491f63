//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_TOKEN_REVOKED: &str = "Token has been revoked";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ERR_ACCOUNT_DEACTIVATED: &str = "Account is deactivated";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";
pub const ERR_USERNAME_EXISTS: &str = "Username already taken";

// Authorization errors
pub const ERR_ONLY_ADMINS_TAGS: &str = "Only administrators can update account tags";
pub const ERR_NO_PERMISSION_UPLOAD: &str = "You don't have permission to access this upload";
pub const ERR_NO_PERMISSION_API_KEY: &str = "You don't have permission to manage this API key";
pub const ERR_CHANGE_OWN_PASSWORD_ONLY: &str =
    "You can only change your own password. For other users, use the password reset feature.";

// Password errors
pub const ERR_PASSWORD_MISMATCH: &str = "New password and confirmation do not match";
pub const ERR_SAME_PASSWORD: &str = "New password must be different from current password";
pub const ERR_WRONG_PASSWORD: &str = "Current password is incorrect";

// Upload errors
pub const ERR_UPLOAD_NOT_FOUND: &str = "Upload not found";
pub const ERR_INVALID_UPLOAD_ID: &str = "Invalid upload ID format";
pub const ERR_INVALID_FILE_TYPE: &str = "Invalid file type";
pub const ERR_FILE_TOO_LARGE: &str = "File too large. Maximum size is 50MB.";
pub const ERR_NO_UPLOAD_FILE: &str =
    "No file provided. Please upload a file with field name 'file'.";
pub const ERR_FAILED_PROCESS_UPLOAD: &str = "Failed to process upload";
pub const ERR_FAILED_READ_FILE: &str = "Failed to read file data";
pub const ERR_FAILED_SAVE_FILE: &str = "Failed to save file";
pub const ERR_FAILED_FETCH_USER: &str = "Failed to fetch updated user";

// API key errors
pub const ERR_API_KEY_NOT_FOUND: &str = "API key not found";
pub const ERR_INVALID_API_KEY_ID: &str = "Invalid API key ID format";
pub const ERR_API_KEY_LIMIT: &str = "Maximum number of active API keys reached";
pub const ERR_API_KEY_ALREADY_REVOKED: &str = "API key is already revoked";

// Validation errors
pub const ERR_WEAK_PASSWORD: &str =
    "Password must contain at least one uppercase, lowercase, digit, and special character";
pub const ERR_INVALID_USERNAME_FORMAT: &str =
    "Username can only contain letters, numbers, underscores, and hyphens";

// Tag errors
pub const ERR_TOO_MANY_TAGS: &str = "Too many tags. Maximum is 16.";
pub const ERR_INVALID_TAG_FORMAT: &str =
    "Tags can only contain letters, numbers, underscores, and hyphens (max 32 characters)";
