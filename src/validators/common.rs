//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::{ERR_FILE_TOO_LARGE, ERR_INVALID_FILE_TYPE, ERR_PASSWORD_MISMATCH, ERR_SAME_PASSWORD};
use crate::errors::ApiError;

/// Allowed content types for file uploads.
pub const ALLOWED_UPLOAD_TYPES: [&str; 9] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
    "application/zip",
    "text/plain",
    "text/csv",
    "video/mp4",
];

/// Maximum file size for uploads (50MB).
pub const MAX_UPLOAD_SIZE: usize = 50 * 1024 * 1024;

/// Convert validator errors to ApiError::ValidationError.
///
/// This helper function extracts error messages from ValidationErrors
/// and converts them into a format suitable for API responses.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Validate that password confirmation matches the new password.
///
/// Returns an error if the passwords don't match.
pub fn validate_password_match(new_password: &str, confirm_password: &str) -> Result<(), ApiError> {
    if new_password != confirm_password {
        return Err(ApiError::BadRequest(ERR_PASSWORD_MISMATCH.to_string()));
    }
    Ok(())
}

/// Validate that new password is different from current password.
///
/// Returns an error if the passwords are the same.
pub fn validate_password_different(
    current_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    if current_password == new_password {
        return Err(ApiError::BadRequest(ERR_SAME_PASSWORD.to_string()));
    }
    Ok(())
}

/// Validate upload content type against the allow-list.
pub fn validate_upload_content_type(content_type: Option<&str>) -> Result<(), ApiError> {
    match content_type {
        Some(ct) if ALLOWED_UPLOAD_TYPES.iter().any(|t| ct.starts_with(t)) => Ok(()),
        _ => Err(ApiError::BadRequest(ERR_INVALID_FILE_TYPE.to_string())),
    }
}

/// Get file extension from content type.
///
/// Returns the appropriate file extension for the given content type.
pub fn get_extension_from_content_type(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some("image/jpeg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        Some("application/pdf") => "pdf",
        Some("application/zip") => "zip",
        Some("text/plain") => "txt",
        Some("text/csv") => "csv",
        Some("video/mp4") => "mp4",
        _ => "bin",
    }
}

/// Validate upload file size.
///
/// Returns an error if the file size exceeds the maximum allowed size.
pub fn validate_upload_size(size: usize) -> Result<(), ApiError> {
    if size > MAX_UPLOAD_SIZE {
        return Err(ApiError::BadRequest(ERR_FILE_TOO_LARGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_disallowed_content_type() {
        assert!(validate_upload_content_type(Some("application/x-msdownload")).is_err());
        assert!(validate_upload_content_type(None).is_err());
    }

    #[test]
    fn accepts_allowed_content_type() {
        assert!(validate_upload_content_type(Some("application/pdf")).is_ok());
        assert!(validate_upload_content_type(Some("image/png")).is_ok());
    }

    #[test]
    fn unknown_content_type_maps_to_bin_extension() {
        assert_eq!(get_extension_from_content_type(None), "bin");
        assert_eq!(get_extension_from_content_type(Some("text/csv")), "csv");
    }
}
