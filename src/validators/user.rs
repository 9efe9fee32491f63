//! User-related custom validators.

use validator::ValidationError;

use crate::constants::{
    ERR_INVALID_TAG_FORMAT, ERR_INVALID_USERNAME_FORMAT, ERR_TOO_MANY_TAGS, ERR_WEAK_PASSWORD,
    MAX_TAGS_PER_USER, MAX_TAG_LENGTH,
};
use crate::errors::ApiError;

/// Custom validator for username format.
/// Allows letters, numbers, underscores, and hyphens only.
pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_username_format");
        error.message = Some(ERR_INVALID_USERNAME_FORMAT.into());
        Err(error)
    }
}

/// Custom validator for password strength.
/// Requires at least 8 characters with uppercase, lowercase, digit, and special character.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        let mut error = ValidationError::new("weak_password");
        error.message = Some(ERR_WEAK_PASSWORD.into());
        Err(error)
    }
}

/// Normalize and validate an account tag set.
///
/// Tags are trimmed, lowercased, and deduplicated while preserving first
/// occurrence order. Empty entries are dropped. Fails on oversized sets or
/// tags with characters outside `[a-z0-9_-]`.
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>, ApiError> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());

    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if tag.len() > MAX_TAG_LENGTH
            || !tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ApiError::BadRequest(ERR_INVALID_TAG_FORMAT.to_string()));
        }
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }

    if normalized.len() > MAX_TAGS_PER_USER {
        return Err(ApiError::BadRequest(ERR_TOO_MANY_TAGS.to_string()));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_format_accepts_word_characters() {
        assert!(validate_username_format("john_doe-42").is_ok());
        assert!(validate_username_format("john doe").is_err());
        assert!(validate_username_format("john@doe").is_err());
    }

    #[test]
    fn password_strength_requires_all_classes() {
        assert!(validate_password_strength("SecurePass123!").is_ok());
        assert!(validate_password_strength("alllowercase1!").is_err());
        assert!(validate_password_strength("SHORT1!").is_err());
        assert!(validate_password_strength("NoDigitsHere!").is_err());
    }

    #[test]
    fn tags_are_lowercased_trimmed_and_deduplicated() {
        let tags = vec![
            " Beta ".to_string(),
            "beta".to_string(),
            "premium".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            normalize_tags(&tags).unwrap(),
            vec!["beta".to_string(), "premium".to_string()]
        );
    }

    #[test]
    fn tags_with_invalid_characters_are_rejected() {
        assert!(normalize_tags(&["has space".to_string()]).is_err());
        assert!(normalize_tags(&["ok-tag_1".to_string()]).is_ok());
    }

    #[test]
    fn oversized_tag_sets_are_rejected() {
        let tags: Vec<String> = (0..17).map(|i| format!("tag-{}", i)).collect();
        assert!(normalize_tags(&tags).is_err());
    }
}
