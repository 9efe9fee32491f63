//! Feature flag service resolving tag-based flags for user accounts.

use std::sync::Arc;

use log::debug;

use crate::constants::{ERR_USER_NOT_FOUND, FLAG_DEFINITIONS};
use crate::errors::ApiError;
use crate::models::FeatureFlagState;
use crate::repositories::UserRepository;

pub struct FlagService {
    repository: Arc<UserRepository>,
}

impl FlagService {
    /// Create a new FlagService with a shared user repository.
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// Resolve the full flag set for a user from their account tags.
    pub async fn flags_for_user(&self, user_id: &str) -> Result<Vec<FeatureFlagState>, ApiError> {
        let object_id = mongodb::bson::oid::ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(crate::constants::ERR_INVALID_USER_ID.to_string()))?;

        let user = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

        debug!(
            "Resolving feature flags for user {} with tags {:?}",
            user_id, user.tags
        );

        Ok(resolve_flags(&user.tags))
    }
}

/// Resolve the flag table against an account tag set.
///
/// Every known feature appears in the result; a feature is enabled when the
/// account carries its gating tag.
pub fn resolve_flags(tags: &[String]) -> Vec<FeatureFlagState> {
    FLAG_DEFINITIONS
        .iter()
        .map(|(feature, tag)| FeatureFlagState {
            name: feature.to_string(),
            enabled: tags.iter().any(|t| t == tag),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_tag_enables_beta_features_only() {
        let flags = resolve_flags(&["beta".to_string()]);

        let by_name = |name: &str| {
            flags
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.enabled)
                .unwrap()
        };

        assert!(by_name("advanced_search"));
        assert!(by_name("bulk_download"));
        assert!(!by_name("extended_storage"));
        assert!(!by_name("priority_processing"));
        assert!(!by_name("internal_tools"));
    }

    #[test]
    fn no_tags_disables_everything() {
        let flags = resolve_flags(&[]);
        assert!(flags.iter().all(|f| !f.enabled));
        assert_eq!(flags.len(), FLAG_DEFINITIONS.len());
    }

    #[test]
    fn unknown_tags_enable_nothing() {
        let flags = resolve_flags(&["vip".to_string()]);
        assert!(flags.iter().all(|f| !f.enabled));
    }

    #[test]
    fn multiple_tags_combine() {
        let flags = resolve_flags(&["beta".to_string(), "premium".to_string()]);
        let enabled: Vec<&str> = flags
            .iter()
            .filter(|f| f.enabled)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            enabled,
            vec![
                "advanced_search",
                "bulk_download",
                "extended_storage",
                "priority_processing"
            ]
        );
    }
}
