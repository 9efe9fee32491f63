//! Feature flag response models.

use serde::Serialize;
use utoipa::ToSchema;

/// State of a single feature flag for the requesting user
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct FeatureFlagState {
    /// Feature name
    #[schema(example = "advanced_search")]
    pub name: String,
    /// Whether the feature is enabled for this user
    #[schema(example = true)]
    pub enabled: bool,
}
