//! API key request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for issuing a new API key
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateApiKeyRequest {
    /// Human-readable label for the key (max 64 characters)
    #[validate(length(max = 64, message = "Label must be at most 64 characters"))]
    #[schema(example = "ci-pipeline")]
    pub label: Option<String>,
}
