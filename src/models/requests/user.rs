//! User management request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for replacing a user's account tags (admin only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTagsRequest {
    /// Full replacement tag set; normalized (lowercased, trimmed, deduplicated) before storage
    #[schema(example = json!(["beta", "premium"]))]
    pub tags: Vec<String>,
}
