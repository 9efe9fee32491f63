//! API key response models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::api_key::ApiKey;

/// API key metadata returned in listings (never includes the secret)
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiKeyResponse {
    /// Key's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Human-readable label
    #[schema(example = "ci-pipeline")]
    pub label: String,
    /// First characters of the key, for identification
    #[schema(example = "uk_4fa3b2c1")]
    pub prefix: String,
    /// Whether the key has been revoked
    #[schema(example = false)]
    pub revoked: bool,
    /// When the key was issued
    pub created_at: DateTime<Utc>,
    /// When the key was revoked, if it has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<ApiKey> for ApiKeyResponse {
    fn from(key: ApiKey) -> Self {
        Self {
            id: key.id.map(|id| id.to_hex()).unwrap_or_default(),
            label: key.label,
            prefix: key.prefix,
            revoked: key.revoked,
            created_at: DateTime::from_timestamp_millis(key.created_at.timestamp_millis())
                .unwrap_or_default(),
            revoked_at: key.revoked_at.map(|dt| {
                DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
            }),
        }
    }
}

/// Response for a newly issued API key.
///
/// The `key` field carries the plaintext secret and is returned exactly once.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedApiKeyResponse {
    /// Key's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Human-readable label
    #[schema(example = "ci-pipeline")]
    pub label: String,
    /// The full API key secret; shown only in this response
    #[schema(example = "uk_4fa3b2c1d0e94f6a8b7c5d4e3f2a1b0c")]
    pub key: String,
    /// When the key was issued
    pub created_at: DateTime<Utc>,
}
