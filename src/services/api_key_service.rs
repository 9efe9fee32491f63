//! API key service for issuance, listing, and revocation.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;
use uuid::Uuid;

use log::{info, warn};

use crate::constants::{
    ERR_API_KEY_ALREADY_REVOKED, ERR_API_KEY_LIMIT, ERR_API_KEY_NOT_FOUND,
    ERR_INVALID_API_KEY_ID, ERR_INVALID_USER_ID,
};
use crate::errors::ApiError;
use crate::models::{ApiKey, ApiKeyResponse, CreatedApiKeyResponse};
use crate::repositories::ApiKeyRepository;
use crate::services::auth_service::hash_password;

/// Maximum number of non-revoked keys a user may hold.
const MAX_ACTIVE_KEYS: u64 = 10;

/// Length of the display prefix kept alongside the hash ("uk_" + 8 hex chars).
const KEY_PREFIX_LEN: usize = 11;

pub struct ApiKeyService {
    repository: Arc<ApiKeyRepository>,
}

impl ApiKeyService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(ApiKeyRepository::new(db)),
        }
    }

    /// Get the underlying repository (for sharing with other services).
    pub fn repository(&self) -> Arc<ApiKeyRepository> {
        Arc::clone(&self.repository)
    }

    /// Issue a new API key for a user.
    ///
    /// The plaintext secret is returned exactly once; only its bcrypt hash
    /// and a short display prefix are stored.
    pub async fn create_key(
        &self,
        user_id: &str,
        label: Option<String>,
    ) -> Result<CreatedApiKeyResponse, ApiError> {
        let owner = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let active = self.repository.count_active(owner).await?;
        if active >= MAX_ACTIVE_KEYS {
            warn!(
                "Key issuance rejected for user {}: {} active keys",
                user_id, active
            );
            return Err(ApiError::BadRequest(ERR_API_KEY_LIMIT.to_string()));
        }

        let (secret, prefix) = generate_key();
        let key_hash = hash_password(&secret)?;

        let key = ApiKey {
            id: None,
            user_id: owner,
            label: label.unwrap_or_else(|| "default".to_string()),
            prefix,
            key_hash,
            revoked: false,
            created_at: mongodb::bson::DateTime::now(),
            revoked_at: None,
        };

        let id = self.repository.insert(&key).await?;
        info!("Issued API key {} for user {}", key.prefix, user_id);

        Ok(CreatedApiKeyResponse {
            id: id.to_hex(),
            label: key.label,
            key: secret,
            created_at: DateTime::<Utc>::from_timestamp_millis(
                key.created_at.timestamp_millis(),
            )
            .unwrap_or_default(),
        })
    }

    /// List all keys issued to a user, newest first.
    pub async fn list_keys(&self, user_id: &str) -> Result<Vec<ApiKeyResponse>, ApiError> {
        let owner = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let keys = self.repository.find_by_user(owner).await?;
        Ok(keys.into_iter().map(|k| k.into()).collect())
    }

    pub async fn get_key_by_id(&self, id: &str) -> Result<Option<ApiKey>, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_API_KEY_ID.to_string()))?;

        self.repository.find_by_id(object_id).await
    }

    /// Revoke a key. Revoking an already-revoked key reports a client error.
    pub async fn revoke_key(&self, id: &str) -> Result<(), ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_API_KEY_ID.to_string()))?;

        let key = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_API_KEY_NOT_FOUND.to_string()))?;

        if key.revoked {
            return Err(ApiError::BadRequest(ERR_API_KEY_ALREADY_REVOKED.to_string()));
        }

        self.repository.revoke(object_id).await?;
        info!("Revoked API key {}", key.prefix);
        Ok(())
    }
}

/// Generate a fresh key secret and its display prefix.
fn generate_key() -> (String, String) {
    let secret = format!("uk_{}", Uuid::new_v4().simple());
    let prefix = secret[..KEY_PREFIX_LEN].to_string();
    (secret, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_have_expected_shape() {
        let (secret, prefix) = generate_key();
        assert!(secret.starts_with("uk_"));
        assert_eq!(secret.len(), 3 + 32);
        assert_eq!(prefix.len(), KEY_PREFIX_LEN);
        assert!(secret.starts_with(&prefix));
    }

    #[test]
    fn generated_keys_are_unique() {
        let (a, _) = generate_key();
        let (b, _) = generate_key();
        assert_ne!(a, b);
    }
}
