//! API key repository for all MongoDB operations related to API keys.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_API_KEYS;
use crate::errors::ApiError;
use crate::models::ApiKey;

/// Repository for API-key-related database operations.
pub struct ApiKeyRepository {
    collection: Collection<ApiKey>,
}

impl ApiKeyRepository {
    /// Create a new ApiKeyRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_API_KEYS),
        }
    }

    /// Create database indexes for per-user key lookups.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for api_keys collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build()];

        self.collection.create_indexes(indexes).await?;
        info!("API key indexes created successfully");
        Ok(())
    }

    /// Insert a new API key record.
    pub async fn insert(&self, key: &ApiKey) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(key).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            ApiError::InternalServerError("Inserted API key has no ObjectId".to_string())
        })
    }

    /// Find an API key by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<ApiKey>, ApiError> {
        debug!("Repository: Finding API key by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// List all keys issued to a user, newest first.
    pub async fn find_by_user(&self, user_id: ObjectId) -> Result<Vec<ApiKey>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Count a user's non-revoked keys.
    pub async fn count_active(&self, user_id: ObjectId) -> Result<u64, ApiError> {
        Ok(self
            .collection
            .count_documents(doc! { "user_id": user_id, "revoked": false })
            .await?)
    }

    /// Mark a key as revoked. Keeps the record for auditability.
    pub async fn revoke(&self, id: ObjectId) -> Result<(), ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "revoked": true,
                        "revoked_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?;
        Ok(())
    }
}
