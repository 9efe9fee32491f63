//! Upload repository for all MongoDB operations related to upload records.
//!
//! This is the upload store behind the listing endpoint: it runs the
//! filtered, sorted, paginated find and the independent count that the
//! pagination contract requires.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_UPLOADS;
use crate::errors::ApiError;
use crate::models::Upload;

/// Repository for upload-related database operations.
pub struct UploadRepository {
    collection: Collection<Upload>,
}

impl UploadRepository {
    /// Create a new UploadRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_UPLOADS),
        }
    }

    /// Create database indexes for the listing query.
    ///
    /// Creates a compound index on `user_id` and `created_at`, matching the
    /// owner-scoped, date-sorted shape of the listing endpoint.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for uploads collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build()];

        self.collection.create_indexes(indexes).await?;
        info!("Upload indexes created successfully");
        Ok(())
    }

    /// Insert a new upload record.
    pub async fn insert(&self, upload: &Upload) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(upload).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            ApiError::InternalServerError("Inserted upload has no ObjectId".to_string())
        })
    }

    /// Find an upload by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Upload>, ApiError> {
        debug!("Repository: Finding upload by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find one page of uploads matching a filter.
    pub async fn find_page(
        &self,
        filter: Document,
        skip: u64,
        limit: i64,
        sort: Document,
    ) -> Result<Vec<Upload>, ApiError> {
        debug!("Repository: Finding uploads with filter: {:?}", filter);
        let cursor = self
            .collection
            .find(filter)
            .skip(skip)
            .limit(limit)
            .sort(sort)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Count upload records matching a filter, independent of any page bounds.
    pub async fn count(&self, filter: Document) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(filter).await?)
    }

    /// Delete an upload by ObjectId.
    pub async fn delete(&self, id: ObjectId) -> Result<mongodb::results::DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
