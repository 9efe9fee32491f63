//! Upload service for upload record management and the paginated listing query.

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{ERR_INVALID_UPLOAD_ID, ERR_INVALID_USER_ID, ERR_UPLOAD_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{PageRequest, Upload, UploadResponse};
use crate::repositories::UploadRepository;
use crate::services::file_service::StoredFile;

pub struct UploadService {
    repository: Arc<UploadRepository>,
}

impl UploadService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UploadRepository::new(db)),
        }
    }

    /// Get the underlying repository (for sharing with other services).
    pub fn repository(&self) -> Arc<UploadRepository> {
        Arc::clone(&self.repository)
    }

    /// List one page of a user's uploads.
    ///
    /// Runs the filtered count first so `count` reflects the full matching
    /// set independent of the page bounds, then fetches the requested page.
    pub async fn list_uploads(
        &self,
        user_id: &str,
        page: &PageRequest,
    ) -> Result<(Vec<UploadResponse>, u64), ApiError> {
        let owner = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let mut filter = doc! { "user_id": owner };

        // Creation-date window from the before/after parameters
        let mut window = doc! {};
        if let Some(before) = page.before {
            window.insert(
                "$lt",
                mongodb::bson::DateTime::from_millis(before.timestamp_millis()),
            );
        }
        if let Some(after) = page.after {
            window.insert(
                "$gt",
                mongodb::bson::DateTime::from_millis(after.timestamp_millis()),
            );
        }
        if !window.is_empty() {
            filter.insert("created_at", window);
        }

        debug!("Listing uploads with filter: {:?}", filter);

        let count = self.repository.count(filter.clone()).await?;
        let uploads = self
            .repository
            .find_page(
                filter,
                page.offset,
                page.size as i64,
                sort_document(&page.sort_by, &page.sort_order),
            )
            .await?;

        let responses: Vec<UploadResponse> = uploads.into_iter().map(|u| u.into()).collect();
        Ok((responses, count))
    }

    /// Record a stored file as an upload owned by the given user.
    pub async fn create_upload(
        &self,
        user_id: &str,
        file: StoredFile,
    ) -> Result<Upload, ApiError> {
        let owner = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let now = mongodb::bson::DateTime::now();
        let upload = Upload {
            id: None,
            user_id: owner,
            filename: file.filename,
            original_name: file.original_name,
            content_type: file.content_type,
            size_bytes: file.size_bytes,
            url: file.url,
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&upload).await?;
        info!("Recorded upload {} for user {}", id, user_id);

        Ok(Upload {
            id: Some(id),
            ..upload
        })
    }

    pub async fn get_upload_by_id(&self, id: &str) -> Result<Option<Upload>, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_UPLOAD_ID.to_string()))?;

        self.repository.find_by_id(object_id).await
    }

    /// Delete an upload record, returning the deleted record so the caller
    /// can remove the backing file.
    pub async fn delete_upload(&self, id: &str) -> Result<Upload, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_UPLOAD_ID.to_string()))?;

        let upload = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Delete failed: Upload not found with id: {}", id);
                ApiError::NotFound(ERR_UPLOAD_NOT_FOUND.to_string())
            })?;

        let result = self.repository.delete(object_id).await?;
        if result.deleted_count == 0 {
            return Err(ApiError::NotFound(ERR_UPLOAD_NOT_FOUND.to_string()));
        }

        info!("Deleted upload {}", id);
        Ok(upload)
    }
}

/// Map the pass-through sort parameters onto a MongoDB sort document.
///
/// Unknown `sort_by` values fall back to the creation-date sort; anything
/// other than `asc` sorts descending.
fn sort_document(sort_by: &str, sort_order: &str) -> Document {
    let field = match sort_by.to_lowercase().as_str() {
        "name" => "original_name",
        "size" => "size_bytes",
        _ => "created_at", // "Date" and anything unrecognized
    };

    let direction = if sort_order.eq_ignore_ascii_case("asc") {
        1
    } else {
        -1
    };

    doc! { field: direction }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_created_at_descending() {
        assert_eq!(sort_document("Date", "Desc"), doc! { "created_at": -1 });
    }

    #[test]
    fn unknown_sort_field_falls_back_to_date() {
        assert_eq!(sort_document("Whatever", "Desc"), doc! { "created_at": -1 });
    }

    #[test]
    fn ascending_order_is_case_insensitive() {
        assert_eq!(sort_document("size", "ASC"), doc! { "size_bytes": 1 });
        assert_eq!(sort_document("name", "asc"), doc! { "original_name": 1 });
    }

    #[test]
    fn unknown_sort_order_sorts_descending() {
        assert_eq!(sort_document("Date", "Sideways"), doc! { "created_at": -1 });
    }
}
