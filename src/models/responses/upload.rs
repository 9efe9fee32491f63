//! Upload response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::upload::Upload;

/// Upload record returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UploadResponse {
    /// Upload's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Name of the file on disk
    #[schema(example = "507f1f77bcf86cd799439011_b2f1c3.pdf")]
    pub filename: String,
    /// Original client-supplied file name
    #[schema(example = "report.pdf")]
    pub original_name: String,
    /// MIME type of the file
    #[schema(example = "application/pdf")]
    pub content_type: String,
    /// File size in bytes
    #[schema(example = 48213)]
    pub size_bytes: i64,
    /// Public URL path to the stored file
    #[schema(example = "/uploads/507f1f77bcf86cd799439011_b2f1c3.pdf")]
    pub url: String,
    /// When the upload was created
    pub created_at: DateTime<Utc>,
}

impl From<Upload> for UploadResponse {
    fn from(upload: Upload) -> Self {
        Self {
            id: upload.id.map(|id| id.to_hex()).unwrap_or_default(),
            filename: upload.filename,
            original_name: upload.original_name,
            content_type: upload.content_type,
            size_bytes: upload.size_bytes,
            url: upload.url,
            created_at: DateTime::from_timestamp_millis(upload.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
