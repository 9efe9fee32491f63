//! Upload document model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Upload record stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Upload {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Owning user
    pub user_id: ObjectId,
    /// Name of the file on disk
    pub filename: String,
    /// Original client-supplied file name
    pub original_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    /// Public URL path to the stored file
    pub url: String,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}
