//! API key document model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// API key record stored in MongoDB.
///
/// The key secret is never persisted; only its bcrypt hash and a short
/// display prefix are kept. Revocation is a soft delete so issued keys
/// remain auditable.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiKey {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Owning user
    pub user_id: ObjectId,
    /// Human-readable label chosen at issuance
    pub label: String,
    /// First characters of the key, for display in listings
    pub prefix: String,
    pub key_hash: String,
    pub revoked: bool,
    pub created_at: mongodb::bson::DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<mongodb::bson::DateTime>,
}
