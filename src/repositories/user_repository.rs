//! User repository for all MongoDB operations related to users.
//!
//! This repository encapsulates all database access logic for the User collection,
//! providing a clean interface for the service layer.

use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// This method should be called once during application startup. It creates:
    /// - Unique index on `email`
    /// - Unique index on `username`
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("User indexes created successfully");
        Ok(())
    }

    /// Insert a new user into the database.
    pub async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(user).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError("Inserted user has no ObjectId".to_string()))
    }

    /// Find a user by their ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a user by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    /// Find a user by role.
    pub async fn find_by_role(&self, role: &str) -> Result<Option<User>, ApiError> {
        Ok(self.collection.find_one(doc! { "role": role }).await?)
    }

    /// Update last login timestamp for a user.
    pub async fn update_last_login(&self, id: ObjectId) -> Result<(), ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_login": mongodb::bson::DateTime::now() } },
            )
            .await?;
        Ok(())
    }

    /// Update user password.
    pub async fn update_password(&self, id: ObjectId, password_hash: &str) -> Result<(), ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "password_hash": password_hash,
                        "updated_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?;
        Ok(())
    }

    /// Replace a user's account tag set.
    pub async fn update_tags(&self, id: ObjectId, tags: &[String]) -> Result<(), ApiError> {
        debug!("Repository: Updating tags for user: {}", id);
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "tags": tags.to_vec(),
                        "updated_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?;
        Ok(())
    }
}
