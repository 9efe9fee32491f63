//! User service for registration, password management, and tag administration.

use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::CONFIG;
use crate::constants::{
    ERR_EMAIL_EXISTS, ERR_INVALID_USER_ID, ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND,
    ERR_WRONG_PASSWORD, ROLE_ADMIN,
};
use crate::errors::ApiError;
use crate::models::{ChangePasswordRequest, RegisterRequest, Role, User};
use crate::repositories::UserRepository;
use crate::services::auth_service::{hash_password, verify_password};
use crate::utils::{mask_email, mask_username};
use crate::validators::{normalize_tags, validate_password_different, validate_password_match};

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Create a new UserService with a shared repository (for dependency injection).
    #[allow(dead_code)]
    pub fn with_repository(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// Get the underlying repository (for sharing with other services).
    pub fn repository(&self) -> Arc<UserRepository> {
        Arc::clone(&self.repository)
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<User, ApiError> {
        // Check if user already exists
        if self.repository.find_by_email(&req.email).await?.is_some() {
            warn!(
                "Registration rejected: email {} already exists",
                mask_email(&req.email)
            );
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        if self
            .repository
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            warn!(
                "Registration rejected: username {} already exists",
                mask_username(&req.username)
            );
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }

        let password_hash = hash_password(&req.password)?;

        let now = mongodb::bson::DateTime::now();
        let user = User {
            id: None,
            email: req.email.to_lowercase(),
            username: req.username,
            password_hash,
            role: Role::User, // Default role for new registrations
            is_active: true,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            last_login: None,
        };

        let id = self.repository.insert(&user).await?;
        info!("Registered new user {}", mask_username(&user.username));

        Ok(User {
            id: Some(id),
            ..user
        })
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", id);
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        self.repository.find_by_id(object_id).await
    }

    /// Change user password
    pub async fn change_password(
        &self,
        user_id: &str,
        req: ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        info!("Changing password for user_id: {}", user_id);

        // Validate new password matches confirmation
        validate_password_match(&req.new_password, &req.confirm_password).inspect_err(|_| {
            warn!(
                "Password change failed: Passwords do not match for user: {}",
                user_id
            );
        })?;

        // Prevent using the same password
        validate_password_different(&req.current_password, &req.new_password).inspect_err(|_| {
            warn!(
                "Password change failed: New password same as current for user: {}",
                user_id
            );
        })?;

        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let user = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    "Password change failed: User not found with id: {}",
                    user_id
                );
                ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
            })?;

        // Verify current password
        if !verify_password(&req.current_password, &user.password_hash)? {
            warn!(
                "Password change failed: Invalid current password for user: {}",
                user_id
            );
            return Err(ApiError::Unauthorized(ERR_WRONG_PASSWORD.to_string()));
        }

        let new_password_hash = hash_password(&req.new_password)?;

        self.repository
            .update_password(object_id, &new_password_hash)
            .await?;

        info!("Successfully changed password for user: {}", user_id);
        Ok(())
    }

    /// Replace a user's account tags (admin only operation).
    ///
    /// Tags are normalized before storage; the updated user is returned.
    pub async fn update_tags(&self, user_id: &str, tags: &[String]) -> Result<User, ApiError> {
        info!("Updating tags for user_id: {}", user_id);

        let normalized = normalize_tags(tags)?;

        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let existing_user = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Tag update failed: User not found with id: {}", user_id);
                ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
            })?;

        if existing_user.tags == normalized {
            debug!("No tag change needed for user {}", user_id);
            return Ok(existing_user);
        }

        self.repository.update_tags(object_id, &normalized).await?;

        info!(
            "Successfully updated tags for user {} ({} tags)",
            user_id,
            normalized.len()
        );

        Ok(User {
            tags: normalized,
            ..existing_user
        })
    }

    /// Seed the database with an initial admin user if no admin exists.
    /// This is called on application startup when SEED_ADMIN is true.
    pub async fn seed_admin(&self) -> Result<(), ApiError> {
        if !CONFIG.seed_admin {
            info!("Admin seeding is disabled (SEED_ADMIN=false)");
            return Ok(());
        }

        let admin_exists = self.repository.find_by_role(ROLE_ADMIN).await?.is_some();

        if admin_exists {
            info!("Admin user already exists, skipping seed");
            return Ok(());
        }

        if self
            .repository
            .find_by_email(&CONFIG.admin_email)
            .await?
            .is_some()
        {
            warn!(
                "User with email {} already exists but is not an admin",
                mask_email(&CONFIG.admin_email)
            );
            return Ok(());
        }

        if self
            .repository
            .find_by_username(&CONFIG.admin_username)
            .await?
            .is_some()
        {
            warn!(
                "User with username {} already exists but is not an admin",
                mask_username(&CONFIG.admin_username)
            );
            return Ok(());
        }

        let password_hash = hash_password(&CONFIG.admin_password)?;
        let now = mongodb::bson::DateTime::now();

        let admin_user = User {
            id: None,
            email: CONFIG.admin_email.to_lowercase(),
            username: CONFIG.admin_username.clone(),
            password_hash,
            role: Role::Admin,
            is_active: true,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            last_login: None,
        };

        self.repository.insert(&admin_user).await?;

        info!(
            "Admin user created successfully: {}",
            mask_username(&CONFIG.admin_username)
        );
        info!("Please change the default admin password after first login!");

        Ok(())
    }
}
