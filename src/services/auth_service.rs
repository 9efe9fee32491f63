//! Authentication service for login, token generation, and password utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::{debug, warn};
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::{ERR_ACCOUNT_DEACTIVATED, ERR_INVALID_CREDENTIALS};
use crate::errors::ApiError;
use crate::models::{Claims, LoginRequest, User};
use crate::repositories::UserRepository;
use crate::utils::mask_email;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<UserRepository>,
}

impl AuthService {
    /// Create a new AuthService with a shared user repository.
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// Authenticate a user and return a JWT token.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), ApiError> {
        let user = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: no account for email {}", mask_email(&req.email));
                ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string())
            })?;

        if !user.is_active {
            warn!("Login rejected for deactivated account {}", mask_email(&user.email));
            return Err(ApiError::Unauthorized(ERR_ACCOUNT_DEACTIVATED.to_string()));
        }

        if !verify_password(&req.password, &user.password_hash)? {
            warn!("Login failed: wrong password for {}", mask_email(&user.email));
            return Err(ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()));
        }

        let user_id = user.id.ok_or_else(|| {
            ApiError::InternalServerError("Stored user has no ObjectId".to_string())
        })?;
        self.repository.update_last_login(user_id).await?;

        let token = generate_token(&user)?;

        Ok((user, token))
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a JWT token for a user.
pub fn generate_token(user: &User) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiration_hours as usize * 3600);

    let user_id = user
        .id
        .ok_or_else(|| ApiError::InternalServerError("Stored user has no ObjectId".to_string()))?;

    let claims = Claims {
        sub: user_id.to_hex(),
        email: user.email.clone(),
        role: user.role.to_string(),
        exp,
        iat: now,
    };

    debug!(
        "Generated token for user {} with role {}",
        mask_email(&user.email),
        user.role
    );

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}
