//! User response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::user::{Role, User};

/// User data returned in API responses (without sensitive fields)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's username
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's role
    pub role: Role,
    /// Whether the user is active
    #[schema(example = true)]
    pub is_active: bool,
    /// Account tags controlling tag-based feature flags
    #[schema(example = json!(["beta"]))]
    pub tags: Vec<String>,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user last logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            username: user.username,
            role: user.role,
            is_active: user.is_active,
            tags: user.tags,
            created_at: DateTime::from_timestamp_millis(user.created_at.timestamp_millis())
                .unwrap_or_default(),
            last_login: user.last_login.map(|dt| {
                DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
            }),
        }
    }
}

/// Response for successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    pub message: String,
    /// JWT token for authentication
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// User information
    pub user: UserResponse,
}
