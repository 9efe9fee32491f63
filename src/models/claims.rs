//! JWT Claims model.

use serde::{Deserialize, Serialize};

use crate::constants::ROLE_ADMIN;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String, // user role (admin/user)
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

impl Claims {
    /// Check if the claims belong to an admin user
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Check if the claims belong to the specified user ID
    pub fn is_user(&self, user_id: &str) -> bool {
        self.sub == user_id
    }

    /// Check if the user can access a resource (either admin or owner)
    pub fn can_access(&self, user_id: &str) -> bool {
        self.is_admin() || self.is_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "user@example.com".to_string(),
            role: role.to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn admin_can_access_any_user() {
        let c = claims("abc", "admin");
        assert!(c.can_access("abc"));
        assert!(c.can_access("other"));
    }

    #[test]
    fn regular_user_can_only_access_self() {
        let c = claims("abc", "user");
        assert!(c.can_access("abc"));
        assert!(!c.can_access("other"));
    }
}
