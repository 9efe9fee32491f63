//! Role name constants.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
