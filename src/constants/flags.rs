//! Feature flag definitions.
//!
//! Each feature is enabled for a user when their account carries the
//! corresponding tag. Admins manage tags through the user tag endpoint.

/// (feature name, account tag that enables it)
pub const FLAG_DEFINITIONS: &[(&str, &str)] = &[
    ("advanced_search", "beta"),
    ("bulk_download", "beta"),
    ("extended_storage", "premium"),
    ("priority_processing", "premium"),
    ("internal_tools", "staff"),
];

/// Maximum number of tags an account can carry.
pub const MAX_TAGS_PER_USER: usize = 16;

/// Maximum length of a single tag.
pub const MAX_TAG_LENGTH: usize = 32;
