//! Upload listing request models.
//!
//! The listing endpoint validates its query string by hand rather than
//! deserializing into typed fields: parse failures must produce this API's
//! own 400 messages, and the parameters must be checked in a fixed order.
//! The raw parameters therefore arrive as strings and are converted into a
//! [`PageRequest`] by `validators::pagination`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::constants::{DEFAULT_PAGE_OFFSET, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER};

/// Raw query parameters for `GET /api/uploads`, exactly as received.
#[derive(Debug, Default, Deserialize)]
pub struct UploadListQuery {
    pub size: Option<String>,
    pub offset: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

/// Validated pagination parameters handed to the upload store.
///
/// Constructed per request by `validators::pagination::validate_page_request`
/// and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub size: u64,
    pub offset: u64,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    /// Sort field, passed through to the store without enumeration checks
    pub sort_by: String,
    /// Sort direction, passed through to the store without enumeration checks
    pub sort_order: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            offset: DEFAULT_PAGE_OFFSET,
            before: None,
            after: None,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: DEFAULT_SORT_ORDER.to_string(),
        }
    }
}
