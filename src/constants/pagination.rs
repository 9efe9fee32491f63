//! Pagination constants for the upload listing endpoint.

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Maximum allowed items per page to prevent excessive data retrieval.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Default offset when not specified in the request.
pub const DEFAULT_PAGE_OFFSET: u64 = 0;

/// Maximum allowed offset.
pub const MAX_PAGE_OFFSET: u64 = 1000;

/// Default sort field name accepted by the upload store.
pub const DEFAULT_SORT_BY: &str = "Date";

/// Default sort direction accepted by the upload store.
pub const DEFAULT_SORT_ORDER: &str = "Desc";
