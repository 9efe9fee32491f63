//! Ordered validation for the upload listing query string.
//!
//! Parameters are checked in a fixed order (size, offset, before, after);
//! the first failure wins and the store is never queried. Out-of-range
//! values are rejected, not clamped.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::{
    DEFAULT_PAGE_OFFSET, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, MAX_PAGE_OFFSET,
    MAX_PAGE_SIZE,
};
use crate::errors::ApiError;
use crate::models::{PageRequest, UploadListQuery};

/// Validate raw query parameters into a [`PageRequest`].
pub fn validate_page_request(query: &UploadListQuery) -> Result<PageRequest, ApiError> {
    let size = match query.size.as_deref() {
        Some(raw) => parse_bounded(raw, "size", 1, MAX_PAGE_SIZE)?,
        None => DEFAULT_PAGE_SIZE,
    };

    let offset = match query.offset.as_deref() {
        Some(raw) => parse_bounded(raw, "offset", 0, MAX_PAGE_OFFSET)?,
        None => DEFAULT_PAGE_OFFSET,
    };

    let before = match query.before.as_deref() {
        Some(raw) => Some(parse_timestamp(raw, "before")?),
        None => None,
    };

    let after = match query.after.as_deref() {
        Some(raw) => Some(parse_timestamp(raw, "after")?),
        None => None,
    };

    Ok(PageRequest {
        size,
        offset,
        before,
        after,
        sort_by: query
            .sort_by
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
        sort_order: query
            .sort_order
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_string()),
    })
}

fn parse_bounded(raw: &str, name: &str, min: u64, max: u64) -> Result<u64, ApiError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{} must be an integer", name)))?;

    if value < min as i64 || value > max as i64 {
        return Err(ApiError::BadRequest(format!(
            "{} must be between {} and {}",
            name, min, max
        )));
    }

    Ok(value as u64)
}

/// Parse a timestamp parameter, accepting RFC 3339 date-times and plain
/// `YYYY-MM-DD` dates (interpreted as midnight UTC). The result is the
/// canonical UTC instant handed to the store.
fn parse_timestamp(raw: &str, name: &str) -> Result<DateTime<Utc>, ApiError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(ApiError::BadRequest(format!(
        "{} must be a valid timestamp",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query_with(
        size: Option<&str>,
        offset: Option<&str>,
        before: Option<&str>,
        after: Option<&str>,
    ) -> UploadListQuery {
        UploadListQuery {
            size: size.map(String::from),
            offset: offset.map(String::from),
            before: before.map(String::from),
            after: after.map(String::from),
            sort_by: None,
            sort_order: None,
        }
    }

    fn bad_request_message(err: ApiError) -> String {
        match err {
            ApiError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn absent_parameters_produce_defaults() {
        let page = validate_page_request(&UploadListQuery::default()).unwrap();
        assert_eq!(page.size, 25);
        assert_eq!(page.offset, 0);
        assert!(page.before.is_none());
        assert!(page.after.is_none());
        assert_eq!(page.sort_by, "Date");
        assert_eq!(page.sort_order, "Desc");
    }

    #[test]
    fn size_bounds_are_inclusive() {
        for raw in ["1", "25", "1000"] {
            let page = validate_page_request(&query_with(Some(raw), None, None, None)).unwrap();
            assert_eq!(page.size, raw.parse::<u64>().unwrap());
            assert_eq!(page.offset, 0);
        }
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        for raw in ["abc", "0", "-1", "1001", "2.5"] {
            let err = validate_page_request(&query_with(Some(raw), None, None, None)).unwrap_err();
            assert!(bad_request_message(err).starts_with("size"), "raw={}", raw);
        }
    }

    #[test]
    fn explicit_zero_offset_is_accepted() {
        // The reviewed implementation rejected an explicit offset=0 through a
        // falsy check; that was a bug and 0 is a valid offset here.
        let page = validate_page_request(&query_with(None, Some("0"), None, None)).unwrap();
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn invalid_offsets_are_rejected() {
        for raw in ["abc", "-1", "1001"] {
            let err = validate_page_request(&query_with(None, Some(raw), None, None)).unwrap_err();
            assert!(bad_request_message(err).starts_with("offset"), "raw={}", raw);
        }
    }

    #[test]
    fn offset_upper_bound_is_inclusive() {
        let page = validate_page_request(&query_with(None, Some("1000"), None, None)).unwrap();
        assert_eq!(page.offset, 1000);
    }

    #[test]
    fn timestamps_parse_rfc3339_and_plain_dates() {
        let page = validate_page_request(&query_with(
            None,
            None,
            Some("2024-01-15T10:30:00Z"),
            Some("2024-01-01"),
        ))
        .unwrap();

        assert_eq!(
            page.before,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(
            page.after,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn offset_timezones_are_normalized_to_utc() {
        let page = validate_page_request(&query_with(
            None,
            None,
            Some("2024-01-15T10:30:00+02:00"),
            None,
        ))
        .unwrap();
        assert_eq!(
            page.before,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn malformed_timestamps_are_rejected() {
        let err =
            validate_page_request(&query_with(None, None, Some("not-a-date"), None)).unwrap_err();
        assert!(bad_request_message(err).starts_with("before"));

        let err =
            validate_page_request(&query_with(None, None, None, Some("15/01/2024"))).unwrap_err();
        assert!(bad_request_message(err).starts_with("after"));
    }

    #[test]
    fn first_failure_wins_in_parameter_order() {
        // size is checked before before/after, so its error is the one reported
        let err = validate_page_request(&query_with(
            Some("abc"),
            Some("-5"),
            Some("not-a-date"),
            None,
        ))
        .unwrap_err();
        assert!(bad_request_message(err).starts_with("size"));

        // with size valid, offset is reported before the timestamp failure
        let err =
            validate_page_request(&query_with(Some("10"), Some("-5"), Some("not-a-date"), None))
                .unwrap_err();
        assert!(bad_request_message(err).starts_with("offset"));
    }

    #[test]
    fn sort_parameters_pass_through_unvalidated() {
        let query = UploadListQuery {
            sort_by: Some("Whatever".to_string()),
            sort_order: Some("Sideways".to_string()),
            ..Default::default()
        };
        let page = validate_page_request(&query).unwrap();
        assert_eq!(page.sort_by, "Whatever");
        assert_eq!(page.sort_order, "Sideways");
    }
}
