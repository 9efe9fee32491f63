//! Pagination link models for the upload listing endpoint.
//!
//! The listing response advertises navigation through RFC-5988-style link
//! values carried in the `Next_link` / `Prev_link` response headers, next
//! to `Count`, `Size`, and `Offset` metadata headers.

/// Response header carrying the total number of matching rows.
pub const HEADER_COUNT: &str = "Count";
/// Response header echoing the effective page size.
pub const HEADER_SIZE: &str = "Size";
/// Response header echoing the effective offset.
pub const HEADER_OFFSET: &str = "Offset";
/// Response header carrying the link to the next page, when one exists.
pub const HEADER_NEXT_LINK: &str = "Next_link";
/// Response header carrying the link to the previous page, when one exists.
pub const HEADER_PREV_LINK: &str = "Prev_link";

/// A single pagination link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub offset: u64,
    pub size: u64,
}

impl PageLink {
    /// Render as an RFC-5988 link value, e.g. `</api/uploads?size=25&offset=25>; rel="next"`.
    pub fn render(&self, path: &str, rel: &str) -> String {
        format!(
            "<{}?size={}&offset={}>; rel=\"{}\"",
            path, self.size, self.offset, rel
        )
    }
}

/// Navigation links for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<PageLink>,
    pub prev: Option<PageLink>,
}

impl PageLinks {
    /// Derive navigation links from the page position and the store's result.
    ///
    /// A `next` link exists iff rows remain beyond the returned page
    /// (`offset + returned < count`). A `prev` link exists iff the page did
    /// not start at the beginning; its offset saturates at 0 when
    /// `offset < size`.
    pub fn build(offset: u64, size: u64, returned: usize, count: u64) -> Self {
        let next = if offset + returned as u64 < count {
            Some(PageLink {
                offset: offset + size,
                size,
            })
        } else {
            None
        };

        let prev = if offset != 0 {
            Some(PageLink {
                offset: offset.saturating_sub(size),
                size,
            })
        } else {
            None
        };

        Self { next, prev }
    }

    /// Rendered `Next_link` header value, if a next page exists.
    pub fn next_header(&self, path: &str) -> Option<String> {
        self.next.as_ref().map(|link| link.render(path, "next"))
    }

    /// Rendered `Prev_link` header value, if a previous page exists.
    pub fn prev_header(&self, path: &str) -> Option<String> {
        self.prev.as_ref().map(|link| link.render(path, "prev"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_next_link_when_page_reaches_count() {
        let links = PageLinks::build(0, 25, 30, 30);
        assert!(links.next.is_none());

        let links = PageLinks::build(25, 25, 5, 30);
        assert!(links.next.is_none());
    }

    #[test]
    fn next_link_advances_by_size() {
        let links = PageLinks::build(0, 25, 25, 30);
        assert_eq!(links.next, Some(PageLink { offset: 25, size: 25 }));
    }

    #[test]
    fn no_prev_link_at_zero_offset() {
        let links = PageLinks::build(0, 25, 25, 100);
        assert!(links.prev.is_none());
    }

    #[test]
    fn prev_link_steps_back_by_size() {
        let links = PageLinks::build(50, 25, 25, 100);
        assert_eq!(links.prev, Some(PageLink { offset: 25, size: 25 }));
    }

    #[test]
    fn prev_offset_saturates_at_zero() {
        // offset 10 with size 25 would go negative; clamp to the first page
        let links = PageLinks::build(10, 25, 25, 100);
        assert_eq!(links.prev, Some(PageLink { offset: 0, size: 25 }));
    }

    #[test]
    fn prev_link_uses_prev_relation() {
        let links = PageLinks::build(25, 25, 25, 100);
        assert_eq!(
            links.prev_header("/api/uploads").as_deref(),
            Some("</api/uploads?size=25&offset=0>; rel=\"prev\"")
        );
    }

    #[test]
    fn default_first_page_of_thirty_rows() {
        // 30 matching rows, default size 25 and offset 0
        let links = PageLinks::build(0, 25, 25, 30);
        assert_eq!(
            links.next_header("/api/uploads").as_deref(),
            Some("</api/uploads?size=25&offset=25>; rel=\"next\"")
        );
        assert!(links.prev_header("/api/uploads").is_none());
    }

    #[test]
    fn empty_result_has_no_links() {
        let links = PageLinks::build(0, 25, 0, 0);
        assert!(links.next.is_none());
        assert!(links.prev.is_none());
    }
}
