//! Pagination metadata mined from response headers.

use reqwest::header::HeaderMap;

/// Offset pagination state reported by the service on list responses.
///
/// Every field is optional: the service stops reporting `x-total` and
/// `x-total-pages` once a collection grows past its counting threshold, and
/// `x-next-page`/`x-prev-page` are empty at the ends of the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
}

impl PageInfo {
    /// Parse the `x-*` pagination headers; `None` when the response carries
    /// none of them (non-list endpoints).
    pub(crate) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let info = Self {
            page: header_u64(headers, "x-page"),
            per_page: header_u64(headers, "x-per-page"),
            next_page: header_u64(headers, "x-next-page"),
            prev_page: header_u64(headers, "x-prev-page"),
            total: header_u64(headers, "x-total"),
            total_pages: header_u64(headers, "x-total-pages"),
        };
        if info == Self::default() { None } else { Some(info) }
    }

    /// Whether the service reported a further page.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
