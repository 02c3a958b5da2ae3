//! The response envelope.

use reqwest::header::HeaderMap;

use crate::types::pagination::PageInfo;

/// Transport-level response metadata, independent of the decoded payload.
///
/// Returned on every completed round trip: inside [`ApiResponse`] on
/// success, and embedded in the status/decode error variants so callers can
/// inspect the raw status and headers even when the call failed.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Pagination state, when the endpoint reports it.
    pub page: Option<PageInfo>,
}

impl ResponseMeta {
    pub(crate) fn from_parts(status: u16, headers: HeaderMap) -> Self {
        let page = PageInfo::from_headers(&headers);
        Self {
            status,
            headers,
            page,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A decoded payload together with its response envelope.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The decoded response body.
    pub body: T,
    /// Status, headers and pagination metadata of the response.
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    /// Discard the envelope and keep the payload.
    pub fn into_body(self) -> T {
        self.body
    }
}
