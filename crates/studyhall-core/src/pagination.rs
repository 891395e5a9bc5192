//! Pagination types for the resource list client.
//!
//! Three shapes cooperate here:
//!
//! - [`PageRequest`]: what the client asks for (`page`, `page_size`)
//! - [`PageEnvelope`]: what the server answers with (`items`, `total`,
//!   `total_pages`)
//! - [`Page`]: the snapshot the client holds, combining both
//!
//! # Invariants
//!
//! - `page_size` is clamped to [1, 100], defaulting to 10
//! - a client-held page number is always clamped to `[1, max(total_pages, 1)]`
//! - `total` and `total_pages` are authoritative from the server; the client
//!   never recomputes them from a partial view
//!
//! # Example
//!
//! ```ignore
//! let request = PageRequest::new(3, 10);
//! let envelope: PageEnvelope<Course> = client.fetch(&request).await?;
//! let page = Page::from_envelope(envelope, request.page(), request.page_size());
//! assert!(page.items.len() as i64 <= page.page_size);
//! ```

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_lenient_i64;

/// Query parameters for a paginated list request.
///
/// # Limits
///
/// - `page` is clamped to a minimum of 1
/// - `page_size` is clamped to the range [1, 100]
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed, default: 1)
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    pub page_size: Option<i64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Some(1),
            page_size: Some(10),
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Returns the effective page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the effective page size, clamped to [1, 100].
    ///
    /// Defaults to 10 if not specified.
    #[must_use]
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(10).clamp(1, 100)
    }

    /// Clamps the requested page against a known page count.
    ///
    /// An empty collection (`total_pages == 0`) clamps to page 1.
    #[must_use]
    pub fn clamped_page(&self, total_pages: i64) -> i64 {
        self.page().clamp(1, total_pages.max(1))
    }
}

/// The wire shape a paginated list endpoint returns.
///
/// ```json
/// {
///   "items": [...],
///   "total": 25,
///   "total_pages": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages (authoritative).
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub total: i64,
    /// Total number of pages at the requested page size (authoritative).
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub total_pages: i64,
}

/// One bounded slice of a resource collection, as displayed by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// An empty page shown before the first fetch completes.
    #[must_use]
    pub fn empty(page_size: i64) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total: 0,
            total_pages: 0,
        }
    }

    /// Combines a server envelope with the request that produced it.
    #[must_use]
    pub fn from_envelope(envelope: PageEnvelope<T>, page: i64, page_size: i64) -> Self {
        Self {
            items: envelope.items,
            page,
            page_size,
            total: envelope.total,
            total_pages: envelope.total_pages,
        }
    }

    /// Whether pages exist after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page count for a given total, as the server is expected to compute it.
    #[must_use]
    pub fn total_pages_for(total: i64, page_size: i64) -> i64 {
        let page_size = page_size.max(1);
        if total <= 0 {
            0
        } else {
            (total + page_size - 1) / page_size
        }
    }
}
