//! Paginated listing with a stale-response guard.
//!
//! [`ListController`] owns the canonical view of one resource collection:
//! the current page of items, the active filters, and the loading flag.
//! Every navigation or filter change triggers a fresh fetch; out-of-order
//! responses are discarded by sequence number so the newest request always
//! wins regardless of network timing.

use std::sync::{Arc, Mutex};

use tracing::{debug, instrument, warn};

use studyhall_core::ApiError;
use studyhall_core::pagination::PageRequest;
use studyhall_models::resource::Resource;

use crate::http::ApiClient;

/// Snapshot of the controller's state at one point in time.
#[derive(Debug, Clone)]
pub struct ListSnapshot<R: Resource> {
    pub items: Vec<R>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub is_loading: bool,
}

impl<R: Resource> ListSnapshot<R> {
    fn empty(page_size: i64) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total: 0,
            total_pages: 0,
            is_loading: false,
        }
    }
}

struct ListState<R: Resource> {
    snapshot: ListSnapshot<R>,
    filters: R::Filter,
    /// Sequence of the most recent fetch started.
    issued: u64,
    /// Sequence of the most recent fetch whose result was accepted.
    applied: u64,
}

/// Shared controller for one paginated collection.
///
/// Cloning is cheap; clones share the same state, so a CLI command and a
/// background resync both observe the same page.
pub struct ListController<R: Resource> {
    client: Arc<ApiClient>,
    state: Arc<Mutex<ListState<R>>>,
    page_size: i64,
}

impl<R: Resource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: self.state.clone(),
            page_size: self.page_size,
        }
    }
}

impl<R: Resource> ListController<R> {
    pub fn new(client: Arc<ApiClient>, page_size: i64) -> Self {
        let page_size = PageRequest {
            page: None,
            page_size: Some(page_size),
        }
        .page_size();

        Self {
            client,
            state: Arc::new(Mutex::new(ListState {
                snapshot: ListSnapshot::empty(page_size),
                filters: R::Filter::default(),
                issued: 0,
                applied: 0,
            })),
            page_size,
        }
    }

    /// The current state. Never blocks on the network; between a navigation
    /// call and its completion this returns the previous page with
    /// `is_loading` set.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<R> {
        self.state.lock().expect("list state poisoned").snapshot.clone()
    }

    #[must_use]
    pub fn filters(&self) -> R::Filter {
        self.state.lock().expect("list state poisoned").filters.clone()
    }

    /// Re-fetches the current page with the current filters.
    #[instrument(skip(self), fields(collection = R::COLLECTION))]
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let page = self.state.lock().expect("list state poisoned").snapshot.page;
        self.fetch(page).await
    }

    /// Jumps to a specific page. The target is clamped to the valid range
    /// once the response reports how many pages exist.
    #[instrument(skip(self), fields(collection = R::COLLECTION, page))]
    pub async fn set_page(&self, page: i64) -> Result<(), ApiError> {
        self.fetch(page.max(1)).await
    }

    pub async fn next_page(&self) -> Result<(), ApiError> {
        let snapshot = self.snapshot();
        if snapshot.page >= snapshot.total_pages {
            return Ok(());
        }
        self.fetch(snapshot.page + 1).await
    }

    pub async fn prev_page(&self) -> Result<(), ApiError> {
        let page = self.snapshot().page;
        if page <= 1 {
            return Ok(());
        }
        self.fetch(page - 1).await
    }

    /// Replaces the filters and resets to the first page.
    #[instrument(skip(self, filters), fields(collection = R::COLLECTION))]
    pub async fn set_filters(&self, filters: R::Filter) -> Result<(), ApiError> {
        self.state.lock().expect("list state poisoned").filters = filters;
        self.fetch(1).await
    }

    async fn fetch(&self, page: i64) -> Result<(), ApiError> {
        let (seq, filters) = {
            let mut state = self.state.lock().expect("list state poisoned");
            state.issued += 1;
            state.snapshot.is_loading = true;
            (state.issued, state.filters.clone())
        };

        let request = PageRequest {
            page: Some(page),
            page_size: Some(self.page_size),
        };

        let result = self.client.list::<R>(&request, &filters).await;

        // The guard must not be in scope across an await, or the returned
        // future stops being `Send`; a retry target escapes the block instead.
        let retry = {
            let mut state = self.state.lock().expect("list state poisoned");
            if seq <= state.applied {
                // A newer fetch already landed; this response is stale.
                debug!(seq, applied = state.applied, "discarding stale page response");
                return Ok(());
            }

            match result {
                Ok(fetched) => {
                    state.applied = seq;

                    // The requested page may have fallen off the end (deletes,
                    // filter changes). Clamp and retry once against the fresh
                    // page count.
                    let clamped = request.clamped_page(fetched.total_pages);
                    if clamped != page {
                        Some(clamped)
                    } else {
                        let still_loading = state.issued > seq;
                        state.snapshot = ListSnapshot {
                            items: fetched.items,
                            page: fetched.page,
                            page_size: fetched.page_size,
                            total: fetched.total,
                            total_pages: fetched.total_pages,
                            is_loading: still_loading,
                        };
                        None
                    }
                }
                Err(err) => {
                    // Keep the last good page on screen; just drop the flag.
                    state.applied = seq;
                    let still_loading = state.issued > seq;
                    state.snapshot.is_loading = still_loading;
                    warn!(collection = R::COLLECTION, error = %err, "page fetch failed");
                    return Err(err);
                }
            }
        };

        match retry {
            Some(clamped) => Box::pin(self.fetch(clamped)).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_models::Course;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = ListSnapshot::<Course>::empty(10);
        assert_eq!(snapshot.page, 1);
        assert_eq!(snapshot.total_pages, 0);
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn test_page_size_is_clamped_at_construction() {
        let snapshot = ListSnapshot::<Course>::empty(
            PageRequest {
                page: None,
                page_size: Some(1000),
            }
            .page_size(),
        );
        assert_eq!(snapshot.page_size, 100);
    }
}
