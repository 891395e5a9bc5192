//! Mutate-then-resync, with per-row pending flags.
//!
//! [`MutationGuard`] pairs an [`ApiClient`] with the [`ListController`]
//! showing the affected collection. Every create, update, or delete follows
//! the same sequence: validate locally, send the request, then re-fetch the
//! current page so the list reflects what the server actually stored. No
//! mutation result is merged into the list by hand.
//!
//! While a row's mutation is in flight its id is marked pending, so callers
//! can disable the corresponding action and block double submission. The
//! flag is held by an RAII slot and clears on every exit path, success or
//! failure.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::{instrument, warn};

use studyhall_core::{ApiError, ErrorKind};
use studyhall_models::resource::Resource;

use crate::http::ApiClient;
use crate::list::ListController;

pub struct MutationGuard<R: Resource> {
    client: Arc<ApiClient>,
    list: ListController<R>,
    pending: Arc<Mutex<HashSet<String>>>,
}

impl<R: Resource> Clone for MutationGuard<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            list: self.list.clone(),
            pending: self.pending.clone(),
        }
    }
}

/// Clears the pending mark when dropped.
struct PendingSlot {
    pending: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl PendingSlot {
    /// Claims the slot for `key`. Returns `None` if a mutation for the same
    /// row is already in flight.
    fn claim(pending: &Arc<Mutex<HashSet<String>>>, key: String) -> Option<Self> {
        let mut set = pending.lock().expect("pending set poisoned");
        if !set.insert(key.clone()) {
            return None;
        }
        Some(Self {
            pending: pending.clone(),
            key,
        })
    }
}

impl Drop for PendingSlot {
    fn drop(&mut self) {
        self.pending
            .lock()
            .expect("pending set poisoned")
            .remove(&self.key);
    }
}

impl<R: Resource> MutationGuard<R> {
    pub fn new(client: Arc<ApiClient>, list: ListController<R>) -> Self {
        Self {
            client,
            list,
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Whether a mutation for this row is currently in flight.
    #[must_use]
    pub fn is_pending(&self, id: R::Id) -> bool {
        self.pending
            .lock()
            .expect("pending set poisoned")
            .contains(&id.to_string())
    }

    #[instrument(skip(self, payload), fields(collection = R::COLLECTION))]
    pub async fn create(&self, payload: &R::Create) -> Result<R, ApiError> {
        let created = self.client.create::<R>(payload).await?;
        self.resync().await;
        Ok(created)
    }

    #[instrument(skip(self, payload), fields(collection = R::COLLECTION, id = %id))]
    pub async fn update(&self, id: R::Id, payload: &R::Update) -> Result<R, ApiError> {
        let _slot = self.claim(id)?;
        let updated = self.client.update::<R>(id, payload).await?;
        self.resync().await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id))]
    pub async fn delete(&self, id: R::Id) -> Result<(), ApiError> {
        let _slot = self.claim(id)?;
        self.client.delete::<R>(id).await?;
        self.resync().await;
        Ok(())
    }

    fn claim(&self, id: R::Id) -> Result<PendingSlot, ApiError> {
        PendingSlot::claim(&self.pending, id.to_string()).ok_or_else(|| {
            ApiError::new(
                ErrorKind::Validation,
                anyhow::anyhow!("a change to {} {id} is already in progress", R::COLLECTION),
            )
        })
    }

    /// Brings the list back in line with the server after a mutation. The
    /// mutation itself already succeeded, so a refetch failure is logged
    /// rather than surfaced; the next navigation will heal the view.
    async fn resync(&self) {
        if let Err(err) = self.list.refresh().await {
            warn!(collection = R::COLLECTION, error = %err, "post-mutation refetch failed");
        }
    }
}
