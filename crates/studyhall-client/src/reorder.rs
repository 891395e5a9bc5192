//! Atomic position swaps for orderable resources.
//!
//! Moving a row up or down swaps its `position` with its neighbour in the
//! currently loaded page. Both assignments go to the server in a single
//! request, which commits them together or not at all, and the list is
//! refetched afterwards so the view shows the server's ordering rather
//! than a locally predicted one.

use std::sync::Arc;

use tracing::instrument;

use studyhall_core::{ApiError, ErrorKind};
use studyhall_models::resource::{Ordered, Resource};

use crate::http::{ApiClient, PositionMove};
use crate::list::ListController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

pub struct ReorderCoordinator<R: Ordered> {
    client: Arc<ApiClient>,
    list: ListController<R>,
}

impl<R: Ordered> Clone for ReorderCoordinator<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            list: self.list.clone(),
        }
    }
}

impl<R: Ordered> ReorderCoordinator<R> {
    pub fn new(client: Arc<ApiClient>, list: ListController<R>) -> Self {
        Self { client, list }
    }

    pub async fn move_up(&self, id: R::Id) -> Result<bool, ApiError> {
        self.shift(id, MoveDirection::Up).await
    }

    pub async fn move_down(&self, id: R::Id) -> Result<bool, ApiError> {
        self.shift(id, MoveDirection::Down).await
    }

    /// Swaps `id` with its neighbour in the given direction. Returns `false`
    /// without touching the server when the row is already at the edge.
    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id, direction = ?direction))]
    pub async fn shift(&self, id: R::Id, direction: MoveDirection) -> Result<bool, ApiError> {
        let mut items = self.list.snapshot().items;
        items.sort_by_key(|item| item.position());

        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| {
                ApiError::new(
                    ErrorKind::Validation,
                    anyhow::anyhow!("{} {id} is not in the current page", R::COLLECTION),
                )
            })?;

        let neighbour = match direction {
            MoveDirection::Up if index > 0 => &items[index - 1],
            MoveDirection::Down if index + 1 < items.len() => &items[index + 1],
            _ => return Ok(false),
        };

        self.swap(items[index].id(), neighbour.id()).await?;
        Ok(true)
    }

    /// Exchanges the positions of two rows in the current page, atomically.
    #[instrument(skip(self), fields(collection = R::COLLECTION, a = %a, b = %b))]
    pub async fn swap(&self, a: R::Id, b: R::Id) -> Result<(), ApiError> {
        if a == b {
            return Err(ApiError::new(
                ErrorKind::Validation,
                anyhow::anyhow!("cannot swap {} {a} with itself", R::COLLECTION),
            ));
        }

        let items = self.list.snapshot().items;
        let position_of = |id: R::Id| {
            items
                .iter()
                .find(|item| item.id() == id)
                .map(Ordered::position)
                .ok_or_else(|| {
                    ApiError::new(
                        ErrorKind::Validation,
                        anyhow::anyhow!("{} {id} is not in the current page", R::COLLECTION),
                    )
                })
        };
        let position_a = position_of(a)?;
        let position_b = position_of(b)?;

        let moves = [
            PositionMove {
                id: a,
                position: position_b,
            },
            PositionMove {
                id: b,
                position: position_a,
            },
        ];

        self.client.reorder::<R>(moves).await?;
        self.list.refresh().await?;
        Ok(())
    }
}
