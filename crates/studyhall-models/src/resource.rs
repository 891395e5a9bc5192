//! The resource contract the client is generic over.
//!
//! Every record the admin surface manipulates — courses, admins, lecture
//! contents, question sets, community posts — goes through the same
//! list/create/update/delete loop. Implementing [`Resource`] wires a domain
//! type into that loop; [`Ordered`] additionally exposes the ordinal used for
//! position swaps.

use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

/// A server-owned record manipulated through list/create/update/delete.
///
/// The client never owns canonical state for a resource: every mutation is
/// followed by a refetch of the authoritative page.
pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection endpoint, e.g. `"courses"`.
    const COLLECTION: &'static str;

    type Id: Copy + Eq + std::fmt::Display + Serialize + Send + Sync + 'static;

    /// List filters, serialized into query parameters. `Default` is the
    /// unfiltered listing.
    type Filter: Serialize + Clone + Default + Send + Sync + 'static;

    /// Creation payload, validated locally before any request is sent.
    type Create: Serialize + Validate + Send + Sync;

    /// Update payload (PATCH semantics: unset fields are left untouched).
    type Update: Serialize + Validate + Send + Sync;

    fn id(&self) -> Self::Id;
}

/// A resource holding an ordinal `position` within its parent scope.
pub trait Ordered: Resource {
    fn position(&self) -> i32;
}
