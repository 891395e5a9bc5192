//! # Studyhall Client
//!
//! Typed REST client for the Studyhall platform API.
//!
//! The admin surface manipulates every record through the same loop: fetch a
//! page, mutate, refetch the authoritative page. This crate implements that
//! loop once, generically:
//!
//! - [`http::ApiClient`]: the HTTP boundary (reqwest, bearer auth, timeouts)
//! - [`list::ListController`]: paginated listing with filters, page clamping,
//!   and a stale-response guard
//! - [`mutation::MutationGuard`]: create/update/delete with per-row pending
//!   flags and a post-mutation resync
//! - [`reorder::ReorderCoordinator`]: atomic position swaps for orderable
//!   resources
//! - [`generation::QuizGenerator`]: the long-running generation call wrapped
//!   in a cancellable progress display
//!
//! # Example
//!
//! ```ignore
//! let client = Arc::new(ApiClient::new(&config, Session::with_token(token))?);
//! let courses = ListController::<Course>::new(client.clone(), 10);
//! courses.refresh().await?;
//!
//! let guard = MutationGuard::new(client.clone(), courses.clone());
//! guard.create(CreateCourseDto { /* ... */ }).await?;
//! ```

pub mod generation;
pub mod http;
pub mod list;
pub mod mutation;
pub mod reorder;

// Re-export commonly used types at crate root
pub use generation::{GenerationTask, QuizGenerator};
pub use http::{ApiClient, PositionMove};
pub use list::ListController;
pub use mutation::MutationGuard;
pub use reorder::ReorderCoordinator;
