//! # Studyhall Core
//!
//! Core types, errors, and utilities for the Studyhall admin client.
//!
//! This crate provides foundational types used throughout the Studyhall
//! workspace:
//!
//! - [`errors`]: Client-side API error type with a small failure taxonomy
//! - [`pagination`]: Page requests, wire envelopes, and page snapshots
//! - [`progress`]: Progress estimation for long-running remote operations
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use studyhall_core::errors::ApiError;
//! use studyhall_core::pagination::{Page, PageRequest};
//! use studyhall_core::progress::ProgressEstimator;
//!
//! // Build a page request
//! let request = PageRequest::default();
//! let page = request.page();
//!
//! // Estimate progress for a 10-question generation run
//! let estimator = ProgressEstimator::new(10, setup, per_question);
//! let state = estimator.snapshot(elapsed);
//! ```

pub mod errors;
pub mod pagination;
pub mod progress;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{ApiError, ErrorKind};
pub use pagination::{Page, PageEnvelope, PageRequest};
pub use progress::{ProgressEstimator, ProgressState, SIMULATED_PROGRESS_CEILING};
