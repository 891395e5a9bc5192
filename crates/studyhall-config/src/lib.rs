//! # Studyhall Config
//!
//! Configuration types for the Studyhall admin client.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`api`]: API endpoint, timeout, and token configuration
//! - [`generation`]: display estimates for the quiz generation progress bar
//!
//! # Example
//!
//! ```ignore
//! use studyhall_config::{ApiConfig, GenerationEstimates};
//!
//! // Load all configs from environment
//! let api_config = ApiConfig::from_env();
//! let estimates = GenerationEstimates::from_env();
//! ```

pub mod api;
pub mod generation;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use generation::GenerationEstimates;
