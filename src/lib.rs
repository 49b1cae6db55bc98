//! adrotor - Weighted advertisement distribution and rotation engine
//!
//! adrotor decides which sponsor creative occupies a limited set of on-page
//! slots, honoring per-vendor weight configuration, and proves its selection
//! algorithm statistically with a built-in distribution simulator.
//!
//! # Architecture
//!
//! - **Weighted pools**: vendor weights encoded by entry replication
//! - **Responsive pairing**: top-banner creatives carry per-viewport art
//! - **Rotation**: a scoped, cancellable fixed-interval display timer
//! - **Simulation**: expected-vs-actual convergence reports per vendor
//! - **Catalog**: file-backed ad source with position and date filtering

pub mod catalog;
pub mod config;
pub mod link;
pub mod model;
pub mod output;
pub mod pool;
pub mod rotation;
pub mod select;
pub mod sim;

// Re-export commonly used types
pub use config::Config;
pub use model::Position;

/// Result type used throughout adrotor
pub type Result<T> = anyhow::Result<T>;
