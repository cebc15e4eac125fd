//! Simulation drivers and HEF loading.
//!
//! Provides the scenario runner that drives a device and a pool together, a concurrent
//! pool stress driver, and a loader for HEF blobs stored on disk.

/// HEF file loading.
pub mod loader;
/// Device and pool workload runner.
pub mod scenario;
/// Concurrent pool stress driver.
pub mod stress;

pub use scenario::Scenario;
pub use stress::run_pool_stress;
