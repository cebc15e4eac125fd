//! Neural accelerator device and DMA buffer pool simulator.
//!
//! This crate lets driver-level code be exercised without physical hardware. It provides:
//! 1. **Device:** An accelerator model with an open → configure → infer lifecycle and
//!    deterministic, runtime-toggleable failure injection.
//! 2. **Pool:** A fixed-capacity DMA buffer pool with LIFO reuse and handle-based release.
//! 3. **Fixtures:** Synthetic HEF blobs and input buffers to feed the device.
//! 4. **Simulation:** Configuration, a scenario runner, a pool stress driver, and statistics.
//!
//! The device and the pool are independent: neither calls the other. Each guards its own
//! state with a single lock, so one instance can be shared across threads behind an `Arc`.

/// Common types and constants (errors, operation tags, output geometry).
pub mod common;
/// Scenario configuration (defaults, hierarchical config structures).
pub mod config;
/// Accelerator device model (lifecycle, properties, failure injection).
pub mod device;
/// Synthetic HEF and input buffer generators.
pub mod fixtures;
/// DMA buffer pool (acquire/release with opaque handles).
pub mod pool;
/// Scenario runner, pool stress driver, and HEF loader.
pub mod sim;
/// Run statistics and reports.
pub mod stats;

/// Error type returned by every device and pool operation.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Accelerator device model; construct with `DeviceSimulator::new`.
pub use crate::device::DeviceSimulator;
/// Fixed-capacity buffer pool; construct with `BufferPool::new`.
pub use crate::pool::BufferPool;
