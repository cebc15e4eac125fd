//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the device, the pool and the
//! scenario runner. It includes:
//! 1. **Constants:** Device descriptor values and output tensor geometry.
//! 2. **Error Handling:** The `SimError` returned by every fallible operation.
//! 3. **Operations:** Tags for the device operations that support failure injection.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for device, pool, configuration and loading failures.
pub mod error;

pub use constants::{OUTPUT_BYTES, OUTPUT_ELEMENTS};
pub use error::{ConfigError, LoadError, Operation, SimError};
