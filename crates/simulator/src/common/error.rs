//! Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Simulation Errors:** Lifecycle violations, injected failures, and pool accounting errors.
//! 2. **Configuration Errors:** Failures while parsing a JSON scenario configuration.
//! 3. **Load Errors:** Failures while reading a HEF blob from disk.
//!
//! Every error is returned synchronously; nothing is retried internally.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Device operations that can be forced to fail through failure injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `DeviceSimulator::open`.
    Open,
    /// `DeviceSimulator::configure`.
    Configure,
    /// `DeviceSimulator::infer`.
    Infer,
}

impl Operation {
    /// Returns the lowercase operation name used in logs and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Configure => "configure",
            Self::Infer => "infer",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by device and buffer pool operations.
///
/// Lifecycle violations (`NotOpen`, `NotConfigured`) are kept apart from
/// `InjectedFailure` so tests can tell a forced error path from a misuse of the device.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// An operation that needs an open device was attempted while it was closed.
    #[error("device not open")]
    NotOpen,

    /// Inference was attempted on an open device with no network configured.
    #[error("device not configured")]
    NotConfigured,

    /// The failure-injection switch for the operation was set.
    #[error("injected {0} failure")]
    InjectedFailure(Operation),

    /// Every buffer of the pool is currently held by a caller.
    #[error("buffer pool exhausted ({capacity} buffers in use)")]
    PoolExhausted {
        /// Total number of buffers owned by the pool.
        capacity: usize,
    },

    /// A released buffer was not issued by this pool, or its slot is already resident.
    #[error("buffer {index} is not an outstanding buffer of this pool")]
    UnknownBuffer {
        /// Slot index carried by the rejected buffer's handle.
        index: usize,
    },
}

impl SimError {
    /// Returns `true` if the error came from a failure-injection switch.
    pub const fn is_injected(&self) -> bool {
        matches!(self, Self::InjectedFailure(_))
    }
}

/// Errors raised while loading a scenario configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON or does not match the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The pool section asks for buffers too small to hold one inference output.
    #[error("pool buffer size {buffer_size} is smaller than the {required}-byte inference output")]
    BufferTooSmall {
        /// Configured buffer size in bytes.
        buffer_size: usize,
        /// Bytes needed to store one inference output.
        required: usize,
    },
}

/// Errors raised while reading a HEF blob from disk.
#[derive(Debug, Error)]
#[error("could not read '{}': {source}", .path.display())]
pub struct LoadError {
    /// Path that failed to load.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}
