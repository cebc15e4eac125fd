//! Configuration system for scenario runs.
//!
//! This module defines the structures used to parameterize a scenario. It provides:
//! 1. **Defaults:** Baseline pool geometry, workload size, and fault switches.
//! 2. **Structures:** Hierarchical config for general, pool, workload, and fault settings.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! The device itself takes no configuration; only the scenario around it does.

use serde::Deserialize;

use crate::common::constants::OUTPUT_BYTES;
use crate::common::ConfigError;
use crate::device::FaultSwitches;

/// Default configuration constants.
mod defaults {
    use crate::common::constants::OUTPUT_BYTES;

    /// Pool buffer size: exactly one inference output.
    pub const BUFFER_SIZE: usize = OUTPUT_BYTES;

    /// Number of buffers in the pool.
    pub const BUFFER_COUNT: usize = 4;

    /// Inference iterations per run.
    pub const ITERATIONS: u64 = 10;

    /// Input frame height in pixels.
    pub const INPUT_HEIGHT: usize = 224;

    /// Input frame width in pixels.
    pub const INPUT_WIDTH: usize = 224;

    /// Input frame channels (RGB).
    pub const INPUT_CHANNELS: usize = 3;
}

/// Root scenario configuration.
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// # Example
///
/// ```
/// use npusim_core::config::Config;
///
/// let json = r#"{
///     "pool": { "count": 2 },
///     "workload": { "iterations": 5 },
///     "faults": { "fail_on_infer": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.pool.count, 2);
/// assert_eq!(config.pool.buffer_size, 4000);
/// assert_eq!(config.workload.iterations, 5);
/// assert!(config.faults.fail_on_infer);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings
    pub general: GeneralConfig,
    /// Buffer pool geometry
    pub pool: PoolConfig,
    /// Inference workload
    pub workload: WorkloadConfig,
    /// Failure-injection switches applied before the run
    pub faults: FaultConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Parse` if the text is not valid JSON for this schema.
    /// * `ConfigError::BufferTooSmall` if a pool buffer cannot hold one inference output.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// `ConfigError::BufferTooSmall` if a pool buffer cannot hold one inference output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool.buffer_size < OUTPUT_BYTES {
            return Err(ConfigError::BufferTooSmall {
                buffer_size: self.pool.buffer_size,
                required: OUTPUT_BYTES,
            });
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Print a plain-text summary after the run in addition to the JSON report
    #[serde(default)]
    pub print_summary: bool,
}

/// Buffer pool geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Size of each buffer in bytes
    #[serde(default = "PoolConfig::default_buffer_size")]
    pub buffer_size: usize,

    /// Number of buffers
    #[serde(default = "PoolConfig::default_count")]
    pub count: usize,
}

impl PoolConfig {
    /// Returns the default buffer size (one inference output).
    const fn default_buffer_size() -> usize {
        defaults::BUFFER_SIZE
    }

    /// Returns the default buffer count.
    const fn default_count() -> usize {
        defaults::BUFFER_COUNT
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            buffer_size: defaults::BUFFER_SIZE,
            count: defaults::BUFFER_COUNT,
        }
    }
}

/// Inference workload.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadConfig {
    /// Number of inference iterations
    #[serde(default = "WorkloadConfig::default_iterations")]
    pub iterations: u64,

    /// Input frame height
    #[serde(default = "WorkloadConfig::default_height")]
    pub input_height: usize,

    /// Input frame width
    #[serde(default = "WorkloadConfig::default_width")]
    pub input_width: usize,

    /// Input frame channels
    #[serde(default = "WorkloadConfig::default_channels")]
    pub input_channels: usize,
}

impl WorkloadConfig {
    /// Returns the default iteration count.
    const fn default_iterations() -> u64 {
        defaults::ITERATIONS
    }

    /// Returns the default input height.
    const fn default_height() -> usize {
        defaults::INPUT_HEIGHT
    }

    /// Returns the default input width.
    const fn default_width() -> usize {
        defaults::INPUT_WIDTH
    }

    /// Returns the default input channel count.
    const fn default_channels() -> usize {
        defaults::INPUT_CHANNELS
    }

    /// Size in bytes of one input frame.
    pub const fn input_len(&self) -> usize {
        self.input_height * self.input_width * self.input_channels
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::ITERATIONS,
            input_height: defaults::INPUT_HEIGHT,
            input_width: defaults::INPUT_WIDTH,
            input_channels: defaults::INPUT_CHANNELS,
        }
    }
}

/// Failure-injection switches applied to the device before a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct FaultConfig {
    /// Force `open` to fail
    #[serde(default)]
    pub fail_on_open: bool,

    /// Force `configure` to fail
    #[serde(default)]
    pub fail_on_configure: bool,

    /// Force `infer` to fail
    #[serde(default)]
    pub fail_on_infer: bool,
}

impl From<FaultConfig> for FaultSwitches {
    fn from(faults: FaultConfig) -> Self {
        Self {
            open: faults.fail_on_open,
            configure: faults.fail_on_configure,
            infer: faults.fail_on_infer,
        }
    }
}
