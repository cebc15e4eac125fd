//! Scenario runner: drives a device and a buffer pool through one inference workload.
//!
//! The runner owns both components side by side and is their only link; the device and
//! the pool still never call each other.

use tracing::{debug, info, warn};

use crate::common::SimError;
use crate::config::Config;
use crate::device::DeviceSimulator;
use crate::fixtures;
use crate::pool::BufferPool;
use crate::stats::RunReport;

/// One configured workload against a fresh device and pool.
#[derive(Debug)]
pub struct Scenario {
    device: DeviceSimulator,
    pool: BufferPool,
    hef: Vec<u8>,
    input: Vec<u8>,
    iterations: u64,
}

impl Scenario {
    /// Builds a scenario from `config`, using `fixtures::fake_hef` as the network.
    ///
    /// The configured fault switches are applied to the device immediately.
    pub fn new(config: &Config) -> Self {
        let device = DeviceSimulator::new();
        device.set_faults(config.faults.into());
        let workload = &config.workload;
        Self {
            device,
            pool: BufferPool::new(config.pool.buffer_size, config.pool.count),
            hef: fixtures::fake_hef(),
            input: fixtures::fake_input(
                workload.input_height,
                workload.input_width,
                workload.input_channels,
            ),
            iterations: workload.iterations,
        }
    }

    /// Replaces the network blob passed to `configure`.
    #[must_use]
    pub fn with_hef(mut self, hef: Vec<u8>) -> Self {
        self.hef = hef;
        self
    }

    /// Returns the device driven by this scenario.
    pub const fn device(&self) -> &DeviceSimulator {
        &self.device
    }

    /// Returns the pool driven by this scenario.
    pub const fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Opens and configures the device, then runs every iteration.
    ///
    /// Each iteration acquires a pool buffer, runs one inference, copies the output into
    /// the buffer and releases it. Injected inference failures and pool exhaustion are
    /// counted and the run continues. The device is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns the error of a failed `open` or `configure`, or of any unexpected
    /// device or pool error during the iterations.
    pub fn run(&self) -> Result<RunReport, SimError> {
        let result = self.run_open();
        self.device.close();
        result
    }

    fn run_open(&self) -> Result<RunReport, SimError> {
        self.device.open()?;
        self.device.configure(&self.hef)?;
        info!(iterations = self.iterations, "scenario started");

        let mut inferences = 0;
        let mut failed_inferences = 0;
        let mut pool_exhaustions = 0;
        for iteration in 0..self.iterations {
            let mut buffer = match self.pool.acquire() {
                Ok(buffer) => buffer,
                Err(SimError::PoolExhausted { .. }) => {
                    pool_exhaustions += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };
            match self.device.infer(&self.input) {
                Ok(output) => {
                    let len = output.len().min(buffer.len());
                    buffer[..len].copy_from_slice(&output[..len]);
                    inferences += 1;
                }
                Err(err) if err.is_injected() => {
                    warn!(iteration, "inference failed");
                    failed_inferences += 1;
                }
                Err(err) => {
                    self.pool.release(buffer)?;
                    return Err(err);
                }
            }
            self.pool.release(buffer)?;
        }

        debug!(inferences, failed_inferences, "scenario finished");
        Ok(RunReport {
            properties: self.device.properties(),
            iterations: self.iterations,
            inferences,
            failed_inferences,
            pool_exhaustions,
            pool: self.pool.stats(),
            pool_available: self.pool.available(),
        })
    }
}
