//! Simulation statistics collection and reporting.
//!
//! This module tracks accounting for the simulator. It provides:
//! 1. **Pool counters:** Acquires, releases, exhaustions, rejected releases, high-water mark.
//! 2. **Run report:** The outcome of one scenario run (inferences, failures, pool usage).
//! 3. **Stress report:** The outcome of a concurrent pool stress run.
//!
//! Reports serialize to JSON for the CLI and print a plain-text summary to stderr.

use serde::Serialize;

use crate::device::DeviceProperties;

/// Accounting counters kept by a `BufferPool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Successful `acquire` calls.
    pub acquires: u64,
    /// Successful `release` calls.
    pub releases: u64,
    /// `acquire` calls rejected because the pool was empty.
    pub exhaustions: u64,
    /// `release` calls rejected because the buffer was not recognized.
    pub rejected_releases: u64,
    /// Largest number of buffers held by callers at the same time.
    pub high_water_mark: usize,
}

/// Outcome of one scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Descriptor of the device the scenario ran against.
    pub properties: DeviceProperties,
    /// Number of iterations attempted.
    pub iterations: u64,
    /// Iterations whose inference succeeded.
    pub inferences: u64,
    /// Iterations whose inference returned an injected failure.
    pub failed_inferences: u64,
    /// Iterations skipped because no pool buffer was available.
    pub pool_exhaustions: u64,
    /// Pool counters at the end of the run.
    pub pool: PoolStats,
    /// Buffers resident in the pool at the end of the run.
    pub pool_available: usize,
}

impl RunReport {
    /// Fraction of iterations that produced an inference result, in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.inferences as f64 / self.iterations as f64
    }

    /// Prints a plain-text summary to stderr, leaving stdout to the JSON report.
    pub fn print(&self) {
        eprintln!("==========================================================");
        eprintln!("RUN SUMMARY");
        eprintln!("  device.board           {:?}", self.properties.board_type);
        eprintln!("  run.iterations         {}", self.iterations);
        eprintln!("  run.inferences         {}", self.inferences);
        eprintln!("  run.failed             {}", self.failed_inferences);
        eprintln!("  run.success_rate       {:.2}%", self.success_rate() * 100.0);
        eprintln!("----------------------------------------------------------");
        eprintln!("BUFFER POOL");
        eprintln!("  pool.acquires          {}", self.pool.acquires);
        eprintln!("  pool.releases          {}", self.pool.releases);
        eprintln!("  pool.exhaustions       {}", self.pool.exhaustions);
        eprintln!("  pool.high_water_mark   {}", self.pool.high_water_mark);
        eprintln!("  pool.available         {}", self.pool_available);
        eprintln!("==========================================================");
    }
}

/// Outcome of a concurrent pool stress run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StressReport {
    /// Worker threads spawned.
    pub threads: usize,
    /// Acquire attempts made by each thread.
    pub rounds: usize,
    /// Acquire attempts that returned a buffer.
    pub acquired: u64,
    /// Acquire attempts that found the pool empty.
    pub exhausted: u64,
    /// Buffers resident in the pool after all threads joined.
    pub final_available: usize,
    /// Pool counters after all threads joined.
    pub pool: PoolStats,
}
