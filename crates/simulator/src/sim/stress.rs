//! Concurrent buffer pool stress driver.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use tracing::info;

use crate::common::SimError;
use crate::pool::BufferPool;
use crate::stats::StressReport;

/// Hammers `pool` from `threads` scoped threads, each making `rounds` acquire attempts.
///
/// Every acquired buffer is stamped with the worker's id, yielded, and released. When
/// this returns all threads have joined, so the pool is back to full capacity.
///
/// # Errors
///
/// Returns the first error other than `PoolExhausted` seen by any worker.
pub fn run_pool_stress(
    pool: &BufferPool,
    threads: usize,
    rounds: usize,
) -> Result<StressReport, SimError> {
    let acquired = AtomicU64::new(0);
    let exhausted = AtomicU64::new(0);

    let outcomes: Vec<Result<(), SimError>> = thread::scope(|scope| {
        let workers: Vec<_> = (0..threads)
            .map(|worker| {
                let acquired = &acquired;
                let exhausted = &exhausted;
                scope.spawn(move || -> Result<(), SimError> {
                    for _ in 0..rounds {
                        match pool.acquire() {
                            Ok(mut buffer) => {
                                if let Some(first) = buffer.first_mut() {
                                    *first = (worker % 256) as u8;
                                }
                                thread::yield_now();
                                pool.release(buffer)?;
                                let _ = acquired.fetch_add(1, Ordering::Relaxed);
                            }
                            Err(SimError::PoolExhausted { .. }) => {
                                let _ = exhausted.fetch_add(1, Ordering::Relaxed);
                            }
                            Err(err) => return Err(err),
                        }
                    }
                    Ok(())
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| {
                worker
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });
    outcomes.into_iter().collect::<Result<(), SimError>>()?;

    let report = StressReport {
        threads,
        rounds,
        acquired: acquired.into_inner(),
        exhausted: exhausted.into_inner(),
        final_available: pool.available(),
        pool: pool.stats(),
    };
    info!(
        acquired = report.acquired,
        exhausted = report.exhausted,
        available = report.final_available,
        "pool stress finished"
    );
    Ok(report)
}
