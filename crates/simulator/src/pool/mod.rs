//! Simulated DMA buffer pool.
//!
//! A pool owns a fixed number of equal-size byte buffers, allocated once at construction.
//! It provides:
//! 1. **Acquire:** Moves the most recently released buffer out to the caller (LIFO reuse).
//! 2. **Release:** Moves a buffer back into its slot, located by the buffer's opaque handle.
//! 3. **Accounting:** Availability and acquire/release/exhaustion statistics.
//!
//! Buffers are never copied or resized. A `PooledBuffer` cannot be cloned and can only be
//! created by its pool, so a buffer is released at most once.

/// Opaque buffer handles and the owned buffer type handed to callers.
pub mod buffer;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use crate::common::SimError;
use crate::stats::PoolStats;

pub use buffer::{BufferHandle, PooledBuffer};

/// Source of per-pool identifiers stamped into every handle.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

/// Mutable part of the pool, guarded by the pool lock.
#[derive(Debug)]
struct PoolInner {
    /// `Some` while the buffer is resident in the pool, `None` while a caller holds it.
    slots: Vec<Option<Box<[u8]>>>,
    /// Indices of resident slots; the top of the stack is handed out first.
    available: Vec<usize>,
    stats: PoolStats,
}

/// A release the pool refused. The buffer comes back untouched so it can still be
/// released into the pool that issued it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ReleaseError {
    /// Why the buffer was refused.
    pub error: SimError,
    /// The refused buffer.
    pub buffer: PooledBuffer,
}

impl From<ReleaseError> for SimError {
    fn from(rejected: ReleaseError) -> Self {
        rejected.error
    }
}

/// Fixed-capacity pool of pre-allocated, zero-filled buffers.
///
/// Every method takes `&self`; share a pool across threads with `Arc`.
#[derive(Debug)]
pub struct BufferPool {
    id: u64,
    buffer_size: usize,
    capacity: usize,
    inner: Mutex<PoolInner>,
}

impl BufferPool {
    /// Creates a pool of `count` zero-filled buffers of `buffer_size` bytes each.
    ///
    /// The first `acquire` returns the buffer with the highest index.
    pub fn new(buffer_size: usize, count: usize) -> Self {
        let slots = (0..count)
            .map(|_| Some(vec![0u8; buffer_size].into_boxed_slice()))
            .collect();
        let available = (0..count).collect();
        let id = NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed);
        debug!(pool = id, buffer_size, count, "buffer pool created");
        Self {
            id,
            buffer_size,
            capacity: count,
            inner: Mutex::new(PoolInner {
                slots,
                available,
                stats: PoolStats::default(),
            }),
        }
    }

    /// Acquires the pool lock, recovering it if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, PoolInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a buffer out of the pool.
    ///
    /// # Errors
    ///
    /// `SimError::PoolExhausted` if every buffer is currently held by a caller. The call
    /// never waits for a release.
    pub fn acquire(&self) -> Result<PooledBuffer, SimError> {
        let mut inner = self.lock();
        let Some(index) = inner.available.pop() else {
            inner.stats.exhaustions += 1;
            debug!(pool = self.id, capacity = self.capacity, "buffer pool exhausted");
            return Err(SimError::PoolExhausted {
                capacity: self.capacity,
            });
        };
        let Some(data) = inner.slots[index].take() else {
            // A stacked index always refers to a resident slot.
            unreachable!("available index {index} has no resident buffer");
        };
        let in_use = self.capacity - inner.available.len();
        inner.stats.acquires += 1;
        inner.stats.high_water_mark = inner.stats.high_water_mark.max(in_use);
        debug!(pool = self.id, index, available = inner.available.len(), "buffer acquired");
        Ok(PooledBuffer::new(
            BufferHandle {
                pool_id: self.id,
                index,
            },
            data,
        ))
    }

    /// Returns a buffer to the pool, making its slot the next one handed out.
    ///
    /// # Errors
    ///
    /// `ReleaseError` carrying `SimError::UnknownBuffer` if the buffer was issued by a
    /// different pool, or its slot is already resident. The pool is left unchanged and
    /// the buffer is handed back inside the error.
    pub fn release(&self, buffer: PooledBuffer) -> Result<(), ReleaseError> {
        let handle = buffer.handle();
        let mut inner = self.lock();
        let resident = inner
            .slots
            .get(handle.index)
            .is_none_or(Option::is_some);
        if handle.pool_id != self.id || resident {
            inner.stats.rejected_releases += 1;
            warn!(
                pool = self.id,
                owner = handle.pool_id,
                index = handle.index,
                "rejected release of unknown buffer"
            );
            return Err(ReleaseError {
                error: SimError::UnknownBuffer {
                    index: handle.index,
                },
                buffer,
            });
        }
        inner.slots[handle.index] = Some(buffer.into_data());
        inner.available.push(handle.index);
        inner.stats.releases += 1;
        debug!(
            pool = self.id,
            index = handle.index,
            available = inner.available.len(),
            "buffer released"
        );
        Ok(())
    }

    /// Returns the number of buffers currently resident in the pool.
    pub fn available(&self) -> usize {
        self.lock().available.len()
    }

    /// Returns the number of buffers currently held by callers.
    pub fn in_use(&self) -> usize {
        self.capacity - self.available()
    }

    /// Returns the total number of buffers owned by the pool.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the length in bytes of every buffer.
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Returns a snapshot of the pool's accounting counters.
    pub fn stats(&self) -> PoolStats {
        self.lock().stats
    }
}
