//! Pool-issued buffers.
//!
//! A `PooledBuffer` owns its bytes while a caller holds it and carries the handle that
//! tells the pool which slot to put it back into.

use std::ops::{Deref, DerefMut};

/// Opaque identity of a pool slot: the issuing pool and the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle {
    pub(crate) pool_id: u64,
    pub(crate) index: usize,
}

impl BufferHandle {
    /// Returns the slot index inside the issuing pool.
    pub const fn index(self) -> usize {
        self.index
    }
}

/// A buffer on loan from a `BufferPool`.
///
/// Dereferences to its bytes. Not `Clone`: give it back with `BufferPool::release`.
/// Dropping it instead leaves its slot permanently out of the pool.
#[derive(Debug)]
pub struct PooledBuffer {
    handle: BufferHandle,
    data: Box<[u8]>,
}

impl PooledBuffer {
    pub(crate) const fn new(handle: BufferHandle, data: Box<[u8]>) -> Self {
        Self { handle, data }
    }

    pub(crate) fn into_data(self) -> Box<[u8]> {
        self.data
    }

    /// Returns the handle identifying this buffer's slot.
    pub const fn handle(&self) -> BufferHandle {
        self.handle
    }

    /// Returns the start address of the buffer's memory.
    ///
    /// The address is stable for the pool's lifetime: buffers move between pool and
    /// caller without being reallocated.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }
}

impl Deref for PooledBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
