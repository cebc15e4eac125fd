//! # Buffer Provenance Tests
//!
//! Release identifies slots by handle, never by address, and rejects buffers the pool
//! did not issue.

use npusim_core::common::SimError;
use npusim_core::BufferPool;

use crate::common::{drain, refill};

#[test]
fn test_release_into_foreign_pool_is_rejected() {
    let home = BufferPool::new(64, 2);
    let other = BufferPool::new(64, 2);

    let stray = home.acquire().unwrap();
    let index = stray.handle().index();
    let held = drain(&other);

    let rejected = other.release(stray).unwrap_err();
    assert_eq!(rejected.error, SimError::UnknownBuffer { index });
    assert_eq!(other.available(), 0);
    assert_eq!(other.stats().rejected_releases, 1);
    assert_eq!(home.available(), 1);

    refill(&other, held);
    assert_eq!(other.available(), 2);
}

#[test]
fn test_rejected_buffer_can_still_be_released_home() {
    let home = BufferPool::new(64, 2);
    let other = BufferPool::new(64, 2);

    let stray = home.acquire().unwrap();
    let rejected = other.release(stray).unwrap_err();
    assert_eq!(other.available(), other.capacity());

    home.release(rejected.buffer).unwrap();
    assert_eq!(home.available(), home.capacity());
    assert_eq!(home.in_use(), 0);
    assert_eq!(home.stats().releases, 1);
    assert_eq!(home.stats().rejected_releases, 0);
}

#[test]
fn test_foreign_release_does_not_fill_a_free_slot() {
    let home = BufferPool::new(64, 1);
    let other = BufferPool::new(64, 1);

    let stray = home.acquire().unwrap();
    let held = other.acquire().unwrap();
    let rejected = other.release(stray).unwrap_err();
    assert_eq!(other.available(), 0);
    other.release(held).unwrap();
    assert_eq!(other.available(), 1);
    home.release(rejected.buffer).unwrap();
    assert_eq!(home.available(), 1);
}

#[test]
fn test_foreign_buffer_with_matching_slot_and_resident_slot_is_rejected() {
    let home = BufferPool::new(8, 1);
    let other = BufferPool::new(8, 1);

    let stray = home.acquire().unwrap();
    assert_eq!(other.available(), 1);
    let rejected = other.release(stray).unwrap_err();
    assert!(matches!(rejected.error, SimError::UnknownBuffer { index: 0 }));
    assert_eq!(other.available(), 1);
    home.release(rejected.buffer).unwrap();
    assert_eq!(home.available(), 1);
}

#[test]
fn test_handles_differ_across_pools() {
    let a = BufferPool::new(8, 1);
    let b = BufferPool::new(8, 1);
    let from_a = a.acquire().unwrap();
    let from_b = b.acquire().unwrap();
    assert_eq!(from_a.handle().index(), from_b.handle().index());
    assert_ne!(from_a.handle(), from_b.handle());
    a.release(from_a).unwrap();
    b.release(from_b).unwrap();
}
