//! # Device Concurrency Tests
//!
//! One device shared across threads: the lock serializes every operation, so no
//! increment is lost and the lifecycle never reaches an inconsistent state.

use std::sync::Arc;
use std::thread;

use npusim_core::common::SimError;
use npusim_core::device::DeviceState;

use crate::common::configured_device;

#[test]
fn test_parallel_inferences_are_all_counted() {
    let device = Arc::new(configured_device());
    let threads = 8;
    let per_thread = 200;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let device = Arc::clone(&device);
            thread::spawn(move || {
                for _ in 0..per_thread {
                    let _ = device.infer(&[0; 16]).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(device.inference_count(), threads * per_thread);
}

#[test]
fn test_concurrent_close_and_infer_never_tear_state() {
    let device = Arc::new(configured_device());

    let closer = {
        let device = Arc::clone(&device);
        thread::spawn(move || {
            for _ in 0..100 {
                device.close();
                device.open().unwrap();
                device.configure(&[]).unwrap();
            }
        })
    };
    let inferer = {
        let device = Arc::clone(&device);
        thread::spawn(move || {
            let mut ok = 0u64;
            for _ in 0..500 {
                match device.infer(&[]) {
                    Ok(_) => ok += 1,
                    Err(SimError::NotOpen | SimError::NotConfigured) => {}
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
            ok
        })
    };

    closer.join().unwrap();
    let ok = inferer.join().unwrap();
    assert_eq!(device.inference_count(), ok);
    assert_eq!(device.state(), DeviceState::OpenConfigured);
}
