//! Simulated neural accelerator device.
//!
//! This module models a single accelerator as seen by a driver. It provides:
//! 1. **Lifecycle:** `Closed` → `Open` → `OpenConfigured`, with `close` returning to `Closed`
//!    from any state.
//! 2. **Inference:** A fixed-shape zeroed output and a counter of successful inferences.
//! 3. **Failure Injection:** Independent switches that force `open`, `configure` or `infer`
//!    to fail on their next call.
//!
//! All mutable state lives behind one `Mutex`; every operation holds it for its whole
//! duration, so a single device can be driven from several test threads at once.

/// Static descriptor (board type, DMA engines, firmware state).
pub mod properties;
/// Lifecycle state and failure-injection switches.
pub mod state;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace, warn};

use crate::common::constants::OUTPUT_BYTES;
use crate::common::{Operation, SimError};

pub use properties::{BoardType, DeviceProperties};
pub use state::{DeviceState, FaultSwitches};

/// Mutable part of the device, guarded by the device lock.
#[derive(Debug, Default)]
struct DeviceInner {
    state: DeviceState,
    faults: FaultSwitches,
    inference_count: u64,
}

/// Simulated accelerator with an open → configure → infer lifecycle.
///
/// Every method takes `&self`; share an instance across threads with `Arc`.
#[derive(Debug)]
pub struct DeviceSimulator {
    properties: DeviceProperties,
    inner: Mutex<DeviceInner>,
}

impl Default for DeviceSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSimulator {
    /// Creates a closed device with the fixed Hailo-8 descriptor and every fault switch off.
    pub fn new() -> Self {
        Self {
            properties: DeviceProperties::default(),
            inner: Mutex::new(DeviceInner::default()),
        }
    }

    /// Acquires the device lock.
    ///
    /// Every critical section leaves `DeviceInner` consistent, so a lock poisoned by a
    /// panicking test thread is still safe to use.
    fn lock(&self) -> MutexGuard<'_, DeviceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens the device.
    ///
    /// Opening an already open device keeps it open and keeps any configured network.
    ///
    /// # Errors
    ///
    /// `SimError::InjectedFailure(Operation::Open)` if the open switch is set; the state
    /// is left unchanged.
    pub fn open(&self) -> Result<(), SimError> {
        let mut inner = self.lock();
        if inner.faults.open {
            warn!(state = ?inner.state, "injected open failure");
            return Err(SimError::InjectedFailure(Operation::Open));
        }
        if inner.state == DeviceState::Closed {
            inner.state = DeviceState::Open;
        }
        debug!(state = ?inner.state, "device opened");
        Ok(())
    }

    /// Configures the device with a compiled network.
    ///
    /// The HEF payload is accepted as is; nothing is parsed or validated.
    ///
    /// # Errors
    ///
    /// * `SimError::NotOpen` if the device is closed.
    /// * `SimError::InjectedFailure(Operation::Configure)` if the configure switch is set;
    ///   the device keeps its current state.
    pub fn configure(&self, hef: &[u8]) -> Result<(), SimError> {
        let mut inner = self.lock();
        if !inner.state.is_open() {
            return Err(SimError::NotOpen);
        }
        if inner.faults.configure {
            warn!(state = ?inner.state, "injected configure failure");
            return Err(SimError::InjectedFailure(Operation::Configure));
        }
        inner.state = DeviceState::OpenConfigured;
        debug!(hef_len = hef.len(), "device configured");
        Ok(())
    }

    /// Runs one inference and returns the output tensor bytes.
    ///
    /// The output is `OUTPUT_BYTES` long and zero-filled regardless of `input`.
    ///
    /// # Errors
    ///
    /// * `SimError::NotOpen` if the device is closed.
    /// * `SimError::NotConfigured` if the device is open without a network.
    /// * `SimError::InjectedFailure(Operation::Infer)` if the infer switch is set; the
    ///   inference counter is not incremented.
    pub fn infer(&self, input: &[u8]) -> Result<Vec<u8>, SimError> {
        let mut inner = self.lock();
        match inner.state {
            DeviceState::Closed => return Err(SimError::NotOpen),
            DeviceState::Open => return Err(SimError::NotConfigured),
            DeviceState::OpenConfigured => {}
        }
        if inner.faults.infer {
            warn!(count = inner.inference_count, "injected infer failure");
            return Err(SimError::InjectedFailure(Operation::Infer));
        }
        inner.inference_count += 1;
        trace!(
            input_len = input.len(),
            count = inner.inference_count,
            "inference complete"
        );
        Ok(vec![0; OUTPUT_BYTES])
    }

    /// Closes the device and drops any configured network. Always succeeds.
    pub fn close(&self) {
        let mut inner = self.lock();
        if inner.state != DeviceState::Closed {
            debug!(from = ?inner.state, "device closed");
        }
        inner.state = DeviceState::Closed;
    }

    /// Returns the static device descriptor.
    pub const fn properties(&self) -> DeviceProperties {
        self.properties
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> DeviceState {
        self.lock().state
    }

    /// Returns `true` if the device is open (configured or not).
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Returns `true` if a network is configured.
    pub fn is_configured(&self) -> bool {
        self.state().is_configured()
    }

    /// Returns the number of successful inferences since construction.
    pub fn inference_count(&self) -> u64 {
        self.lock().inference_count
    }

    /// Makes the next `open` calls fail (or succeed again when `false`).
    pub fn set_fail_on_open(&self, fail: bool) {
        self.lock().faults.open = fail;
    }

    /// Makes the next `configure` calls fail (or succeed again when `false`).
    pub fn set_fail_on_configure(&self, fail: bool) {
        self.lock().faults.configure = fail;
    }

    /// Makes the next `infer` calls fail (or succeed again when `false`).
    pub fn set_fail_on_infer(&self, fail: bool) {
        self.lock().faults.infer = fail;
    }

    /// Replaces all three failure-injection switches at once.
    pub fn set_faults(&self, faults: FaultSwitches) {
        self.lock().faults = faults;
    }

    /// Returns the current failure-injection switches.
    pub fn faults(&self) -> FaultSwitches {
        self.lock().faults
    }
}
