//! Device lifecycle state and failure-injection switches.

use serde::Serialize;

/// Lifecycle state of a simulated device.
///
/// `OpenConfigured` is the only configured state, so a configured device is always open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DeviceState {
    /// Initial and terminal state.
    #[default]
    Closed,
    /// Opened, no network configured.
    Open,
    /// Opened with a network configured; inference is allowed.
    OpenConfigured,
}

impl DeviceState {
    /// Returns `true` for `Open` and `OpenConfigured`.
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns `true` only for `OpenConfigured`.
    pub const fn is_configured(self) -> bool {
        matches!(self, Self::OpenConfigured)
    }
}

/// Failure-injection switches, one per injectable operation.
///
/// Each switch is read at the start of its operation and never cached, so tests can
/// flip them between calls on the same device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaultSwitches {
    /// Force `open` to fail.
    pub open: bool,
    /// Force `configure` to fail.
    pub configure: bool,
    /// Force `infer` to fail.
    pub infer: bool,
}
