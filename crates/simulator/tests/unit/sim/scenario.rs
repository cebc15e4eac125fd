//! # Scenario Runner Tests
//!
//! A scenario drives a fresh device and pool; injected inference failures are counted,
//! open and configure failures abort the run, and the device always ends closed.

use npusim_core::common::{Operation, SimError};
use npusim_core::config::{Config, FaultConfig};
use npusim_core::device::DeviceState;
use npusim_core::sim::Scenario;
use npusim_core::stats::PoolStats;
use pretty_assertions::assert_eq;

use crate::common::init_tracing;

fn config_with(iterations: u64, faults: FaultConfig) -> Config {
    let mut config = Config::default();
    config.workload.iterations = iterations;
    config.workload.input_height = 8;
    config.workload.input_width = 8;
    config.faults = faults;
    config
}

#[test]
fn test_clean_run_counts_every_inference() {
    init_tracing();
    let scenario = Scenario::new(&config_with(12, FaultConfig::default()));
    let report = scenario.run().unwrap();

    assert_eq!(report.iterations, 12);
    assert_eq!(report.inferences, 12);
    assert_eq!(report.failed_inferences, 0);
    assert_eq!(report.pool_exhaustions, 0);
    assert_eq!(
        report.pool,
        PoolStats {
            acquires: 12,
            releases: 12,
            exhaustions: 0,
            rejected_releases: 0,
            high_water_mark: 1,
        }
    );
    assert_eq!(report.pool_available, 4);
    assert_eq!(scenario.device().inference_count(), 12);
    assert_eq!(scenario.device().state(), DeviceState::Closed);
    assert!((report.success_rate() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_injected_infer_failures_are_counted() {
    let faults = FaultConfig {
        fail_on_infer: true,
        ..FaultConfig::default()
    };
    let scenario = Scenario::new(&config_with(5, faults));
    let report = scenario.run().unwrap();

    assert_eq!(report.inferences, 0);
    assert_eq!(report.failed_inferences, 5);
    assert_eq!(report.pool.releases, 5);
    assert_eq!(scenario.pool().available(), scenario.pool().capacity());
}

#[test]
fn test_open_failure_aborts_run() {
    let faults = FaultConfig {
        fail_on_open: true,
        ..FaultConfig::default()
    };
    let scenario = Scenario::new(&config_with(5, faults));
    assert_eq!(scenario.run(), Err(SimError::InjectedFailure(Operation::Open)));
    assert_eq!(scenario.pool().stats(), PoolStats::default());
}

#[test]
fn test_configure_failure_aborts_and_closes() {
    let faults = FaultConfig {
        fail_on_configure: true,
        ..FaultConfig::default()
    };
    let scenario = Scenario::new(&config_with(5, faults));
    assert_eq!(
        scenario.run(),
        Err(SimError::InjectedFailure(Operation::Configure))
    );
    assert_eq!(scenario.device().state(), DeviceState::Closed);
    assert_eq!(scenario.device().inference_count(), 0);
}

#[test]
fn test_empty_pool_counts_exhaustions() {
    let mut config = config_with(3, FaultConfig::default());
    config.pool.count = 0;
    let report = Scenario::new(&config).run().unwrap();
    assert_eq!(report.inferences, 0);
    assert_eq!(report.pool_exhaustions, 3);
    assert_eq!(report.pool.exhaustions, 3);
}

#[test]
fn test_custom_hef_is_accepted() {
    let scenario = Scenario::new(&config_with(1, FaultConfig::default())).with_hef(vec![1, 2, 3]);
    assert_eq!(scenario.run().unwrap().inferences, 1);
}

#[test]
fn test_output_lands_in_pool_buffer() {
    let scenario = Scenario::new(&config_with(1, FaultConfig::default()));
    let _ = scenario.run().unwrap();
    let buffer = scenario.pool().acquire().unwrap();
    assert!(buffer[..4000].iter().all(|&b| b == 0));
    scenario.pool().release(buffer).unwrap();
}

#[test]
fn test_report_serializes_to_json() {
    let report = Scenario::new(&config_with(2, FaultConfig::default()))
        .run()
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["inferences"], 2);
    assert_eq!(json["properties"]["board_type"], "Hailo8");
    assert_eq!(json["pool"]["acquires"], 2);
}
