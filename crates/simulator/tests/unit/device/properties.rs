//! # Device Descriptor Tests

use npusim_core::device::{BoardType, DeviceProperties};
use npusim_core::DeviceSimulator;

#[test]
fn test_fixed_descriptor_values() {
    let props = DeviceSimulator::new().properties();
    assert_eq!(props.board_type, BoardType::Hailo8);
    assert_eq!(props.board_type.id(), 0);
    assert_eq!(props.desc_max_page_size, 4096);
    assert_eq!(props.dma_engine_count, 1);
    assert!(props.firmware_loaded);
}

#[test]
fn test_properties_readable_in_any_state() {
    let device = DeviceSimulator::new();
    let closed = device.properties();
    device.open().unwrap();
    assert_eq!(device.properties(), closed);
    device.close();
    assert_eq!(device.properties(), DeviceProperties::default());
}

#[test]
fn test_properties_serialize() {
    let json = serde_json::to_value(DeviceSimulator::new().properties()).unwrap();
    assert_eq!(json["board_type"], "Hailo8");
    assert_eq!(json["desc_max_page_size"], 4096);
    assert_eq!(json["firmware_loaded"], true);
}
