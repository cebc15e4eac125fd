//! # Fixture Tests
//!
//! Layout of the synthetic HEF and the deterministic input generators.

use npusim_core::common::constants::{HEF_MAGIC, HEF_VERSION};
use npusim_core::fixtures::*;
use rstest::rstest;

#[test]
fn test_fake_hef_header_parses() {
    let header = HefHeader::parse(&fake_hef()).unwrap();
    assert_eq!(header.magic, HEF_MAGIC);
    assert_eq!(header.version, HEF_VERSION);
    assert_eq!(header.version, 2);
    assert_eq!(header.payload_size, 60);
}

#[test]
fn test_fake_hef_is_padded_to_100_bytes() {
    let hef = fake_hef();
    assert_eq!(hef.len(), 100);
    assert_eq!(&hef[..4], &[0x46, 0x45, 0x48, 0x01]);
}

#[test]
fn test_header_parse_rejects_short_input() {
    assert_eq!(HefHeader::parse(&fake_hef()[..11]), None);
    assert_eq!(HefHeader::parse(&[]), None);
}

#[test]
fn test_header_parse_rejects_bad_magic() {
    let mut hef = fake_hef();
    hef[0] = 0;
    assert_eq!(HefHeader::parse(&hef), None);
}

#[test]
fn test_header_bytes_round_trip() {
    let header = HefHeader {
        magic: HEF_MAGIC,
        version: 3,
        payload_size: 0xDEAD,
    };
    assert_eq!(HefHeader::parse(&header.to_bytes()), Some(header));
}

#[rstest]
#[case(224, 224, 3)]
#[case(1, 1, 1)]
#[case(0, 10, 3)]
fn test_fake_input_size(#[case] h: usize, #[case] w: usize, #[case] c: usize) {
    let input = fake_input(h, w, c);
    assert_eq!(input.len(), h * w * c);
    assert!(input.iter().all(|&b| b == 0));
}

#[test]
fn test_test_image_counts_modulo_256() {
    let image = test_image(16, 16, 2);
    assert_eq!(image.len(), 512);
    assert_eq!(image[0], 0);
    assert_eq!(image[255], 255);
    assert_eq!(image[256], 0);
    assert_eq!(image[511], 255);
}

#[test]
fn test_pseudo_random_bytes_are_deterministic() {
    let bytes = pseudo_random_bytes(4);
    assert_eq!(bytes, vec![11, 28, 45, 62]);
    assert_eq!(pseudo_random_bytes(300), pseudo_random_bytes(300));
    assert_eq!(pseudo_random_bytes(300)[15], ((15 * 17 + 11) % 256) as u8);
}
