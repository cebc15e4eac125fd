//! Synthetic inputs for the device.
//!
//! Stateless generators for HEF blobs and input frames. The device treats both as opaque
//! bytes; these only give tests and the CLI something realistic-looking to pass in.

use crate::common::constants::{HEF_HEADER_LEN, HEF_MAGIC, HEF_VERSION};

/// Total length of the blob produced by [`fake_hef`].
pub const FAKE_HEF_LEN: usize = 100;

/// Payload size declared in the header produced by [`fake_hef`].
pub const FAKE_HEF_PAYLOAD_SIZE: u32 = 60;

/// Fixed little-endian header at the start of a HEF blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HefHeader {
    /// Magic number; `HEF_MAGIC` for a well-formed blob.
    pub magic: u32,
    /// Container version.
    pub version: u32,
    /// Declared size of the payload following the header.
    pub payload_size: u32,
}

impl HefHeader {
    /// Reads the header from the first 12 bytes of `data`.
    ///
    /// Returns `None` if `data` is shorter than the header or the magic does not match.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let header = data.get(..HEF_HEADER_LEN)?;
        let word = |at: usize| {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&header[at..at + 4]);
            u32::from_le_bytes(bytes)
        };
        let parsed = Self {
            magic: word(0),
            version: word(4),
            payload_size: word(8),
        };
        (parsed.magic == HEF_MAGIC).then_some(parsed)
    }

    /// Encodes the header into its 12-byte wire form.
    pub fn to_bytes(self) -> [u8; HEF_HEADER_LEN] {
        let mut out = [0u8; HEF_HEADER_LEN];
        out[0..4].copy_from_slice(&self.magic.to_le_bytes());
        out[4..8].copy_from_slice(&self.version.to_le_bytes());
        out[8..12].copy_from_slice(&self.payload_size.to_le_bytes());
        out
    }
}

/// Builds a minimal 100-byte version 2 HEF: magic, version 2, payload size 60, zero padding.
pub fn fake_hef() -> Vec<u8> {
    let header = HefHeader {
        magic: HEF_MAGIC,
        version: HEF_VERSION,
        payload_size: FAKE_HEF_PAYLOAD_SIZE,
    };
    let mut data = vec![0u8; FAKE_HEF_LEN];
    data[..HEF_HEADER_LEN].copy_from_slice(&header.to_bytes());
    data
}

/// Zeroed input frame of `height * width * channels` bytes.
pub fn fake_input(height: usize, width: usize, channels: usize) -> Vec<u8> {
    vec![0; height * width * channels]
}

/// Input frame of `width * height * channels` bytes counting up modulo 256.
pub fn test_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    (0..width * height * channels)
        .map(|i| (i % 256) as u8)
        .collect()
}

/// Deterministic filler bytes, `(i * 17 + 11) % 256`.
pub fn pseudo_random_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| ((i * 17 + 11) % 256) as u8).collect()
}
