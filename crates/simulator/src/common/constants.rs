//! Simulator-wide constants.

/// Number of `f32` elements in the mock inference output tensor.
pub const OUTPUT_ELEMENTS: usize = 1000;

/// Size in bytes of the mock inference output (`OUTPUT_ELEMENTS` 32-bit floats).
pub const OUTPUT_BYTES: usize = OUTPUT_ELEMENTS * size_of::<f32>();

/// Maximum descriptor page size reported by the simulated device.
pub const DESC_MAX_PAGE_SIZE: u16 = 4096;

/// Number of DMA engines reported by the simulated device.
pub const DMA_ENGINE_COUNT: u32 = 1;

/// HEF magic number, `"FEH\x01"` when laid out little-endian.
pub const HEF_MAGIC: u32 = 0x0148_4546;

/// HEF container version produced by the fixtures.
pub const HEF_VERSION: u32 = 2;

/// Size of the fixed HEF header (magic, version, payload size).
pub const HEF_HEADER_LEN: usize = 12;
