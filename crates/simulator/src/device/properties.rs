//! Static device descriptor.
//!
//! Reported by `DeviceSimulator::properties`; fixed at construction and never mutated.

use serde::Serialize;

use crate::common::constants::{DESC_MAX_PAGE_SIZE, DMA_ENGINE_COUNT};

/// Hardware SKU identifiers, numbered as the driver reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u32)]
pub enum BoardType {
    /// Hailo-8 M.2/mPCIe accelerator.
    #[default]
    Hailo8 = 0,
    /// Hailo-15 vision processor.
    Hailo15 = 1,
    /// Hailo-15L vision processor.
    Hailo15L = 2,
    /// Hailo-10H generative accelerator.
    Hailo10H = 3,
    /// Hailo-10 legacy board.
    Hailo10Legacy = 4,
    /// Mars board.
    Mars = 5,
}

impl BoardType {
    /// Returns the raw board identifier.
    pub const fn id(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for BoardType {
    type Error = u32;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Hailo8),
            1 => Ok(Self::Hailo15),
            2 => Ok(Self::Hailo15L),
            3 => Ok(Self::Hailo10H),
            4 => Ok(Self::Hailo10Legacy),
            5 => Ok(Self::Mars),
            other => Err(other),
        }
    }
}

/// Descriptive properties of a simulated accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceProperties {
    /// Board SKU.
    pub board_type: BoardType,
    /// Maximum DMA descriptor page size in bytes.
    pub desc_max_page_size: u16,
    /// Number of DMA engines on the board.
    pub dma_engine_count: u32,
    /// Whether firmware is reported as loaded.
    pub firmware_loaded: bool,
}

impl Default for DeviceProperties {
    fn default() -> Self {
        Self {
            board_type: BoardType::Hailo8,
            desc_max_page_size: DESC_MAX_PAGE_SIZE,
            dma_engine_count: DMA_ENGINE_COUNT,
            firmware_loaded: true,
        }
    }
}
