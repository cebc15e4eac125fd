//! HEF loader.
//!
//! Reads compiled network blobs from disk so they can be passed to
//! `DeviceSimulator::configure`. The bytes are not interpreted.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;

/// Loads a HEF file from disk into a byte vector.
///
/// # Errors
///
/// `LoadError` carrying the path if the file cannot be read.
pub fn load_hef(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = data.len(), "loaded HEF");
    Ok(data)
}
