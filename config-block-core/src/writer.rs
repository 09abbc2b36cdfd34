use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::intermediate::Intermediate;

/// Errors that can occur while writing an [`Intermediate`] as JSON.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the block structure.
    #[error("failed to serialize blocks: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write output file.
    #[error("failed to write blocks file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize an [`Intermediate`] into pretty-printed JSON bytes.
pub fn write(intermediate: &Intermediate) -> Result<Vec<u8>, WriteError> {
    let mut bytes = serde_json::to_vec_pretty(intermediate)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize an [`Intermediate`] and write it to `path`.
pub fn write_file(intermediate: &Intermediate, path: &Path) -> Result<(), WriteError> {
    let bytes = write(intermediate)?;
    fs::write(path, bytes)?;
    Ok(())
}
