// crates/infra/src/input.rs
use std::fs;
use std::path::Path;

use aoc_shared_kernel::{InfraResult, InfrastructureError};

/// Read the whole puzzle input into memory as raw bytes.
///
/// No encoding is assumed; solvers classify bytes themselves.
///
/// # Errors
///
/// Returns [`InfrastructureError::InputUnreadable`] when the file is missing or
/// cannot be read. The cause is kept as the error source.
pub fn load_input(path: &Path) -> InfraResult<Vec<u8>> {
    let content = fs::read(path)
        .map_err(|source| InfrastructureError::InputUnreadable { path: path.to_path_buf(), source })?;
    log::debug!("loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}
