// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Message printed when the command line does not name exactly one input file.
pub const USAGE: &str = "Please, add input file path as parameter";

/// Root error type shared across the workspace.
///
/// Each layer's message is surfaced verbatim; the layer wrapper adds nothing
/// to the rendered text.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The underlying cause is kept as the source only; the message stays fixed.
    #[error("Unable to open file")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("{}", USAGE)]
    Usage,
}

impl InfrastructureError {
    /// Path of the input that could not be read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::InputUnreadable { path, .. } => path,
        }
    }
}
