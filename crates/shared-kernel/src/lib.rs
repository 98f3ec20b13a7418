// crates/shared-kernel/src/lib.rs
pub use error::{InfraResult, InfrastructureError, PresentationError, PuzzleError, USAGE};

pub mod error;
pub mod value_objects;

pub use value_objects::Answers;
