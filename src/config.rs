// src/config.rs
use crate::args::Args;
use std::path::PathBuf;

/// Settings for a single puzzle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into() }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self::new(args.input)
    }
}
