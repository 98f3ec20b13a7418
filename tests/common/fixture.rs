use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A puzzle input written into a private temporary directory.
#[derive(Debug)]
pub struct InputFile {
    dir: TempDir,
    path: PathBuf,
}

impl InputFile {
    pub fn new(contents: impl AsRef<[u8]>) -> Self {
        Self::named("input.txt", contents)
    }

    pub fn named(name: &str, contents: impl AsRef<[u8]>) -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        let path = dir.path().join(name);
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write input at {}: {e}", path.display()));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// A path inside the same directory that was never created.
    pub fn missing_sibling(&self) -> PathBuf {
        self.dir.path().join("missing.txt")
    }
}
