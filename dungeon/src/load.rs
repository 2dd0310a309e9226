use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A map file that could not be read.
#[derive(Debug)]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read map {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Read the whole map file.
pub fn load_map(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })
}
