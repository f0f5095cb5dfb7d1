use std::fs;
use std::path::PathBuf;

/// Directory lp-time keeps its files in.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Full path of `file_name` inside the storage directory.
    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Creates the storage directory if needed.
    ///
    /// Failures are ignored: a directory that cannot be created shows up as
    /// the error of the write that follows.
    pub fn ensure_dir(&self) {
        if !self.base_path.exists() {
            let _ = fs::create_dir_all(&self.base_path);
        }
    }
}
