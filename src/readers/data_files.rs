use crate::error::{ProcessingError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds hourly data files by name pattern across a list of directories
pub struct DataFileFinder {
    prefix: String,
    extension: String,
}

impl DataFileFinder {
    pub fn new(prefix: &str, extension: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// List matching files, directory by directory, each directory sorted by file name.
    ///
    /// Directories that do not exist are skipped. Finding no file at all is an error.
    pub fn find_files(&self, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for dir in dirs {
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "Data directory not found, skipped");
                continue;
            }

            let mut dir_files = self.find_in_dir(dir)?;
            debug!(dir = %dir.display(), files = dir_files.len(), "Scanned data directory");
            files.append(&mut dir_files);
        }

        if files.is_empty() {
            let searched = dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ProcessingError::NoDataFiles { searched });
        }

        Ok(files)
    }

    fn find_in_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && self.matches(&path) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let extension_matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension);

        file_name.starts_with(&self.prefix) && extension_matches
    }
}
