mod policy;

pub use policy::{DEFAULT_EXCLUDED_DIRS, ExclusionPolicy};

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{RepoDoctorError, Result};

/// Trait for discovering source files under a root directory.
pub trait FileScanner {
    /// Walk a directory tree and return matching file paths in scan order.
    ///
    /// # Errors
    /// Returns an error if the root or one of its subdirectories cannot be
    /// read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Depth-first walker that prunes excluded directories before descending
/// into them and visits entries in lexicographic order, so the same tree
/// always yields the same file sequence.
pub struct SourceWalker {
    exclusions: ExclusionPolicy,
    extensions: Vec<String>,
}

impl SourceWalker {
    #[must_use]
    pub const fn new(exclusions: ExclusionPolicy, extensions: Vec<String>) -> Self {
        Self {
            exclusions,
            extensions,
        }
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.should_descend(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| RepoDoctorError::Scan {
                path: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() && self.matches_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn should_descend(&self, entry: &DirEntry) -> bool {
        // The root itself is never pruned, whatever its name.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !self.exclusions.is_excluded(name))
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

impl FileScanner for SourceWalker {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

/// Reads a source file as text, replacing invalid UTF-8 sequences instead of
/// failing on them.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| RepoDoctorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Path relative to the scan root, with forward slashes on every platform.
#[must_use]
pub fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
