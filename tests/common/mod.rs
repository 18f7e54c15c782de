#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the repo-doctor binary.
#[macro_export]
macro_rules! repo_doctor {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("repo-doctor"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic repo-doctor config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".repo-doctor.toml", content);
    }

    /// Creates a Python module with the given number of assignment lines.
    pub fn create_py_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::new();
        for i in 0..code_lines {
            let _ = writeln!(content, "x{i} = {i}");
        }
        self.create_file(relative_path, &content);
    }

    /// Reads the CSV report from the default report location.
    pub fn report_csv(&self) -> String {
        fs::read_to_string(self.path().join("reports/project_health.csv"))
            .expect("Failed to read report")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
