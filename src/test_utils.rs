//! Test utilities for creating temporary npm projects.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// Provides methods for laying out `node_modules` with files of known size and
/// writing manifests. The directory is removed when dropped.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a project with an empty `package.json` and `node_modules`.
    pub fn with_layout() -> Self {
        let project = Self::new();
        project.add_manifest(".", "{}");
        project.add_dir("node_modules");
        project
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the project's `node_modules` directory.
    pub fn node_modules(&self) -> PathBuf {
        self.dir.path().join("node_modules")
    }

    /// Create a directory, including missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write a file of exactly `len` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_sized_file(&self, path: &str, len: u64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let file = fs::File::create(&full_path).expect("Failed to create file");
        file.set_len(len).expect("Failed to size file");
        full_path
    }

    /// Write `package.json` with `content` into directory `dir`.
    ///
    /// Creates the directory as needed.
    pub fn add_manifest(&self, dir: &str, content: &str) -> PathBuf {
        let full_dir = self.add_dir(dir);
        let full_path = full_dir.join("package.json");
        fs::write(&full_path, content).expect("Failed to write manifest");
        full_path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
