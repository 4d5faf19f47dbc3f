//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple
//! integration test files.

use std::fs;
use std::path::Path;

use configloader::{FileFormat, LoadOptions};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a configuration file into `dir`.
pub fn write_config(dir: &Path, file_name: &str, contents: &str) {
    fs::write(dir.join(file_name), contents).expect("Failed to write config file");
}

/// Build options for a YAML file named `config.yaml` in `dir`, no prefix.
pub fn yaml_options(dir: &Path) -> LoadOptions {
    LoadOptions {
        config_name: "config".to_string(),
        format: FileFormat::Yaml,
        search_paths: vec![dir.to_path_buf()],
        env_prefix: None,
    }
}
