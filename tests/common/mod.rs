//! Common test utilities for integration tests
//!
//! Provides project-layout fixtures shared across integration test files.

use std::fs;
use std::path::PathBuf;

use srs::Environment;
use tempfile::TempDir;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Temporary project root holding `app/config/<env>.yml` for each entry
pub fn project_with(files: &[(Environment, &str)]) -> TempDir {
    let dir = temp_dir();
    let config_dir = dir.path().join("app/config");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    for (env, contents) in files {
        fs::write(config_dir.join(env.file_name()), contents).expect("Failed to write config");
    }
    dir
}

/// Root of this crate, which ships sample config files
#[allow(dead_code)]
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
