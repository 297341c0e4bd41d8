//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Helpers

/// A config file path, unique per call, under the system temp dir. The file is not created.
pub fn new_temp_config_path() -> PathBuf {
	std::env::temp_dir()
		.join(format!("server-target-tests-{}", uuid::Uuid::new_v4()))
		.join("endpoints.json")
}

/// Removes the directory holding `config_path`.
pub fn remove_temp_config(config_path: &std::path::Path) {
	if let Some(dir) = config_path.parent() {
		let _ = std::fs::remove_dir_all(dir);
	}
}

// endregion: --- Helpers
