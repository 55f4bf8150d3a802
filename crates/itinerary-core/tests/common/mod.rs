use std::path::{Path, PathBuf};

use itinerary_core::{SessionBuilder, SessionConfig};
use tempfile::TempDir;

/// Helper function to create a temporary store directory
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_dir = temp_dir.path().join("store");
    (temp_dir, store_dir)
}

/// Builder over `store_dir` with the pool seeded from 2026-02-05
pub fn builder(store_dir: &Path) -> SessionBuilder {
    SessionBuilder::new()
        .with_store_dir(Some(store_dir))
        .with_config(SessionConfig {
            seed_start: Some(jiff::civil::date(2026, 2, 5)),
            ..SessionConfig::default()
        })
}
