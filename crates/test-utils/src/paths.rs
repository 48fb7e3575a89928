//! Path utilities for locating test data files.

use std::path::PathBuf;

/// Returns the workspace root directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Searches for a test file in multiple locations.
///
/// Checked in order:
/// 1. Environment variable `TZMAP_TEST_DATA_DIR` (if set)
/// 2. `testdata/` at the workspace root
/// 3. `services/tzmap-api/testdata/`
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(dir) = std::env::var("TZMAP_TEST_DATA_DIR") {
        candidates.push(PathBuf::from(dir).join(name));
    }

    let root = workspace_root();
    candidates.extend([
        root.join("testdata").join(name),
        root.join("services/tzmap-api/testdata").join(name),
    ]);

    candidates.into_iter().find(|path| path.exists())
}

/// Creates a temporary directory for test output, removed on drop.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("tzmap_test_")
        .tempdir()
        .expect("Failed to create temporary test directory")
}
