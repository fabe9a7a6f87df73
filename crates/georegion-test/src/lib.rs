//! georegion-test - Regression test framework for georegion
//!
//! This crate provides a golden-file regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use georegion_test::{RegParams, load_test_map};
//!
//! let mut rp = RegParams::new("count");
//! let grid = load_test_map("rooms.txt").unwrap();
//! let count = georegion_region::count_regions(&grid).unwrap();
//! rp.compare_values(3.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use georegion_core::{Grid, GridConfig};

/// Load a test map from the test data directory
///
/// # Arguments
///
/// * `name` - Map filename (e.g., "rooms.txt")
///
/// # Returns
///
/// The loaded grid with the default `#` border symbol, or an error if
/// loading fails.
pub fn load_test_map(name: &str) -> TestResult<Grid> {
    load_test_map_with(name, &GridConfig::default())
}

/// Load a test map with an explicit grid configuration
pub fn load_test_map_with(name: &str, config: &GridConfig) -> TestResult<Grid> {
    let path = test_data_path(name);
    georegion_io::read_grid_file(&path, config).map_err(|e| TestError::MapLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // georegion-test is at crates/georegion-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/maps/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
