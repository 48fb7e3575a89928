//! Shared test utilities for the tzmap workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Test data path helpers
//! - Skip macros for optional test data
//! - Synthetic timezone dataset generators
//! - Common test fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_test_file, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if the required file is not found.
///
/// Full timezone boundary datasets are tens of megabytes and are not checked
/// in; tests that want one call this and return early when it is absent.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_full_dataset() {
///     let path = require_test_file!("timezones.geojson");
///     // Test code using path...
/// }
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Set TZMAP_TEST_DATA_DIR to enable.",
                    $name
                );
                return;
            }
        }
    }};
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(5.5001_f64, 5.5_f64, 0.001_f64); // passes
/// assert_approx_eq!(5.6_f64, 5.5_f64, 0.001_f64);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of `[lon, lat]` positions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_position_approx_eq;
///
/// assert_position_approx_eq!([1.0001, 2.0001], [1.0, 2.0], 0.001);
/// ```
#[macro_export]
macro_rules! assert_position_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: [f64; 2] = $left;
        let right: [f64; 2] = $right;
        $crate::assert_approx_eq!(left[0], right[0], $epsilon);
        $crate::assert_approx_eq!(left[1], right[1], $epsilon);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(5.75, 5.75000001, 0.0001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-3.5, -3.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(5.6, 5.5, 0.001);
    }

    #[test]
    fn test_assert_position_approx_eq_passes() {
        assert_position_approx_eq!([-172.5001, 84.6], [-172.5, 84.6], 0.001);
    }
}
