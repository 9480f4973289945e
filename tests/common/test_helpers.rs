//! Helper functions for integration tests

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ivp_rs::problem::Line;

/// Assert that a line matches expected `(x, y)` values (within tolerance)
pub fn assert_lines_close(line: &Line, expected: &[(f64, f64)], tolerance: f64, message: &str) {
    assert_eq!(line.len(), expected.len(), "{}: length mismatch", message);

    for (point, &(x, y)) in line.points().iter().zip(expected) {
        assert_relative_eq!(point.x, x, epsilon = 1e-12);
        assert_abs_diff_eq!(point.y, y, epsilon = tolerance);
    }
}

/// Absolute error of the last point against an analytical solution
pub fn final_error(line: &Line, exact: impl Fn(f64) -> f64) -> f64 {
    line.last()
        .map(|p| (p.y - exact(p.x)).abs())
        .unwrap_or(f64::NAN)
}

/// Ratios e[i] / e[i+1] of successive errors
pub fn convergence_ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|w| w[0] / w[1]).collect()
}
