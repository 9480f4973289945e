//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit scheme for the
//! initial value problem
//!
//! ```text
//! y' = f(x, y),   y(x0) = y0
//! ```
//!
//! It follows the tangent at the current point for one step:
//!
//! ```text
//! y_{i+1} = y_i + h * f(x_i, y_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(h))
//! - **Stability**: Conditionally stable (requires small steps)
//! - **Complexity**: 1 function evaluation per step
//!
//! # When to Use
//!
//! - Baseline in method comparisons
//! - Educational demonstrations
//! - Non-stiff problems with relaxed accuracy requirements
//!
//! # Example
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use ivp_rs::problem::EvalError;
//! use ivp_rs::solver::{EulerSolver, Grid, Solver};
//!
//! let f = |x: f64, y: f64| -> Result<f64, EvalError> { Ok(x * x - 2.0 * y) };
//! let grid = Grid::new(0.0, 1.0, 10).unwrap();
//!
//! let line = EulerSolver.solve(&f, &grid, 1.0).unwrap();
//! assert_eq!(line.len(), 11);
//! assert_abs_diff_eq!(line.points()[2].y, 0.641, epsilon = 1e-12);
//! ```

use crate::problem::{Equation, EvalError};
use crate::solver::Solver;
use crate::solver::traits::evaluate;

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler solver
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h²) per step
/// - **Global error**: O(h) over the interval
/// - **Convergence**: halving h halves the maximum error
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn name(&self) -> &'static str {
        "Euler's method"
    }

    fn advance(&self, equation: &dyn Equation, x: f64, y: f64, h: f64) -> Result<f64, EvalError> {
        Ok(y + h * evaluate(equation, x, y)?)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
