//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates per step:
//!
//! ```text
//! k₁ = f(x_i, y_i)
//! k₂ = f(x_i + h/2, y_i + h/2 * k₁)
//! k₃ = f(x_i + h/2, y_i + h/2 * k₂)
//! k₄ = f(x_i + h, y_i + h * k₃)
//!
//! y_{i+1} = y_i + h/6 * (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(h⁴))
//! - **Complexity**: 4 function evaluations per step
//! - **Memory**: O(1) - only k₁..k₄ are kept
//!
//! # Comparison
//!
//! | Method         | Order | Evals/Step | Error  |
//! |----------------|-------|------------|--------|
//! | Euler          | 1     | 1          | O(h)   |
//! | Improved Euler | 2     | 2          | O(h²)  |
//! | RK4            | 4     | 4          | O(h⁴)  |
//!
//! # Example
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use ivp_rs::problem::EvalError;
//! use ivp_rs::solver::{Grid, RK4Solver, Solver};
//!
//! let f = |x: f64, y: f64| -> Result<f64, EvalError> { Ok(x * x - 2.0 * y) };
//! let grid = Grid::new(0.0, 1.0, 10).unwrap();
//!
//! let line = RK4Solver.solve(&f, &grid, 1.0).unwrap();
//! assert_abs_diff_eq!(line.last().unwrap().y, 0.351509, epsilon = 1e-6);
//! ```

use crate::problem::{Equation, EvalError};
use crate::solver::Solver;
use crate::solver::traits::evaluate;

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// # Algorithm
///
/// - **Stage 1**: slope at the beginning of the interval
/// - **Stage 2**: slope at the midpoint, reached with k₁
/// - **Stage 3**: slope at the midpoint, reached with k₂
/// - **Stage 4**: slope at the end, reached with k₃
/// - **Update**: Simpson weights 1/6, 2/6, 2/6, 1/6
///
/// Halving h divides the error by about sixteen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn name(&self) -> &'static str {
        "Runge-Kutta's method"
    }

    fn advance(&self, equation: &dyn Equation, x: f64, y: f64, h: f64) -> Result<f64, EvalError> {
        let half = h / 2.0;

        let k1 = evaluate(equation, x, y)?;
        let k2 = evaluate(equation, x + half, y + half * k1)?;
        let k3 = evaluate(equation, x + half, y + half * k2)?;
        let k4 = evaluate(equation, x + h, y + h * k3)?;

        Ok(y + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
