//! Improved Euler numerical solver
//!
//! # Mathematical Background
//!
//! The improved Euler scheme takes a half Euler step to the middle of the
//! interval and uses the slope found there for the whole step:
//!
//! ```text
//! k₁ = f(x_i, y_i)
//! k₂ = f(x_i + h/2, y_i + h/2 * k₁)
//!
//! y_{i+1} = y_i + h * k₂
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Second-order accurate (global error ~ O(h²))
//! - **Complexity**: 2 function evaluations per step
//!
//! Halving h divides the maximum error by about four.

use crate::problem::{Equation, EvalError};
use crate::solver::Solver;
use crate::solver::traits::evaluate;

/// Improved Euler (midpoint slope) solver
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedEulerSolver;

impl ImprovedEulerSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ImprovedEulerSolver {
    fn name(&self) -> &'static str {
        "Improved Euler's method"
    }

    fn advance(&self, equation: &dyn Equation, x: f64, y: f64, h: f64) -> Result<f64, EvalError> {
        let half = h / 2.0;

        let k1 = evaluate(equation, x, y)?;
        let k2 = evaluate(equation, x + half, y + half * k1)?;

        Ok(y + h * k2)
    }
}
