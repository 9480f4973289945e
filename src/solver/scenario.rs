//! Problem scenario
//!
//! A scenario combines an equation, its exact solution and the initial
//! conditions: the "WHAT to solve". Grids and methods are chosen per call.

use std::fmt;

use crate::error::{SolveError, SolveResult};
use crate::problem::{ClosedForm, Equation};
use crate::solver::Grid;

/// Initial point and end of the integration interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub x0: f64,
    pub y0: f64,
    pub x_end: f64,
}

impl InitialConditions {
    pub const fn new(x0: f64, y0: f64, x_end: f64) -> Self {
        Self { x0, y0, x_end }
    }

    /// Check that the values describe a forward integration
    pub fn validate(&self) -> SolveResult<()> {
        if !self.y0.is_finite() {
            return Err(SolveError::invalid("y0", format!("must be finite, got {}", self.y0)));
        }
        // Grid construction checks x0 and x_end
        Grid::new(self.x0, self.x_end, 1).map(|_| ())
    }

    /// Grid of `n` steps over `[x0, x_end]`
    pub fn grid(&self, n: usize) -> SolveResult<Grid> {
        Grid::new(self.x0, self.x_end, n)
    }
}

impl fmt::Display for InitialConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x0 = {:.4}, y0 = {:.4}, X = {:.4}", self.x0, self.y0, self.x_end)
    }
}

/// Simulation scenario
///
/// The same scenario can be solved with different methods and on different
/// grids; nothing in it changes between calls.
///
/// # Example
///
/// ```rust
/// use ivp_rs::problem::{closed_form, EvalError};
/// use ivp_rs::solver::{InitialConditions, Scenario};
///
/// let scenario = Scenario::new(
///     Box::new(|_x: f64, y: f64| -> Result<f64, EvalError> { Ok(-y) }),
///     Box::new(closed_form(
///         |x: f64, c: f64| -> Result<f64, EvalError> { Ok(c * (-x).exp()) },
///         |x0: f64, y0: f64| -> Result<f64, EvalError> { Ok(y0 * x0.exp()) },
///     )),
///     InitialConditions::new(0.0, 1.0, 2.0),
/// );
/// assert!(scenario.validate().is_ok());
/// ```
pub struct Scenario {
    /// Right-hand side y' = f(x, y)
    pub equation: Box<dyn Equation>,

    /// Exact solution used as the reference curve
    pub exact: Box<dyn ClosedForm>,

    pub conditions: InitialConditions,
}

impl Scenario {
    pub fn new(
        equation: Box<dyn Equation>,
        exact: Box<dyn ClosedForm>,
        conditions: InitialConditions,
    ) -> Self {
        Self {
            equation,
            exact,
            conditions,
        }
    }

    pub fn validate(&self) -> SolveResult<()> {
        self.conditions.validate()
    }

    /// Grid of `n` steps over the scenario interval
    pub fn grid(&self, n: usize) -> SolveResult<Grid> {
        self.conditions.grid(n)
    }

    pub fn y0(&self) -> f64 {
        self.conditions.y0
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("conditions", &self.conditions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::presets::Quadratic;

    #[test]
    fn test_conditions_validate() {
        assert!(InitialConditions::new(0.0, 1.0, 1.0).validate().is_ok());
        assert!(InitialConditions::new(1.0, 1.0, 0.0).validate().is_err());
        assert!(InitialConditions::new(0.0, f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_conditions_reject_unrepresentable_interval() {
        let err = InitialConditions::new(-1e308, 1.0, 1e308).validate().unwrap_err();
        assert!(matches!(err, SolveError::InvalidParameter { what: "x_end", .. }));
    }

    #[test]
    fn test_conditions_display() {
        let conditions = InitialConditions::new(0.0, 1.0, 1.0);
        assert_eq!(conditions.to_string(), "x0 = 0.0000, y0 = 1.0000, X = 1.0000");
    }

    #[test]
    fn test_scenario_grid() {
        let scenario = Scenario::new(
            Box::new(Quadratic),
            Box::new(Quadratic),
            InitialConditions::new(0.0, 1.0, 1.0),
        );
        let grid = scenario.grid(10).unwrap();
        assert_eq!(grid.len(), 11);
        assert_eq!(scenario.y0(), 1.0);
        assert!(scenario.grid(0).is_err());
    }
}
