//! Closed-form reference solution
//!
//! Not a stepping method: the constant c = C(x0, y0) is computed once and
//! F(x_i, c) is evaluated at every grid abscissa. The resulting line is
//! built on exactly the same grid as the stepping methods, which is what the
//! error analysis relies on.

use crate::error::{SolveError, SolveResult};
use crate::problem::{ClosedForm, EvalError, Line, Point, ensure_finite};
use crate::solver::Grid;

/// Evaluator of a [`ClosedForm`] on a grid
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "Exact solution"
    }

    /// Evaluate the exact solution through `(x0, y0)` at every grid point
    ///
    /// The first point is `(x0, F(x0, c))`, which equals `y0` up to rounding.
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use ivp_rs::problem::presets::Quadratic;
    /// use ivp_rs::solver::{ExactSolver, Grid};
    ///
    /// let grid = Grid::new(0.0, 1.0, 10).unwrap();
    /// let line = ExactSolver.solve(&Quadratic, &grid, 1.0).unwrap();
    /// assert_abs_diff_eq!(line.last().unwrap().y, 0.351501, epsilon = 1e-6);
    /// ```
    pub fn solve(&self, exact: &dyn ClosedForm, grid: &Grid, y0: f64) -> SolveResult<Line> {
        let x0 = grid.x0();
        log::debug!(
            "evaluating exact solution (h = {:.4}, x0 = {:.4}, y0 = {:.4}, x_end = {:.4})",
            grid.step(),
            x0,
            y0,
            grid.x_end()
        );

        let c = exact
            .constant(x0, y0)
            .and_then(ensure_finite)
            .map_err(|source| self.fail(0, x0, y0, source))?;

        let points = grid
            .xs()
            .enumerate()
            .map(|(step, x)| {
                exact
                    .value(x, c)
                    .and_then(ensure_finite)
                    .map(|y| Point::new(x, y))
                    .map_err(|source| self.fail(step, x, c, source))
            });

        Line::try_collect(self.name(), points)
    }

    // `y` carries the integration constant when F itself fails
    fn fail(&self, step: usize, x: f64, y: f64, source: EvalError) -> SolveError {
        SolveError::Evaluation {
            method: self.name(),
            step,
            x,
            y,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::problem::closed_form;
    use crate::problem::presets::{Logistic, Riccati};

    #[test]
    fn test_exact_name() {
        assert_eq!(ExactSolver::new().name(), "Exact solution");
    }

    #[test]
    fn test_exact_passes_through_initial_point() {
        let grid = Grid::new(-4.0, 4.0, 16).unwrap();
        let line = ExactSolver.solve(&Logistic, &grid, 1.0).unwrap();

        assert_eq!(line.len(), 17);
        let first = line.first().unwrap();
        assert_eq!(first.x, -4.0);
        assert_relative_eq!(first.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_uses_grid_abscissae() {
        let grid = Grid::new(1.0, 7.0, 6).unwrap();
        let line = ExactSolver.solve(&Riccati, &grid, 1.0).unwrap();

        for (point, x) in line.points().iter().zip(grid.xs()) {
            assert_eq!(point.x.to_bits(), x.to_bits());
        }
    }

    #[test]
    fn test_exact_constant_failure() {
        let grid = Grid::new(0.0, 1.0, 4).unwrap();
        let err = ExactSolver.solve(&Riccati, &grid, 1.0).unwrap_err();

        assert!(matches!(
            err,
            SolveError::Evaluation { method: "Exact solution", step: 0, source: EvalError::Domain(_), .. }
        ));
    }

    #[test]
    fn test_exact_value_failure_reports_step() {
        let exact = closed_form(
            |x: f64, c: f64| -> Result<f64, EvalError> { Ok(c / (x - 0.5)) },
            |_x0: f64, y0: f64| -> Result<f64, EvalError> { Ok(y0) },
        );
        let grid = Grid::new(0.0, 1.0, 2).unwrap();

        // 1 / (0.5 - 0.5) is infinite
        let err = ExactSolver.solve(&exact, &grid, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Evaluation { step: 1, source: EvalError::NonFinite { .. }, .. }
        ));
    }
}
