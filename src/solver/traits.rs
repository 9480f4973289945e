//! Numerical solver traits and types
//!
//! # Design
//!
//! - `Solver` trait: one explicit update rule `advance` plus a stable name.
//!   The stepping loop, the boundary policy and the error reporting are
//!   shared by every method through [`Trajectory`].
//! - `Trajectory`: the lazy point stream of one solve.
//! - `Method`: the closed set of stepping methods, used where a method is
//!   picked from configuration (command line, benchmarks).

use std::fmt;
use std::str::FromStr;

use crate::error::{SolveError, SolveResult};
use crate::problem::{Equation, EvalError, Line, Point, ensure_finite};
use crate::solver::Grid;
use crate::solver::methods::{EulerSolver, ImprovedEulerSolver, RK4Solver};

// =================================================================================================
// Solver trait
// =================================================================================================

/// Fixed-step integrator for y' = f(x, y)
///
/// Implementors are stateless: the equation, grid and initial value are
/// passed to every call, so one solver value can serve any number of
/// concurrent solves.
///
/// # Implementing a new method
///
/// ```rust
/// use ivp_rs::problem::{Equation, EvalError};
/// use ivp_rs::solver::{Grid, Solver};
///
/// /// Backward-looking "method" that never moves
/// struct Frozen;
///
/// impl Solver for Frozen {
///     fn name(&self) -> &'static str {
///         "Frozen"
///     }
///
///     fn advance(&self, _f: &dyn Equation, _x: f64, y: f64, _h: f64) -> Result<f64, EvalError> {
///         Ok(y)
///     }
/// }
///
/// let f = |_x: f64, _y: f64| -> Result<f64, EvalError> { Ok(1.0) };
/// let line = Frozen.solve(&f, &Grid::new(0.0, 1.0, 4).unwrap(), 2.0).unwrap();
/// assert_eq!(line.len(), 5);
/// assert!(line.ys().all(|y| y == 2.0));
/// ```
pub trait Solver: Send + Sync {
    /// Stable, human-readable method name, used as the line name
    fn name(&self) -> &'static str;

    /// Apply the update rule once: y_{i+1} from (x_i, y_i) and step h
    fn advance(&self, equation: &dyn Equation, x: f64, y: f64, h: f64) -> Result<f64, EvalError>;

    /// Integrate over `grid` starting from `y0` and collect the points
    ///
    /// Any evaluation failure aborts the solve; no partial line is returned.
    fn solve(&self, equation: &dyn Equation, grid: &Grid, y0: f64) -> SolveResult<Line> {
        log::debug!(
            "solving with {} (h = {:.4}, x0 = {:.4}, y0 = {:.4}, x_end = {:.4})",
            self.name(),
            grid.step(),
            grid.x0(),
            y0,
            grid.x_end()
        );
        Line::try_collect(self.name(), Trajectory::new(self, equation, grid, y0))
    }
}

/// Evaluate f and reject non-finite results
pub(crate) fn evaluate(equation: &dyn Equation, x: f64, y: f64) -> Result<f64, EvalError> {
    equation.derivative(x, y).and_then(ensure_finite)
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Lazy stream of the points of one solve
///
/// Yields `(x_0, y_0)` first, then applies the update rule once per
/// requested point, so nothing is evaluated beyond what the consumer pulls
/// and the rule is never applied after the last grid point. After an error
/// the stream is finished. Calling [`Trajectory::new`] again restarts from
/// the initial value.
///
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use ivp_rs::problem::EvalError;
/// use ivp_rs::solver::{EulerSolver, Grid, Trajectory};
///
/// let f = |x: f64, y: f64| -> Result<f64, EvalError> { Ok(x * x - 2.0 * y) };
/// let grid = Grid::new(0.0, 1.0, 10).unwrap();
///
/// let second = Trajectory::new(&EulerSolver, &f, &grid, 1.0).nth(1).unwrap().unwrap();
/// assert_abs_diff_eq!(second.y, 0.8, epsilon = 1e-12);
/// ```
pub struct Trajectory<'a, S: Solver + ?Sized> {
    solver: &'a S,
    equation: &'a dyn Equation,
    grid: &'a Grid,
    index: usize,
    y: f64,
    finished: bool,
}

impl<'a, S: Solver + ?Sized> Trajectory<'a, S> {
    pub fn new(solver: &'a S, equation: &'a dyn Equation, grid: &'a Grid, y0: f64) -> Self {
        Self {
            solver,
            equation,
            grid,
            index: 0,
            y: y0,
            finished: false,
        }
    }

    fn fail(&mut self, step: usize, x: f64, y: f64, source: EvalError) -> SolveError {
        self.finished = true;
        SolveError::Evaluation {
            method: self.solver.name(),
            step,
            x,
            y,
            source,
        }
    }
}

impl<S: Solver + ?Sized> Iterator for Trajectory<'_, S> {
    type Item = SolveResult<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.index > self.grid.steps() {
            return None;
        }

        if self.index == 0 {
            if let Err(source) = ensure_finite(self.y) {
                return Some(Err(self.fail(0, self.grid.x0(), self.y, source)));
            }
        } else {
            let step = self.index - 1;
            let x = self.grid.x(step);
            let y = self.y;

            match self
                .solver
                .advance(self.equation, x, y, self.grid.step())
                .and_then(ensure_finite)
            {
                Ok(next) => self.y = next,
                Err(source) => return Some(Err(self.fail(step, x, y, source))),
            }
        }

        let point = Point::new(self.grid.x(self.index), self.y);
        self.index += 1;
        Some(Ok(point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.grid.len().saturating_sub(self.index);
        (0, Some(remaining))
    }
}

impl<S: Solver + ?Sized> std::iter::FusedIterator for Trajectory<'_, S> {}

// =================================================================================================
// Method selection
// =================================================================================================

/// The stepping methods shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Euler,
    ImprovedEuler,
    RungeKutta4,
}

static EULER: EulerSolver = EulerSolver;
static IMPROVED_EULER: ImprovedEulerSolver = ImprovedEulerSolver;
static RUNGE_KUTTA_4: RK4Solver = RK4Solver;

impl Method {
    pub const ALL: [Method; 3] = [Method::Euler, Method::ImprovedEuler, Method::RungeKutta4];

    pub fn solver(&self) -> &'static dyn Solver {
        match self {
            Method::Euler => &EULER,
            Method::ImprovedEuler => &IMPROVED_EULER,
            Method::RungeKutta4 => &RUNGE_KUTTA_4,
        }
    }

    pub fn name(&self) -> &'static str {
        self.solver().name()
    }

    /// Theoretical global convergence order
    pub fn order(&self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::ImprovedEuler => 2,
            Method::RungeKutta4 => 4,
        }
    }

    /// Solvers for a list of methods, in the same order
    pub fn solvers(methods: &[Method]) -> Vec<&'static dyn Solver> {
        methods.iter().map(Method::solver).collect()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "improved-euler" | "improved_euler" | "heun" => Ok(Method::ImprovedEuler),
            "rk4" | "runge-kutta" | "runge_kutta" => Ok(Method::RungeKutta4),
            other => Err(format!(
                "unknown method '{other}', expected one of: euler, improved-euler, rk4"
            )),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn quadratic(x: f64, y: f64) -> Result<f64, EvalError> {
        Ok(x * x - 2.0 * y)
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Euler.name(), "Euler's method");
        assert_eq!(Method::ImprovedEuler.name(), "Improved Euler's method");
        assert_eq!(Method::RungeKutta4.name(), "Runge-Kutta's method");
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("euler".parse::<Method>(), Ok(Method::Euler));
        assert_eq!("Heun".parse::<Method>(), Ok(Method::ImprovedEuler));
        assert_eq!("improved-euler".parse::<Method>(), Ok(Method::ImprovedEuler));
        assert_eq!("RK4".parse::<Method>(), Ok(Method::RungeKutta4));
        assert!("midpoint".parse::<Method>().is_err());
    }

    #[test]
    fn test_method_solvers_keep_order() {
        let solvers = Method::solvers(&[Method::RungeKutta4, Method::Euler]);
        let names: Vec<_> = solvers.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Runge-Kutta's method", "Euler's method"]);
    }

    #[test]
    fn test_trajectory_is_lazy() {
        let calls = AtomicUsize::new(0);
        let f = |x: f64, y: f64| -> Result<f64, EvalError> {
            calls.fetch_add(1, Ordering::Relaxed);
            quadratic(x, y)
        };
        let grid = Grid::new(0.0, 1.0, 10).unwrap();

        let mut trajectory = Trajectory::new(Method::Euler.solver(), &f, &grid, 1.0);
        assert!(trajectory.next().is_some());
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        assert!(trajectory.next().is_some());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_trajectory_never_steps_past_last_point() {
        let calls = AtomicUsize::new(0);
        let f = |x: f64, y: f64| -> Result<f64, EvalError> {
            calls.fetch_add(1, Ordering::Relaxed);
            quadratic(x, y)
        };
        let grid = Grid::new(0.0, 1.0, 10).unwrap();

        let count = Trajectory::new(Method::Euler.solver(), &f, &grid, 1.0).count();
        assert_eq!(count, 11);
        assert_eq!(calls.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_trajectory_fuses_after_error() {
        let f = |x: f64, _y: f64| -> Result<f64, EvalError> {
            if x > 0.25 {
                Err(EvalError::domain("out of range"))
            } else {
                Ok(1.0)
            }
        };
        let grid = Grid::new(0.0, 1.0, 10).unwrap();

        let items: Vec<_> = Trajectory::new(Method::Euler.solver(), &f, &grid, 0.0).collect();
        // x = 0.0, 0.1, 0.2, 0.3 are emitted, stepping from 0.3 fails
        assert_eq!(items.len(), 5);
        assert!(items[..4].iter().all(|item| item.is_ok()));

        match &items[4] {
            Err(SolveError::Evaluation { method, step, x, .. }) => {
                assert_eq!(*method, "Euler's method");
                assert_eq!(*step, 3);
                assert_relative_eq!(*x, 0.3, epsilon = 1e-12);
            }
            other => panic!("expected evaluation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_derivative_is_an_error() {
        let f = |_x: f64, y: f64| -> Result<f64, EvalError> { Ok((y - 2.0).ln()) };
        let grid = Grid::new(0.0, 1.0, 4).unwrap();

        let err = Method::Euler.solver().solve(&f, &grid, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Evaluation { source: EvalError::NonFinite { .. }, step: 0, .. }
        ));
    }

    #[test]
    fn test_non_finite_initial_value_is_an_error() {
        let grid = Grid::new(0.0, 1.0, 4).unwrap();
        let f = |x: f64, y: f64| quadratic(x, y);
        let err = Method::Euler.solver().solve(&f, &grid, f64::NAN).unwrap_err();
        assert!(matches!(err, SolveError::Evaluation { step: 0, .. }));
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let grid = Grid::new(0.0, 1.0, 10).unwrap();
        let f = |x: f64, y: f64| quadratic(x, y);
        let mut trajectory = Trajectory::new(Method::Euler.solver(), &f, &grid, 1.0);
        assert_eq!(trajectory.size_hint(), (0, Some(11)));
        trajectory.next();
        assert_eq!(trajectory.size_hint(), (0, Some(10)));
    }
}
