//! Global truncation error sweep over step counts

use std::fmt;
use std::ops::RangeInclusive;

use crate::analysis::local_truncation_errors;
use crate::error::{SolveError, SolveResult};
use crate::problem::{Line, Point};
use crate::solver::{ExactSolver, Scenario, Solver};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inclusive range of step counts `[n_min, n_max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    n_min: usize,
    n_max: usize,
}

impl SweepRange {
    /// # Errors
    ///
    /// `InvalidParameter` when `n_min < 1` or `n_min > n_max`.
    pub fn new(n_min: usize, n_max: usize) -> SolveResult<Self> {
        if n_min < 1 {
            return Err(SolveError::invalid("n_min", "must be at least 1"));
        }
        if n_min > n_max {
            return Err(SolveError::invalid(
                "n_min",
                format!("must not exceed n_max ({n_min} > {n_max})"),
            ));
        }
        Ok(Self { n_min, n_max })
    }

    pub fn n_min(&self) -> usize {
        self.n_min
    }

    pub fn n_max(&self) -> usize {
        self.n_max
    }

    /// Number of grids in the sweep
    pub fn len(&self) -> usize {
        self.n_max - self.n_min + 1
    }

    /// Always false: a valid range holds at least one step count
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        self.n_min..=self.n_max
    }
}

impl fmt::Display for SweepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.n_min, self.n_max)
    }
}

/// Maximum local error per solver as a function of N
///
/// For every N in `range` the scenario is solved on an N-step grid by the
/// exact evaluator and by each solver; the largest pointwise error of each
/// solver becomes the point `(N, max error)` of that solver's line. Lines
/// come back in solver order, points in ascending N.
///
/// With the `parallel` feature the grids are processed on the rayon pool.
/// Every N writes its own slot and slots are assembled by index, so the
/// output (and, on failure, the reported error: the one for the smallest
/// failing N) does not depend on scheduling.
///
/// ```rust
/// use ivp_rs::analysis::{global_truncation_errors, SweepRange};
/// use ivp_rs::problem::Preset;
/// use ivp_rs::solver::Method;
///
/// let scenario = Preset::Quadratic.scenario(Preset::Quadratic.default_conditions());
/// let solvers = Method::solvers(&Method::ALL);
///
/// let gte = global_truncation_errors(&scenario, &solvers, SweepRange::new(5, 8)?)?;
/// let ns: Vec<f64> = gte[0].xs().collect();
/// assert_eq!(ns, vec![5.0, 6.0, 7.0, 8.0]);
/// # Ok::<(), ivp_rs::SolveError>(())
/// ```
pub fn global_truncation_errors(
    scenario: &Scenario,
    solvers: &[&dyn Solver],
    range: SweepRange,
) -> SolveResult<Vec<Line>> {
    scenario.validate()?;

    #[cfg(feature = "parallel")]
    let slots: Vec<SolveResult<Vec<f64>>> = range
        .iter()
        .into_par_iter()
        .map(|n| max_errors(scenario, solvers, n))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let slots: Vec<SolveResult<Vec<f64>>> = range
        .iter()
        .map(|n| max_errors(scenario, solvers, n))
        .collect();

    let maxima = slots.into_iter().collect::<SolveResult<Vec<_>>>()?;

    let lines = solvers
        .iter()
        .enumerate()
        .map(|(k, solver)| {
            let points = range
                .iter()
                .zip(&maxima)
                .map(|(n, row)| Point::new(n as f64, row[k]))
                .collect();
            Line::new(solver.name(), points)
        })
        .collect();

    Ok(lines)
}

/// Largest local error of each solver on the N-step grid
fn max_errors(scenario: &Scenario, solvers: &[&dyn Solver], n: usize) -> SolveResult<Vec<f64>> {
    let grid = scenario.grid(n)?;
    log::debug!("sweep grid N = {n} (h = {:.6})", grid.step());

    let y0 = scenario.y0();
    let exact = ExactSolver.solve(scenario.exact.as_ref(), &grid, y0)?;
    let lines = solvers
        .iter()
        .map(|solver| solver.solve(scenario.equation.as_ref(), &grid, y0))
        .collect::<SolveResult<Vec<_>>>()?;

    let errors = local_truncation_errors(&lines, &exact)?;
    Ok(errors
        .iter()
        .map(|line| line.max_y().unwrap_or(0.0))
        .collect())
}
