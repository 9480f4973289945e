//! Solving service
//!
//! Orchestrates several solvers over one scenario and hands the resulting
//! lines to a [`Plotter`]. Everything is passed per call: the service holds
//! no state, no registry of solvers and no plotter of its own.
//!
//! | Chart       | Lines                                   | Axes          |
//! |-------------|-----------------------------------------|---------------|
//! | "Solutions" | one per method, then the exact solution | x, y          |
//! | "LTE"       | one per method                          | x, LTE        |
//! | "GTE"       | one per method                          | N, max LTE    |

use crate::analysis::{SweepRange, estimate_order, global_truncation_errors, local_truncation_errors};
use crate::error::SolveResult;
use crate::output::visualization::{PlotConfig, Plotter};
use crate::problem::Line;
use crate::solver::{ExactSolver, Grid, Scenario, Solver};

pub use crate::output::visualization::{GTE_TITLE, LTE_TITLE, SOLUTIONS_TITLE};

/// Render `lines` under the title and axis labels of `chart`
fn render_chart(plotter: &dyn Plotter, chart: &PlotConfig, lines: &[Line]) -> SolveResult<Vec<u8>> {
    Ok(plotter.render(&chart.title, &chart.xlabel, &chart.ylabel, lines)?)
}

/// Run every solver on `grid`, in input order
///
/// Stops at the first failure; the returned
/// [`SolveError::Evaluation`](crate::SolveError::Evaluation) names the
/// failing method.
pub fn solve_all(scenario: &Scenario, grid: &Grid, solvers: &[&dyn Solver]) -> SolveResult<Vec<Line>> {
    solvers
        .iter()
        .map(|solver| solver.solve(scenario.equation.as_ref(), grid, scenario.y0()))
        .collect()
}

/// Evaluate the exact solution of `scenario` on `grid`
pub fn solve_exact(scenario: &Scenario, grid: &Grid) -> SolveResult<Line> {
    ExactSolver.solve(scenario.exact.as_ref(), grid, scenario.y0())
}

/// Method lines followed by the exact line, all on the N-step grid
pub fn solutions(scenario: &Scenario, n: usize, solvers: &[&dyn Solver]) -> SolveResult<Vec<Line>> {
    scenario.validate()?;
    let grid = scenario.grid(n)?;

    let mut lines = solve_all(scenario, &grid, solvers)?;
    lines.push(solve_exact(scenario, &grid)?);
    Ok(lines)
}

/// Local truncation error of each method on the N-step grid
pub fn local_errors(scenario: &Scenario, n: usize, solvers: &[&dyn Solver]) -> SolveResult<Vec<Line>> {
    scenario.validate()?;
    let grid = scenario.grid(n)?;

    let lines = solve_all(scenario, &grid, solvers)?;
    let exact = solve_exact(scenario, &grid)?;
    local_truncation_errors(&lines, &exact)
}

/// Render the "Solutions" chart
pub fn plot_solutions(
    plotter: &dyn Plotter,
    scenario: &Scenario,
    n: usize,
    solvers: &[&dyn Solver],
) -> SolveResult<Vec<u8>> {
    let lines = solutions(scenario, n, solvers)?;
    render_chart(plotter, &PlotConfig::solutions(), &lines)
}

/// Render the "LTE" chart
pub fn plot_local_errors(
    plotter: &dyn Plotter,
    scenario: &Scenario,
    n: usize,
    solvers: &[&dyn Solver],
) -> SolveResult<Vec<u8>> {
    let lines = local_errors(scenario, n, solvers)?;
    render_chart(plotter, &PlotConfig::local_errors(), &lines)
}

/// Render the "GTE" chart
pub fn plot_global_errors(
    plotter: &dyn Plotter,
    scenario: &Scenario,
    range: SweepRange,
    solvers: &[&dyn Solver],
) -> SolveResult<Vec<u8>> {
    let lines = global_truncation_errors(scenario, solvers, range)?;
    render_chart(plotter, &PlotConfig::global_errors(), &lines)
}

/// Everything one comparison request produces
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Method lines, then the exact line
    pub solutions: Vec<Line>,
    pub local_errors: Vec<Line>,
    pub global_errors: Vec<Line>,

    pub solutions_chart: Vec<u8>,
    pub lte_chart: Vec<u8>,
    pub gte_chart: Vec<u8>,
}

impl ComparisonReport {
    /// Empirical convergence order per method, from the global errors
    pub fn orders(&self) -> Vec<(&str, Option<f64>)> {
        self.global_errors
            .iter()
            .map(|line| (line.name(), estimate_order(line)))
            .collect()
    }
}

/// Solve, analyse and render the three charts for one request
///
/// The N-step grid is solved once and shared by the "Solutions" and "LTE"
/// charts; the "GTE" chart sweeps `range`.
///
/// ```rust,ignore
/// use ivp_rs::analysis::SweepRange;
/// use ivp_rs::output::SvgPlotter;
/// use ivp_rs::problem::Preset;
/// use ivp_rs::service::compare;
/// use ivp_rs::solver::Method;
///
/// let scenario = Preset::Logistic.scenario(Preset::Logistic.default_conditions());
/// let report = compare(
///     &SvgPlotter::default(),
///     &scenario,
///     30,
///     SweepRange::new(10, 60)?,
///     &Method::solvers(&Method::ALL),
/// )?;
/// std::fs::write("solutions.svg", &report.solutions_chart)?;
/// ```
pub fn compare(
    plotter: &dyn Plotter,
    scenario: &Scenario,
    n: usize,
    range: SweepRange,
    solvers: &[&dyn Solver],
) -> SolveResult<ComparisonReport> {
    scenario.validate()?;
    let grid = scenario.grid(n)?;
    log::debug!(
        "comparing {} method(s) on {} with N = {n}, sweep {range}",
        solvers.len(),
        scenario.conditions
    );

    let mut solutions = solve_all(scenario, &grid, solvers)?;
    let exact = solve_exact(scenario, &grid)?;
    let local_errors = local_truncation_errors(&solutions, &exact)?;
    solutions.push(exact);

    let global_errors = global_truncation_errors(scenario, solvers, range)?;

    let solutions_chart = render_chart(plotter, &PlotConfig::solutions(), &solutions)?;
    let lte_chart = render_chart(plotter, &PlotConfig::local_errors(), &local_errors)?;
    let gte_chart = render_chart(plotter, &PlotConfig::global_errors(), &global_errors)?;

    Ok(ComparisonReport {
        solutions,
        local_errors,
        global_errors,
        solutions_chart,
        lte_chart,
        gte_chart,
    })
}
