//! Integration tests for local and global truncation errors

use approx::assert_relative_eq;
use ivp_rs::analysis::{
    SweepRange, estimate_order, global_truncation_errors, local_truncation_error,
    local_truncation_errors,
};
use ivp_rs::problem::{Line, Point, Preset};
use ivp_rs::solver::{ExactSolver, Grid, Method};
use ivp_rs::{Mismatch, SolveError};

mod common;
use common::{ExponentialDecay, scenario};

#[test]
fn test_local_error_is_absolute_difference() {
    let line = Line::new("m", vec![Point::new(0.0, 1.0), Point::new(0.5, 2.0), Point::new(1.0, 2.5)]);
    let exact = Line::new("e", vec![Point::new(0.0, 1.0), Point::new(0.5, 2.25), Point::new(1.0, 2.0)]);

    let lte = local_truncation_error(&line, &exact).unwrap();

    assert_eq!(lte.name(), "m");
    assert_eq!(lte.points(), &[Point::new(0.0, 0.0), Point::new(0.5, 0.25), Point::new(1.0, 0.5)]);
}

#[test]
fn test_local_errors_on_preset_grid() {
    let preset = Preset::Quadratic;
    let scenario = preset.scenario(preset.default_conditions());
    let grid = scenario.grid(10).unwrap();

    let exact = ExactSolver.solve(scenario.exact.as_ref(), &grid, scenario.y0()).unwrap();
    let lines: Vec<Line> = Method::ALL
        .iter()
        .map(|m| m.solver().solve(scenario.equation.as_ref(), &grid, scenario.y0()).unwrap())
        .collect();

    let errors = local_truncation_errors(&lines, &exact).unwrap();

    assert_eq!(errors.len(), 3);
    for (error, line) in errors.iter().zip(&lines) {
        assert_eq!(error.name(), line.name());
        assert_eq!(error.len(), 11);
        assert!(error.xs().eq(grid.xs()), "abscissae must be the grid's");
        assert!(error.ys().all(|y| y >= 0.0));
    }

    // Euler at x = 0.1: |0.8 - 0.81904806|
    assert_relative_eq!(errors[0].points()[1].y, 0.01904806, epsilon = 1e-7);
}

#[test]
fn test_length_mismatch_is_rejected() {
    let exact = ExactSolver
        .solve(&ExponentialDecay::new(1.0), &Grid::new(0.0, 1.0, 10).unwrap(), 1.0)
        .unwrap();
    let coarse = Method::Euler
        .solver()
        .solve(&ExponentialDecay::new(1.0), &Grid::new(0.0, 1.0, 5).unwrap(), 1.0)
        .unwrap();

    match local_truncation_error(&coarse, &exact) {
        Err(SolveError::GridMismatch { line, kind }) => {
            assert_eq!(line, "Euler's method");
            assert_eq!(kind, Mismatch::Length { expected: 11, found: 6 });
        }
        other => panic!("expected a grid mismatch, got {other:?}"),
    }
}

#[test]
fn test_shifted_grid_is_rejected() {
    let decay = ExponentialDecay::new(1.0);
    let exact = ExactSolver.solve(&decay, &Grid::new(0.0, 1.0, 4).unwrap(), 1.0).unwrap();
    let shifted = Method::RungeKutta4
        .solver()
        .solve(&decay, &Grid::new(0.0, 2.0, 4).unwrap(), 1.0)
        .unwrap();

    let err = local_truncation_errors(&[shifted], &exact).unwrap_err();
    assert!(matches!(
        err,
        SolveError::GridMismatch {
            kind: Mismatch::Abscissa { index: 1, .. },
            ..
        }
    ));
}

#[test]
fn test_global_errors_use_step_count_as_abscissa() {
    let preset = Preset::Quadratic;
    let scenario = preset.scenario(preset.default_conditions());
    let solvers = Method::solvers(&Method::ALL);

    let gte = global_truncation_errors(&scenario, &solvers, SweepRange::new(5, 8).unwrap()).unwrap();

    assert_eq!(gte.len(), 3);
    for (line, method) in gte.iter().zip(Method::ALL) {
        assert_eq!(line.name(), method.name());
        assert_eq!(line.xs().collect::<Vec<_>>(), vec![5.0, 6.0, 7.0, 8.0]);
    }
}

#[test]
fn test_global_error_equals_max_local_error() {
    let scenario = scenario(ExponentialDecay::new(0.7), 0.0, 1.0, 3.0);
    let solvers = Method::solvers(&[Method::Euler]);

    let gte = global_truncation_errors(&scenario, &solvers, SweepRange::new(12, 12).unwrap()).unwrap();

    let grid = scenario.grid(12).unwrap();
    let exact = ExactSolver.solve(scenario.exact.as_ref(), &grid, 1.0).unwrap();
    let euler = solvers[0].solve(scenario.equation.as_ref(), &grid, 1.0).unwrap();
    let lte = local_truncation_error(&euler, &exact).unwrap();

    assert_eq!(gte[0].points(), &[Point::new(12.0, lte.max_y().unwrap())]);
}

#[test]
fn test_global_errors_decrease_with_n() {
    let scenario = scenario(ExponentialDecay::new(0.3), 0.0, 1.0, 5.0);
    let solvers = Method::solvers(&Method::ALL);

    let gte = global_truncation_errors(&scenario, &solvers, SweepRange::new(10, 30).unwrap()).unwrap();

    for line in &gte {
        let ys: Vec<f64> = line.ys().collect();
        assert!(
            ys.windows(2).all(|w| w[1] < w[0]),
            "{} errors not decreasing: {:?}",
            line.name(),
            ys
        );
    }
}

#[test]
fn test_invalid_sweep_ranges() {
    assert!(matches!(
        SweepRange::new(0, 10),
        Err(SolveError::InvalidParameter { what: "n_min", .. })
    ));
    assert!(matches!(
        SweepRange::new(10, 5),
        Err(SolveError::InvalidParameter { what: "n_min", .. })
    ));
    assert_eq!(SweepRange::new(3, 3).unwrap().len(), 1);
}

#[test]
fn test_order_of_flat_line_is_zero() {
    let flat = Line::new("flat", vec![Point::new(10.0, 0.5), Point::new(20.0, 0.5)]);
    let order = estimate_order(&flat).unwrap();
    assert_relative_eq!(order, 0.0, epsilon = 1e-12);
}
