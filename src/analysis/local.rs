//! Local truncation error on one grid

use crate::error::{Mismatch, SolveError, SolveResult};
use crate::problem::{Line, Point};

/// Pointwise |y_method − y_exact| for one solver line
///
/// The output line keeps the solver's name and abscissae.
///
/// # Errors
///
/// `GridMismatch` when the two lines differ in length or when an abscissa
/// differs at any index. Both lines must come from the same [`Grid`], in
/// which case their x values are bit-identical; nothing is interpolated or
/// truncated.
///
/// [`Grid`]: crate::solver::Grid
pub fn local_truncation_error(line: &Line, exact: &Line) -> SolveResult<Line> {
    check_same_grid(line, exact)?;

    let points = line
        .points()
        .iter()
        .zip(exact.points())
        .map(|(p, e)| Point::new(p.x, (p.y - e.y).abs()))
        .collect();

    Ok(Line::new(line.name(), points))
}

/// [`local_truncation_error`] for every line, in input order
///
/// ```rust
/// use ivp_rs::analysis::local_truncation_errors;
/// use ivp_rs::problem::presets::Quadratic;
/// use ivp_rs::solver::{ExactSolver, Grid, Method};
///
/// let grid = Grid::new(0.0, 1.0, 10)?;
/// let exact = ExactSolver.solve(&Quadratic, &grid, 1.0)?;
/// let lines = vec![Method::Euler.solver().solve(&Quadratic, &grid, 1.0)?];
///
/// let errors = local_truncation_errors(&lines, &exact)?;
/// assert_eq!(errors[0].name(), "Euler's method");
/// assert_eq!(errors[0].points()[0].y, 0.0);
/// # Ok::<(), ivp_rs::SolveError>(())
/// ```
pub fn local_truncation_errors(lines: &[Line], exact: &Line) -> SolveResult<Vec<Line>> {
    lines
        .iter()
        .map(|line| local_truncation_error(line, exact))
        .collect()
}

fn check_same_grid(line: &Line, exact: &Line) -> SolveResult<()> {
    let mismatch = |kind| SolveError::GridMismatch {
        line: line.name().to_string(),
        kind,
    };

    if line.len() != exact.len() {
        return Err(mismatch(Mismatch::Length {
            expected: exact.len(),
            found: line.len(),
        }));
    }

    let misplaced = line
        .xs()
        .zip(exact.xs())
        .enumerate()
        .find(|(_, (found, expected))| found != expected);

    match misplaced {
        Some((index, (found, expected))) => Err(mismatch(Mismatch::Abscissa {
            index,
            expected,
            found,
        })),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, points: &[(f64, f64)]) -> Line {
        Line::new(name, points.iter().copied().map(Point::from).collect())
    }

    #[test]
    fn test_lte_is_absolute_difference() {
        let exact = line("Exact solution", &[(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
        let euler = line("Euler's method", &[(0.0, 1.0), (0.5, 2.5), (1.0, 2.0)]);

        let lte = local_truncation_error(&euler, &exact).unwrap();

        assert_eq!(lte.name(), "Euler's method");
        let ys: Vec<f64> = lte.ys().collect();
        assert_eq!(ys, vec![0.0, 0.5, 1.0]);
        let xs: Vec<f64> = lte.xs().collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_lte_length_mismatch() {
        let exact = line("Exact solution", &[(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
        let short = line("Euler's method", &[(0.0, 1.0), (0.5, 2.0)]);

        let err = local_truncation_error(&short, &exact).unwrap_err();
        match err {
            SolveError::GridMismatch { line, kind } => {
                assert_eq!(line, "Euler's method");
                assert_eq!(kind, Mismatch::Length { expected: 3, found: 2 });
            }
            other => panic!("expected grid mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_lte_abscissa_mismatch() {
        let exact = line("Exact solution", &[(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
        let shifted = line("Heun", &[(0.0, 1.0), (0.5 + 1e-15, 2.0), (1.0, 3.0)]);

        let err = local_truncation_error(&shifted, &exact).unwrap_err();
        assert!(matches!(
            err,
            SolveError::GridMismatch { kind: Mismatch::Abscissa { index: 1, .. }, .. }
        ));
    }

    #[test]
    fn test_lte_keeps_input_order() {
        let exact = line("Exact solution", &[(0.0, 0.0), (1.0, 0.0)]);
        let lines = vec![
            line("b", &[(0.0, 1.0), (1.0, 1.0)]),
            line("a", &[(0.0, 2.0), (1.0, 2.0)]),
        ];

        let errors = local_truncation_errors(&lines, &exact).unwrap();
        let names: Vec<&str> = errors.iter().map(Line::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_lte_first_failure_wins() {
        let exact = line("Exact solution", &[(0.0, 0.0), (1.0, 0.0)]);
        let lines = vec![line("ok", &[(0.0, 1.0), (1.0, 1.0)]), line("bad", &[(0.0, 1.0)])];

        let err = local_truncation_errors(&lines, &exact).unwrap_err();
        assert!(matches!(err, SolveError::GridMismatch { ref line, .. } if line == "bad"));
    }
}
