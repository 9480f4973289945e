//! Evaluation grid
//!
//! # Boundary policy
//!
//! A grid covers `{x0, x0 + h, x0 + 2h, ...}` up to and including `x_end`,
//! within a relative tolerance of [`BOUNDARY_TOLERANCE`]. Built from a step
//! count N it always holds exactly N + 1 points, both endpoints included.
//!
//! Abscissae are computed from the index (`x0 + i·h`) and never by repeated
//! addition: 0.1 is not representable in binary, so after a hundred `x += h`
//! the accumulated error would be ~1e-14 and could add or drop the last
//! point. Two lines built on equal grids therefore have bit-identical x
//! values, which the error aggregator relies on.

use crate::error::{SolveError, SolveResult};

/// Relative tolerance applied when deciding whether the last grid point
/// still lies inside `[x0, x_end]`
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Step size for `n` equal steps over `[x0, x_end]`
///
/// # Errors
///
/// `InvalidParameter` when `n == 0`.
///
/// # Example
///
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use ivp_rs::solver::step_size;
///
/// let h = step_size(30, -4.0, 4.0).unwrap();
/// assert_abs_diff_eq!(h, 0.26667, epsilon = 1e-5);
/// assert!(step_size(0, 0.0, 1.0).is_err());
/// ```
pub fn step_size(n: usize, x0: f64, x_end: f64) -> SolveResult<f64> {
    if n == 0 {
        return Err(SolveError::invalid("n", "number of steps must be at least 1"));
    }
    Ok((x_end - x0) / n as f64)
}

/// Uniform grid over `[x0, x_end]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    x0: f64,
    x_end: f64,
    step: f64,
    steps: usize,
}

impl Grid {
    /// Grid of `n` equal steps
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `n == 0`, a bound is not finite, or
    /// `x_end <= x0`.
    pub fn new(x0: f64, x_end: f64, n: usize) -> SolveResult<Self> {
        check_interval(x0, x_end)?;
        let step = step_size(n, x0, x_end)?;
        if step <= 0.0 {
            return Err(SolveError::invalid(
                "n",
                format!("{n} steps over [{x0}, {x_end}] give a zero step size"),
            ));
        }

        Ok(Self {
            x0,
            x_end,
            step,
            steps: n,
        })
    }

    /// Grid with an explicit step size
    ///
    /// The step count is the largest `k` with `x0 + k·h <= x_end` (tolerance
    /// included). When `h` does not divide the interval the last point falls
    /// short of `x_end`; this is logged as a warning.
    pub fn with_step(x0: f64, x_end: f64, step: f64) -> SolveResult<Self> {
        check_interval(x0, x_end)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(SolveError::invalid("h", format!("step size must be positive, got {step}")));
        }

        let ratio = (x_end - x0) / step;
        let steps = (ratio + BOUNDARY_TOLERANCE * ratio.max(1.0)).floor();

        if steps < 1.0 {
            return Err(SolveError::invalid(
                "h",
                format!("step size {step} is larger than the interval [{x0}, {x_end}]"),
            ));
        }
        if steps > usize::MAX as f64 {
            return Err(SolveError::invalid("h", format!("step size {step} is too small")));
        }

        let steps = steps as usize;
        if (ratio - steps as f64).abs() > BOUNDARY_TOLERANCE * ratio.max(1.0) {
            log::warn!(
                "step size {step} does not divide [{x0}, {x_end}]: last point at x={}",
                x0 + steps as f64 * step
            );
        }

        Ok(Self {
            x0,
            x_end,
            step,
            steps,
        })
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// Step size h
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of steps N
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of points (N + 1)
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always false: a grid has at least its two endpoints
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Abscissa of point `index`
    pub fn x(&self, index: usize) -> f64 {
        self.x0 + index as f64 * self.step
    }

    /// All abscissae, in increasing order
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.x(i))
    }
}

fn check_interval(x0: f64, x_end: f64) -> SolveResult<()> {
    if !x0.is_finite() {
        return Err(SolveError::invalid("x0", format!("must be finite, got {x0}")));
    }
    if !x_end.is_finite() {
        return Err(SolveError::invalid("x_end", format!("must be finite, got {x_end}")));
    }
    if !(x_end - x0).is_finite() {
        return Err(SolveError::invalid(
            "x_end",
            format!("interval [{x0}, {x_end}] is too wide to represent"),
        ));
    }
    if x_end <= x0 {
        return Err(SolveError::invalid(
            "x_end",
            format!("must be greater than x0 ({x_end} <= {x0})"),
        ));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
