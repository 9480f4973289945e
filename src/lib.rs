//! ivp-rs: Initial Value Problem Solvers and Error Analysis
//!
//! Solves y' = f(x, y), y(x0) = y0 over [x0, X] with fixed-step methods,
//! compares each method with the closed-form solution, and measures the
//! discretization error locally (per grid point) and globally (as a function
//! of the step count).
//!
//! # Architecture
//!
//! ivp-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Numerics**
//!    - The problem defines equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Comparable Output**
//!    - Every line built on the same grid has bit-identical abscissae
//!    - Error analysis refuses lines from different grids
//!
//! # Quick Start
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use ivp_rs::analysis::{estimate_order, global_truncation_errors, local_truncation_errors, SweepRange};
//! use ivp_rs::problem::Preset;
//! use ivp_rs::solver::{ExactSolver, Method};
//!
//! # fn main() -> Result<(), ivp_rs::SolveError> {
//! // 1. Pick a problem
//! let scenario = Preset::Quadratic.scenario(Preset::Quadratic.default_conditions());
//!
//! // 2. Solve on a 10-step grid
//! let grid = scenario.grid(10)?;
//! let exact = ExactSolver.solve(scenario.exact.as_ref(), &grid, scenario.y0())?;
//! let rk4 = Method::RungeKutta4.solver().solve(scenario.equation.as_ref(), &grid, scenario.y0())?;
//!
//! // 3. Compare
//! let lte = local_truncation_errors(&[rk4], &exact)?;
//! assert!(lte[0].max_y().unwrap() < 1e-5);
//!
//! // 4. Sweep N and read off the convergence order
//! let gte = global_truncation_errors(&scenario, &Method::solvers(&Method::ALL), SweepRange::new(10, 40)?)?;
//! let euler_order = estimate_order(&gte[0]).unwrap();
//! assert_abs_diff_eq!(euler_order, 1.0, epsilon = 0.2);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`problem`]: Points, lines, equations and presets
//! - [`solver`]: Grid and numerical methods
//! - [`analysis`]: Local and global truncation errors
//! - [`service`]: Multi-method solving and chart rendering
//! - [`output`]: Visualization and CSV export
//!
//! # Features
//!
//! - `parallel` (default): global-error sweep on the rayon thread pool

// Core modules
pub mod error;
pub mod problem;
pub mod solver;

pub mod analysis;
pub mod output;
pub mod service;

pub use error::{Mismatch, SolveError, SolveResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use ivp_rs::prelude::*;
    //! ```
    pub use crate::analysis::{SweepRange, estimate_order, global_truncation_errors, local_truncation_errors};
    pub use crate::error::{SolveError, SolveResult};
    pub use crate::output::{Plotter, SvgPlotter};
    pub use crate::problem::{ClosedForm, Equation, EvalError, Line, Point, Preset};
    pub use crate::solver::{
        EulerSolver, ExactSolver, Grid, ImprovedEulerSolver, InitialConditions, Method, RK4Solver, Scenario, Solver,
    };
}
