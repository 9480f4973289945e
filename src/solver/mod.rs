//! Numerical solvers
//!
//! This module provides the grid, the stepping methods and the exact-solution
//! evaluator. A solver applies one numerical method to an [`Equation`] on a
//! [`Grid`], starting from an initial value.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Equation y' = f(x, y)
//!    - Exact solution family
//!    - Initial conditions `(x0, y0)` and interval end `X`
//!
//! 2. **Grid** (`Grid`) - WHERE to evaluate
//!    - N equal steps over `[x0, X]`, N + 1 points
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the update rule
//!    - Returns the solution as a [`Line`]
//!    - Independent of the equation
//!
//! The same scenario is solved with every method on many grids by the
//! [`analysis`](crate::analysis) module.
//!
//! # Module Organization
//!
//! - **`grid`**: [`Grid`], [`step_size`] and the boundary policy
//! - **`scenario`**: [`Scenario`] and [`InitialConditions`]
//! - **`traits`**: [`Solver`], [`Trajectory`] and [`Method`]
//! - **`methods`**: [`EulerSolver`], [`ImprovedEulerSolver`], [`RK4Solver`]
//!   and [`ExactSolver`]
//!
//! # Quick Start Example
//!
//! ```rust
//! use ivp_rs::problem::Preset;
//! use ivp_rs::solver::{ExactSolver, Method};
//!
//! let scenario = Preset::Quadratic.scenario(Preset::Quadratic.default_conditions());
//! let grid = scenario.grid(10)?;
//!
//! let exact = ExactSolver.solve(scenario.exact.as_ref(), &grid, scenario.y0())?;
//! for method in Method::ALL {
//!     let line = method.solver().solve(scenario.equation.as_ref(), &grid, scenario.y0())?;
//!     assert_eq!(line.len(), exact.len());
//! }
//! # Ok::<(), ivp_rs::SolveError>(())
//! ```
//!
//! # Error Handling
//!
//! All solver methods return [`SolveResult`](crate::SolveResult). A failing
//! or non-finite evaluation of f aborts the solve with
//! [`SolveError::Evaluation`](crate::SolveError::Evaluation), naming the
//! method, the step and the point the step started from.
//!
//! [`Equation`]: crate::problem::Equation
//! [`Line`]: crate::problem::Line

// =================================================================================================
// Module Declarations
// =================================================================================================
mod grid;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use grid::{BOUNDARY_TOLERANCE, Grid, step_size};
pub use methods::{EulerSolver, ExactSolver, ImprovedEulerSolver, RK4Solver};
pub use scenario::{InitialConditions, Scenario};
pub use traits::{Method, Solver, Trajectory};
