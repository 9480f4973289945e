//! Numerical methods for y' = f(x, y)
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait,
//! plus the closed-form evaluator used as reference.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(h)
//!   - Cost: 1 function evaluation per step
//!
//! - **[`ImprovedEulerSolver`]**: midpoint-slope Euler
//!   - Order: Second-order O(h²)
//!   - Cost: 2 function evaluations per step
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(h⁴)
//!   - Cost: 4 function evaluations per step
//!
//! - **[`ExactSolver`]**: evaluates F(x, C(x0, y0)) on the grid
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Stateless**: unit structs, shareable across threads
//! - **Self-contained**: only the update rule lives here; the stepping loop
//!   is shared through [`Trajectory`](crate::solver::Trajectory)

mod euler;
mod exact;
mod improved_euler;
mod rk4;

// Re-exports for convenience
pub use euler::EulerSolver;
pub use exact::ExactSolver;
pub use improved_euler::ImprovedEulerSolver;
pub use rk4::RK4Solver;
