//! Error analysis
//!
//! Compares solver output against the exact solution:
//!
//! - **`local`**: [`local_truncation_errors`], the pointwise error of each
//!   method on one grid
//! - **`global`**: [`global_truncation_errors`], the largest pointwise error
//!   of each method as a function of the step count N, over a [`SweepRange`]
//! - **`order`**: [`estimate_order`], the convergence order read off the
//!   [`asymptotic_tail`] of a global-error line
//!
//! Every function here is a pure computation over its inputs. Lines built on
//! different grids are rejected with
//! [`SolveError::GridMismatch`](crate::SolveError::GridMismatch) rather than
//! compared point by point.

mod global;
mod local;
mod order;

pub use global::{SweepRange, global_truncation_errors};
pub use local::{local_truncation_error, local_truncation_errors};
pub use order::{asymptotic_tail, estimate_order};
