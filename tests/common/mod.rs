//! Common utilities for integration tests

#![allow(dead_code)]

pub mod equations;
pub mod test_helpers;

// Re-export commonly used items
pub use equations::{ConstantGrowth, ExponentialDecay, scenario};
pub use test_helpers::{assert_lines_close, convergence_ratios, final_error};
