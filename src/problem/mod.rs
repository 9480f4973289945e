//! Problem definition
//!
//! This module holds WHAT is solved, independent of HOW:
//!
//! - **`data`**: [`Point`] and [`Line`], the values every other module exchanges
//! - **`traits`**: [`Equation`] (y' = f(x, y)) and [`ClosedForm`] (the exact
//!   solution F(x, c) and its constant C(x0, y0)), plus [`EvalError`]
//! - **`presets`**: ready-made equations with known exact solutions
//!
//! Numerical methods live in [`crate::solver`] and only see these traits.

mod data;
mod traits;
pub mod presets;

pub use data::{Line, Point};
pub use presets::Preset;
pub use traits::{ClosedForm, ClosedFormFn, Equation, EvalError, closed_form};

pub(crate) use traits::ensure_finite;
