//! Mock equations for testing
//!
//! These equations have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

use ivp_rs::problem::{ClosedForm, Equation, EvalError};
use ivp_rs::solver::{InitialConditions, Scenario};

// =================================================================================================
// Exponential Decay: y' = -k*y
// =================================================================================================

/// Exponential decay: y' = -k*y
///
/// Analytical solution: y(x) = c * exp(-k*x), c = y0 * exp(k*x0)
#[derive(Debug, Clone, Copy)]
pub struct ExponentialDecay {
    pub rate: f64,
}

impl ExponentialDecay {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Equation for ExponentialDecay {
    fn derivative(&self, _x: f64, y: f64) -> Result<f64, EvalError> {
        Ok(-self.rate * y)
    }
}

impl ClosedForm for ExponentialDecay {
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError> {
        Ok(y0 * (self.rate * x0).exp())
    }

    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError> {
        Ok(c * (-self.rate * x).exp())
    }
}

// =================================================================================================
// Constant Growth: y' = r
// =================================================================================================

/// Constant growth: y' = r
///
/// Analytical solution: y(x) = r*x + c. Every method is exact on it.
#[derive(Debug, Clone, Copy)]
pub struct ConstantGrowth {
    pub rate: f64,
}

impl ConstantGrowth {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Equation for ConstantGrowth {
    fn derivative(&self, _x: f64, _y: f64) -> Result<f64, EvalError> {
        Ok(self.rate)
    }
}

impl ClosedForm for ConstantGrowth {
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError> {
        Ok(y0 - self.rate * x0)
    }

    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError> {
        Ok(self.rate * x + c)
    }
}

/// Scenario whose equation is also its own exact solution
pub fn scenario<E>(equation: E, x0: f64, y0: f64, x_end: f64) -> Scenario
where
    E: Equation + ClosedForm + Copy + 'static,
{
    Scenario::new(
        Box::new(equation),
        Box::new(equation),
        InitialConditions::new(x0, y0, x_end),
    )
}
