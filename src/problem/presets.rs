//! Built-in equations with known closed-form solutions
//!
//! Each preset bundles a derivative, its exact solution family and the
//! integration constant, and reports domain violations as
//! [`EvalError::Domain`] instead of letting NaN leak into the results.
//!
//! | Preset      | y'                  | y(x)                          |
//! |-------------|---------------------|-------------------------------|
//! | `Quadratic` | x² − 2y             | c·e^(−2x) + x²/2 − x/2 + 1/4  |
//! | `Logistic`  | y²·eˣ − 2y          | e^(−x) / (c·eˣ + 1)           |
//! | `Riccati`   | 4/x² − y/x − y²     | 2(cx⁴ − 1) / (x(cx⁴ + 1))     |

use std::fmt;
use std::str::FromStr;

use crate::problem::{ClosedForm, Equation, EvalError};
use crate::solver::{InitialConditions, Scenario};

/// Selectable preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Quadratic,
    Logistic,
    Riccati,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Quadratic, Preset::Logistic, Preset::Riccati];

    /// Identifier accepted by [`FromStr`]
    pub fn id(&self) -> &'static str {
        match self {
            Preset::Quadratic => "quadratic",
            Preset::Logistic => "logistic",
            Preset::Riccati => "riccati",
        }
    }

    /// Human-readable equation
    pub fn equation_text(&self) -> &'static str {
        match self {
            Preset::Quadratic => "y' = x^2 - 2y",
            Preset::Logistic => "y' = y^2 e^x - 2y",
            Preset::Riccati => "y' = 4/x^2 - y/x - y^2",
        }
    }

    /// Initial conditions the preset is usually shown with
    pub fn default_conditions(&self) -> InitialConditions {
        match self {
            Preset::Quadratic => InitialConditions::new(0.0, 1.0, 1.0),
            Preset::Logistic => InitialConditions::new(-4.0, 1.0, 4.0),
            Preset::Riccati => InitialConditions::new(1.0, 1.0, 7.0),
        }
    }

    /// Step counts `(n_min, n_max)` of the usual global-error sweep
    ///
    /// Wide enough that the upper half of the sweep is in the asymptotic
    /// regime for the default conditions of every method.
    pub fn default_sweep(&self) -> (usize, usize) {
        match self {
            Preset::Quadratic => (5, 50),
            Preset::Logistic | Preset::Riccati => (20, 200),
        }
    }

    /// Build a scenario for the given conditions
    pub fn scenario(&self, conditions: InitialConditions) -> Scenario {
        match self {
            Preset::Quadratic => Scenario::new(Box::new(Quadratic), Box::new(Quadratic), conditions),
            Preset::Logistic => Scenario::new(Box::new(Logistic), Box::new(Logistic), conditions),
            Preset::Riccati => Scenario::new(Box::new(Riccati), Box::new(Riccati), conditions),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quadratic" => Ok(Preset::Quadratic),
            "logistic" | "variant8" => Ok(Preset::Logistic),
            "riccati" | "variant9" => Ok(Preset::Riccati),
            other => Err(format!(
                "unknown preset '{other}', expected one of: quadratic, logistic, riccati"
            )),
        }
    }
}

fn non_zero(value: f64, what: &str) -> Result<f64, EvalError> {
    if value == 0.0 {
        Err(EvalError::domain(format!("division by zero: {what} = 0")))
    } else {
        Ok(value)
    }
}

// =================================================================================================
// y' = x² − 2y
// =================================================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Quadratic;

impl Equation for Quadratic {
    fn derivative(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        Ok(x * x - 2.0 * y)
    }
}

impl ClosedForm for Quadratic {
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError> {
        Ok((y0 - x0 * x0 / 2.0 + x0 / 2.0 - 0.25) * (2.0 * x0).exp())
    }

    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError> {
        Ok(c * (-2.0 * x).exp() + x * x / 2.0 - x / 2.0 + 0.25)
    }
}

// =================================================================================================
// y' = y²·eˣ − 2y
// =================================================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Logistic;

impl Equation for Logistic {
    fn derivative(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        Ok(y * y * x.exp() - 2.0 * y)
    }
}

impl ClosedForm for Logistic {
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError> {
        let denominator = non_zero(y0 * x0.exp(), "y0 * e^x0")?;
        Ok(((-x0).exp() - y0) / denominator)
    }

    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError> {
        let denominator = non_zero(c * x.exp() + 1.0, "c * e^x + 1")?;
        Ok((-x).exp() / denominator)
    }
}

// =================================================================================================
// y' = 4/x² − y/x − y²
// =================================================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Riccati;

impl Equation for Riccati {
    fn derivative(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        let x = non_zero(x, "x")?;
        Ok(4.0 / (x * x) - y / x - y * y)
    }
}

impl ClosedForm for Riccati {
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError> {
        let x0 = non_zero(x0, "x0")?;
        let denominator = non_zero(2.0 - x0 * y0, "2 - x0 * y0")?;
        Ok((2.0 + x0 * y0) / x0.powi(4) / denominator)
    }

    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError> {
        let cx4 = c * x.powi(4);
        let denominator = non_zero(x * (cx4 + 1.0), "x * (c * x^4 + 1)")?;
        Ok(2.0 * (cx4 - 1.0) / denominator)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
