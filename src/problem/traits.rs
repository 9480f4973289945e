//! Caller-supplied functions
//!
//! This module defines what the numerical core needs from the outside world:
//! - `Equation`: the derivative f(x, y) = y'
//! - `ClosedForm`: the exact solution F(x, c) and its constant C(x0, y0)
//! - `EvalError`: how those functions report a failure
//!
//! Plain closures implement both capabilities, so callers rarely need a
//! dedicated type.

use thiserror::Error;

// =================================================================================================
// Evaluation errors
// =================================================================================================

/// Failure of a caller-supplied function
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The arguments are outside the function's domain (division by zero,
    /// logarithm of a negative number, ...)
    #[error("domain error: {0}")]
    Domain(String),

    /// The function returned NaN or an infinity
    #[error("non-finite value {value}")]
    NonFinite { value: f64 },
}

impl EvalError {
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}

/// Reject NaN and infinities
pub(crate) fn ensure_finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { value })
    }
}

// =================================================================================================
// Equation (derivative)
// =================================================================================================

/// First-order ODE right-hand side: y' = f(x, y)
///
/// Implementations must be pure: the same arguments always give the same
/// answer. `Send + Sync` lets the global error sweep evaluate one equation
/// from several worker threads.
///
/// # Example
///
/// ```rust
/// use ivp_rs::problem::{Equation, EvalError};
///
/// let f = |x: f64, y: f64| -> Result<f64, EvalError> { Ok(x * x - 2.0 * y) };
/// assert_eq!(f.derivative(1.0, 1.0), Ok(-1.0));
/// ```
pub trait Equation: Send + Sync {
    fn derivative(&self, x: f64, y: f64) -> Result<f64, EvalError>;
}

impl<F> Equation for F
where
    F: Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync,
{
    fn derivative(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        self(x, y)
    }
}

// =================================================================================================
// Closed form (exact solution)
// =================================================================================================

/// Analytic solution family y = F(x, c) with its integration constant
pub trait ClosedForm: Send + Sync {
    /// C(x0, y0): the constant that makes F pass through the initial point
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError>;

    /// F(x, c)
    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError>;
}

/// [`ClosedForm`] built from two closures
///
/// ```rust
/// use ivp_rs::problem::{closed_form, ClosedForm, EvalError};
///
/// // y' = -y  =>  y = c * exp(-x)
/// let exact = closed_form(
///     |x: f64, c: f64| -> Result<f64, EvalError> { Ok(c * (-x).exp()) },
///     |x0: f64, y0: f64| -> Result<f64, EvalError> { Ok(y0 * x0.exp()) },
/// );
/// let c = exact.constant(0.0, 2.0).unwrap();
/// assert_eq!(exact.value(0.0, c), Ok(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClosedFormFn<V, C> {
    value: V,
    constant: C,
}

pub fn closed_form<V, C>(value: V, constant: C) -> ClosedFormFn<V, C>
where
    V: Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync,
    C: Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync,
{
    ClosedFormFn { value, constant }
}

impl<V, C> ClosedForm for ClosedFormFn<V, C>
where
    V: Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync,
    C: Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync,
{
    fn constant(&self, x0: f64, y0: f64) -> Result<f64, EvalError> {
        (self.constant)(x0, y0)
    }

    fn value(&self, x: f64, c: f64) -> Result<f64, EvalError> {
        (self.value)(x, c)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closure_is_an_equation() {
        let f = |x: f64, y: f64| -> Result<f64, EvalError> { Ok(x + y) };
        assert_eq!(f.derivative(1.0, 2.0), Ok(3.0));
    }

    #[test]
    fn test_equation_failure_is_propagated() {
        let f = |x: f64, _y: f64| -> Result<f64, EvalError> {
            if x == 0.0 {
                Err(EvalError::domain("x must be non-zero"))
            } else {
                Ok(1.0 / x)
            }
        };

        assert_eq!(f.derivative(2.0, 0.0), Ok(0.5));
        assert_eq!(
            f.derivative(0.0, 0.0),
            Err(EvalError::Domain("x must be non-zero".to_string()))
        );
    }

    #[test]
    fn test_boxed_equation() {
        let f: Box<dyn Equation> = Box::new(|_x: f64, y: f64| -> Result<f64, EvalError> { Ok(-y) });
        assert_eq!(f.derivative(0.0, 3.0), Ok(-3.0));
    }

    #[test]
    fn test_closed_form_round_trip_through_initial_point() {
        let exact = closed_form(
            |x: f64, c: f64| -> Result<f64, EvalError> { Ok(c * (-x).exp()) },
            |x0: f64, y0: f64| -> Result<f64, EvalError> { Ok(y0 * x0.exp()) },
        );

        let c = exact.constant(1.0, 3.0).unwrap();
        let y = exact.value(1.0, c).unwrap();
        assert_relative_eq!(y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.5), Ok(1.5));
        assert!(matches!(ensure_finite(f64::NAN), Err(EvalError::NonFinite { .. })));
        assert_eq!(
            ensure_finite(f64::INFINITY),
            Err(EvalError::NonFinite { value: f64::INFINITY })
        );
    }

    #[test]
    fn test_eval_error_messages() {
        assert_eq!(EvalError::domain("log of -1").to_string(), "domain error: log of -1");
        assert_eq!(
            EvalError::NonFinite { value: f64::INFINITY }.to_string(),
            "non-finite value inf"
        );
    }
}
