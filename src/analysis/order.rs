//! Empirical convergence order

use crate::problem::{Line, Point};

/// Points of a global-error line that lie in the asymptotic regime
///
/// Coarse grids are often outside it: the error can grow with N or even
/// blow up before it starts to fall like N^-p. The tail is the upper half of
/// the sweep, shortened further so it starts after the last rise of the
/// error. When a rise leaves fewer than two points (round-off noise at the
/// largest N), the upper half is kept.
///
/// ```rust
/// use ivp_rs::analysis::asymptotic_tail;
/// use ivp_rs::problem::{Line, Point};
///
/// let line = Line::new("euler", (1..=10).map(|n| Point::new(n as f64, 1.0 / n as f64)).collect());
/// let tail = asymptotic_tail(&line);
/// assert_eq!(tail.first().map(|p| p.x), Some(6.0));
/// ```
pub fn asymptotic_tail(gte: &Line) -> &[Point] {
    let points = gte.points();
    let half = points.len() / 2;

    let after_last_rise = points
        .windows(2)
        .rposition(|w| w[1].y > w[0].y || !w[1].y.is_finite())
        .map_or(0, |i| i + 2);

    let start = if points.len().saturating_sub(after_last_rise) >= 2 {
        half.max(after_last_rise)
    } else {
        half
    };

    &points[start.min(points.len().saturating_sub(2))..]
}

/// Least-squares convergence order of a global-error line
///
/// Fits `ln(error) = a − p·ln(N)` over the [`asymptotic_tail`] of the
/// points `(N, error)` and returns `p`. Points with a non-positive N or
/// error are skipped (an error of exactly zero carries no slope
/// information).
///
/// Returns `None` when fewer than two usable points remain.
///
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use ivp_rs::analysis::estimate_order;
/// use ivp_rs::problem::{Line, Point};
///
/// let line = Line::new("rk4", (1..=8).map(|n| Point::new(n as f64, 1.0 / (n as f64).powi(4))).collect());
/// assert_abs_diff_eq!(estimate_order(&line).unwrap(), 4.0, epsilon = 1e-9);
/// ```
pub fn estimate_order(gte: &Line) -> Option<f64> {
    let samples: Vec<(f64, f64)> = asymptotic_tail(gte)
        .iter()
        .filter(|p| p.x > 0.0 && p.y > 0.0 && p.x.is_finite() && p.y.is_finite())
        .map(|p| (p.x.ln(), p.y.ln()))
        .collect();

    if samples.len() < 2 {
        return None;
    }

    let count = samples.len() as f64;
    let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / count;
    let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / count;

    let (covariance, variance) = samples.iter().fold((0.0, 0.0), |(cov, var), (x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });

    // all samples at the same N
    if variance == 0.0 {
        return None;
    }

    Some(-covariance / variance)
}
