//! Point and line containers
//!
//! A [`Line`] is the unit of exchange between solvers, the error aggregator
//! and the plotting collaborator: a name plus the points in evaluation order.

use std::fmt;

use crate::error::SolveResult;

// =================================================================================================
// Point
// =================================================================================================

/// A point on the plane
///
/// Produced once and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// =================================================================================================
// Line
// =================================================================================================

/// A named, ordered sequence of points
///
/// Insertion order is evaluation order (increasing x for solver output,
/// increasing N for global error curves). Fields are private: a line is
/// read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    name: String,
    points: Vec<Point>,
}

impl Line {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Collect a stream of fallible points, stopping at the first error
    ///
    /// The partial line is dropped on error.
    pub fn try_collect<I>(name: impl Into<String>, points: I) -> SolveResult<Self>
    where
        I: IntoIterator<Item = SolveResult<Point>>,
    {
        let points = points.into_iter().collect::<SolveResult<Vec<_>>>()?;
        Ok(Self::new(name, points))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Largest y value, `None` for an empty line
    pub fn max_y(&self) -> Option<f64> {
        self.ys().reduce(f64::max)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    #[test]
    fn test_point_display_four_decimals() {
        assert_eq!(Point::new(0.0003, 0.123456789).to_string(), "(0.0003, 0.1235)");
    }

    #[test]
    fn test_point_tuple_conversion() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));

        let (x, y): (f64, f64) = p.into();
        assert_eq!((x, y), (1.5, -2.0));
    }

    #[test]
    fn test_line_accessors() {
        let line = Line::new(
            "test",
            vec![Point::new(0.0, 1.0), Point::new(0.5, 3.0), Point::new(1.0, 2.0)],
        );

        assert_eq!(line.name(), "test");
        assert_eq!(line.len(), 3);
        assert!(!line.is_empty());
        assert_eq!(line.xs().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
        assert_eq!(line.max_y(), Some(3.0));
        assert_eq!(line.first(), Some(&Point::new(0.0, 1.0)));
        assert_eq!(line.last(), Some(&Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_empty_line_has_no_max() {
        let line = Line::new("empty", Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.max_y(), None);
    }

    #[test]
    fn test_try_collect_stops_on_error() {
        let stream = vec![
            Ok(Point::new(0.0, 0.0)),
            Err(SolveError::invalid("n", "boom")),
            Ok(Point::new(1.0, 1.0)),
        ];

        let result = Line::try_collect("broken", stream);
        assert!(matches!(result, Err(SolveError::InvalidParameter { what: "n", .. })));
    }

    #[test]
    fn test_try_collect_keeps_order() {
        let stream = (0..4).map(|i| Ok(Point::new(i as f64, (i * i) as f64)));
        let line = Line::try_collect("squares", stream).unwrap();
        assert_eq!(line.ys().collect::<Vec<_>>(), vec![0.0, 1.0, 4.0, 9.0]);
    }
}
