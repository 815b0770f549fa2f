//! Points and polygons.

use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Sub};

use crate::error::{Result, TransformError};
use crate::tolerance;

/// A point (or displacement) in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The coordinate system origin (0, 0).
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Compare points for approximate equality.
    ///
    /// Falls back to the crate-wide epsilon when `precision` is `None`.
    #[inline]
    pub fn almost_equals(&self, other: &Self, precision: Option<f64>) -> bool {
        let precision = tolerance::resolve(precision);
        (self.x - other.x).abs() < precision && (self.y - other.y).abs() < precision
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Ordered vertices of a figure.
///
/// A polygon holds at least two points. The last point is never required to
/// repeat the first; closing the outline is left to whoever draws it, see
/// [`Polygon::closed`].
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Smallest number of vertices a polygon may have.
    pub const MIN_POINTS: usize = 2;

    /// Create a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] when fewer than
    /// [`Polygon::MIN_POINTS`] points are given.
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.len() < Self::MIN_POINTS {
            return Err(TransformError::invalid(format!(
                "a polygon needs at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        Ok(Self { points })
    }

    // Kernel output always has the length of a validated input.
    pub(crate) fn from_transformed(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= Self::MIN_POINTS);
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the last vertex is exactly the first one.
    ///
    /// Exact comparison keeps the answer stable under transforms: a repeated
    /// vertex maps to the same coordinates, a merely nearby one may not.
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// The vertices with the first one appended at the end, ready to be drawn
    /// as a closed outline. Already-closed polygons are returned as is.
    pub fn closed(&self) -> Vec<Point> {
        let mut outline = self.points.clone();
        if !self.is_closed() {
            outline.push(self.points[0]);
        }
        outline
    }

    /// Compare polygons vertex by vertex for approximate equality.
    pub fn almost_equals(&self, other: &Self, precision: Option<f64>) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(p, q)| p.almost_equals(q, precision))
    }

}

impl Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}
