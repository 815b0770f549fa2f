//! Stateless transformation kernel.
//!
//! Each operation translates the points so that `origin` sits at (0, 0),
//! applies a 2x2 linear map and translates back. Output has the same length
//! and order as the input.

use std::fmt;
use std::fmt::Display;

use log::debug;

use crate::error::Result;
use crate::geometry::Point;
use crate::matrix::{Matrix2, ReflectionMode};

/// One transformation with its parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// Counter-clockwise rotation, in degrees.
    Rotation { angle_degrees: f64 },
    /// Mirror across a line through the origin. `slope` is read only by
    /// [`ReflectionMode::LineSlope`].
    Reflection {
        mode: ReflectionMode,
        slope: Option<f64>,
    },
    /// Non-uniform scaling; neither factor may be zero.
    Scale { kx: f64, ky: f64 },
}

impl Transform {
    /// Build the linear map this transform applies.
    pub fn matrix(&self) -> Result<Matrix2> {
        match *self {
            Transform::Rotation { angle_degrees } => Ok(Matrix2::rotation(angle_degrees)),
            Transform::Reflection { mode, slope } => Matrix2::reflection(mode, slope),
            Transform::Scale { kx, ky } => Matrix2::scale(kx, ky),
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Transform::Rotation { angle_degrees } => write!(f, "rotate {}°", angle_degrees),
            Transform::Reflection {
                mode: ReflectionMode::LineSlope,
                slope: Some(m),
            } => write!(f, "reflect across y = {}x", m),
            Transform::Reflection { mode, .. } => write!(f, "reflect across {}", mode),
            Transform::Scale { kx, ky } => write!(f, "scale by ({}, {})", kx, ky),
        }
    }
}

fn map_about(points: &[Point], m: &Matrix2, origin: Point) -> Vec<Point> {
    points.iter().map(|&p| m.transform_about(p, origin)).collect()
}

/// Rotate `points` counter-clockwise by `angle_degrees` about `origin`.
pub fn rotate(points: &[Point], angle_degrees: f64, origin: Point) -> Vec<Point> {
    debug!(
        "rotating {} points by {}° about {}",
        points.len(),
        angle_degrees,
        origin
    );
    map_about(points, &Matrix2::rotation(angle_degrees), origin)
}

/// Reflect `points` across the line through `origin` chosen by `mode`.
///
/// # Errors
///
/// Fails with `InvalidParameter` when `mode` is
/// [`ReflectionMode::LineSlope`] and `slope` is `None`.
pub fn reflect(
    points: &[Point],
    mode: ReflectionMode,
    origin: Point,
    slope: Option<f64>,
) -> Result<Vec<Point>> {
    let m = Matrix2::reflection(mode, slope)?;
    debug!("reflecting {} points across {} about {}", points.len(), mode, origin);
    Ok(map_about(points, &m, origin))
}

/// Scale `points` by `kx` horizontally and `ky` vertically about `origin`.
///
/// # Errors
///
/// Fails with `InvalidParameter` when either factor is zero.
pub fn scale(points: &[Point], kx: f64, ky: f64, origin: Point) -> Result<Vec<Point>> {
    let m = Matrix2::scale(kx, ky)?;
    debug!(
        "scaling {} points by ({}, {}) about {}",
        points.len(),
        kx,
        ky,
        origin
    );
    Ok(map_about(points, &m, origin))
}

/// Apply any [`Transform`] to `points` about `origin`.
///
/// # Errors
///
/// Fails with `InvalidParameter` for the same inputs as [`reflect`] and
/// [`scale`].
pub fn apply_transform(points: &[Point], transform: &Transform, origin: Point) -> Result<Vec<Point>> {
    let m = transform.matrix()?;
    debug!("{} on {} points about {}", transform, points.len(), origin);
    Ok(map_about(points, &m, origin))
}
