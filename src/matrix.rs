/*
 * Linear maps of the plane.
 *
 * Portions derived from Casey Duncan's Planar package. See the
 * copyright statement below.
 */

/*
 * Copyright (c) 2010 by Casey Duncan
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *
 * * Redistributions of source code must retain the above copyright notice,
 *   this list of conditions and the following disclaimer.
 * * Redistributions in binary form must reproduce the above copyright notice,
 *   this list of conditions and the following disclaimer in the documentation
 *   and/or other materials provided with the distribution.
 * * Neither the name(s) of the copyright holders nor the names of its
 *   contributors may be used to endorse or promote products derived from this
 *   software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AS IS AND ANY EXPRESS OR
 * IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF
 * MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO
 * EVENT SHALL THE COPYRIGHT HOLDERS BE LIABLE FOR ANY DIRECT, INDIRECT,
 * INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
 * LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA,
 * OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
 * LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
 * NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE,
 * EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use std::fmt;
use std::fmt::Display;
use std::ops::Mul;
use std::str::FromStr;

use crate::error::{Result, TransformError};
use crate::geometry::Point;
use crate::tolerance;

/// Return the cosine and sine for the given angle in degrees.
///
/// With special-case handling of multiples of 90 for perfect right angles.
#[inline]
fn cos_sin_deg(deg: f64) -> (f64, f64) {
    let deg_mod = deg % 360.0;
    let deg_norm = if deg_mod < 0.0 { deg_mod + 360.0 } else { deg_mod };

    match deg_norm {
        d if d.abs() < f64::EPSILON || (d - 360.0).abs() < f64::EPSILON => (1.0, 0.0),
        d if (d - 90.0).abs() < f64::EPSILON => (0.0, 1.0),
        d if (d - 180.0).abs() < f64::EPSILON => (-1.0, 0.0),
        d if (d - 270.0).abs() < f64::EPSILON => (0.0, -1.0),
        _ => {
            let rad = deg_norm.to_radians();
            (rad.cos(), rad.sin())
        }
    }
}

/// The line a reflection mirrors points across.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReflectionMode {
    /// The x axis (y = 0).
    AxisX,
    /// The y axis (x = 0).
    AxisY,
    /// The diagonal y = x.
    LineYEqualsX,
    /// The anti-diagonal y = -x.
    LineYEqualsMinusX,
    /// The line y = m·x; needs a slope.
    LineSlope,
}

impl ReflectionMode {
    /// True if the mode can only be built with a slope.
    #[inline]
    pub fn needs_slope(&self) -> bool {
        matches!(self, ReflectionMode::LineSlope)
    }
}

impl FromStr for ReflectionMode {
    type Err = TransformError;

    /// Accepts `x`, `y`, `d` or `y=x`, `-d` or `y=-x`, and `m` or `y=mx`.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "x" | "axis-x" => Ok(ReflectionMode::AxisX),
            "y" | "axis-y" => Ok(ReflectionMode::AxisY),
            "d" | "y=x" => Ok(ReflectionMode::LineYEqualsX),
            "-d" | "y=-x" => Ok(ReflectionMode::LineYEqualsMinusX),
            "m" | "y=mx" => Ok(ReflectionMode::LineSlope),
            _ => Err(TransformError::invalid(format!(
                "unrecognized reflection mode {:?}",
                s.trim()
            ))),
        }
    }
}

impl Display for ReflectionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ReflectionMode::AxisX => "x axis",
            ReflectionMode::AxisY => "y axis",
            ReflectionMode::LineYEqualsX => "y = x",
            ReflectionMode::LineYEqualsMinusX => "y = -x",
            ReflectionMode::LineSlope => "y = mx",
        };
        f.write_str(name)
    }
}

/// Two dimensional linear map.
///
/// Stored row-major as
///
/// | x' |   | a  b | | x |
/// | y' | = | d  e | | y |
///
/// Every operation of the kernel is one of these maps applied about an
/// origin, see [`Matrix2::transform_about`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2 {
    a: f64,
    b: f64,
    d: f64,
    e: f64,
}

impl Matrix2 {
    #[inline]
    pub const fn new(a: f64, b: f64, d: f64, e: f64) -> Self {
        Self { a, b, d, e }
    }

    /// Return the identity map.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Create a counter-clockwise rotation by `angle` degrees.
    #[inline]
    pub fn rotation(angle: f64) -> Self {
        let (ca, sa) = cos_sin_deg(angle);
        Self::new(ca, -sa, sa, ca)
    }

    /// Create a reflection across the line selected by `mode`.
    ///
    /// `slope` is only read for [`ReflectionMode::LineSlope`], where the
    /// mirror line is `y = slope·x`.
    ///
    /// # Errors
    ///
    /// Returns an error when the mode needs a slope and none is supplied.
    pub fn reflection(mode: ReflectionMode, slope: Option<f64>) -> Result<Self> {
        let m = match mode {
            ReflectionMode::AxisX => Self::new(1.0, 0.0, 0.0, -1.0),
            ReflectionMode::AxisY => Self::new(-1.0, 0.0, 0.0, 1.0),
            ReflectionMode::LineYEqualsX => Self::new(0.0, 1.0, 1.0, 0.0),
            ReflectionMode::LineYEqualsMinusX => Self::new(0.0, -1.0, -1.0, 0.0),
            ReflectionMode::LineSlope => {
                let slope = slope.ok_or_else(|| {
                    TransformError::invalid("reflection across y = mx requires a slope")
                })?;
                let two_theta = 2.0 * slope.atan();
                let (c, s) = (two_theta.cos(), two_theta.sin());
                Self::new(c, s, s, -c)
            }
        };
        Ok(m)
    }

    /// Create a non-uniform scaling map.
    ///
    /// # Errors
    ///
    /// Either factor being zero collapses the figure and is rejected.
    pub fn scale(kx: f64, ky: f64) -> Result<Self> {
        if kx == 0.0 || ky == 0.0 {
            return Err(TransformError::invalid(format!(
                "scale factors must be non-zero, got kx = {}, ky = {}",
                kx, ky
            )));
        }
        Ok(Self::new(kx, 0.0, 0.0, ky))
    }

    /// Evaluate the determinant of the map.
    ///
    /// This value is equal to the area scaling factor when the map is
    /// applied to a shape. Reflections have a determinant of -1.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// Return True if this map collapses a shape to zero area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.determinant() == 0.0
    }

    /// The map as a row-major 2x2 array.
    #[inline]
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [[self.a, self.b], [self.d, self.e]]
    }

    /// Compare maps for approximate equality.
    #[inline]
    pub fn almost_equals(&self, other: &Self, precision: Option<f64>) -> bool {
        let precision = tolerance::resolve(precision);
        (self.a - other.a).abs() < precision
            && (self.b - other.b).abs() < precision
            && (self.d - other.d).abs() < precision
            && (self.e - other.e).abs() < precision
    }

    /// Apply the map to a vector.
    #[inline]
    pub fn transform_vector(&self, v: Point) -> Point {
        Point::new(v.x * self.a + v.y * self.b, v.x * self.d + v.y * self.e)
    }

    /// Apply the map to `p` with `origin` as the fixed point:
    /// `M·(p - origin) + origin`.
    #[inline]
    pub fn transform_about(&self, p: Point, origin: Point) -> Point {
        self.transform_vector(p - origin) + origin
    }
}

impl Mul<Point> for Matrix2 {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Point {
        self.transform_vector(p)
    }
}

impl Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "|{:6.2}, {:6.2}|\n|{:6.2}, {:6.2}|",
            self.a, self.b, self.d, self.e
        )
    }
}
