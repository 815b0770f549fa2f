//! polyxform - rotate, reflect and scale 2D polygons about an arbitrary origin
//!
//! The [`kernel`] holds the stateless operations. A [`Session`] applies them
//! one after another to a polygon and can go back to the original. Input
//! collection and drawing belong to a [`Presenter`].
//!
//! ```
//! use polyxform::{Point, Session, Transform};
//!
//! let mut session = Session::create([(1.0, 1.0), (4.0, 1.0), (4.0, 4.0)], Point::new(3.0, 3.0))?;
//! let (_, rotated) = session.apply(&Transform::Rotation { angle_degrees: 90.0 })?;
//! assert_eq!(rotated.points()[0], Point::new(5.0, 1.0));
//! # Ok::<(), polyxform::TransformError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod matrix;
pub mod presenter;
pub mod session;
pub mod tolerance;

pub use error::{Result, TransformError};
pub use geometry::{Point, Polygon};
pub use kernel::{apply_transform, reflect, rotate, scale, Transform};
pub use matrix::{Matrix2, ReflectionMode};
pub use presenter::{drive, Choice, Presenter};
pub use session::Session;
pub use tolerance::{get_epsilon, set_epsilon, DEFAULT_EPSILON};
