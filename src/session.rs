use log::{debug, trace};

use crate::error::Result;
use crate::geometry::{Point, Polygon};
use crate::kernel::{self, Transform};

/// Holds an original polygon and the result of every transform applied to
/// it so far.
///
/// Each [`Session::apply`] replaces the current polygon with a new one;
/// [`Session::reset`] brings back the original.
#[derive(Clone, Debug)]
pub struct Session {
    original: Polygon,
    current: Polygon,
    origin: Point,
    applied: usize,
}

impl Session {
    /// Start a session on `initial`, transforming about `origin`.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidParameter` when `initial` has fewer than two points.
    pub fn create<P: Into<Point>>(
        initial: impl IntoIterator<Item = P>,
        origin: Point,
    ) -> Result<Self> {
        let original = Polygon::new(initial)?;
        debug!(
            "session created with {} points about {}",
            original.len(),
            origin
        );
        Ok(Self {
            current: original.clone(),
            original,
            origin,
            applied: 0,
        })
    }

    /// Apply `transform` to the current polygon.
    ///
    /// Returns the polygon before and after the transform. On error the
    /// session is left exactly as it was.
    pub fn apply(&mut self, transform: &Transform) -> Result<(Polygon, Polygon)> {
        let points = kernel::apply_transform(self.current.points(), transform, self.origin)?;
        let updated = Polygon::from_transformed(points);
        let previous = std::mem::replace(&mut self.current, updated.clone());
        self.applied += 1;
        debug!("applied {} (step {})", transform, self.applied);
        Ok((previous, updated))
    }

    /// Discard every applied transform and return the original polygon.
    pub fn reset(&mut self) -> &Polygon {
        trace!("reset after {} transforms", self.applied);
        self.current = self.original.clone();
        self.applied = 0;
        &self.current
    }

    #[inline]
    pub fn original(&self) -> &Polygon {
        &self.original
    }

    #[inline]
    pub fn current(&self) -> &Polygon {
        &self.current
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Number of transforms applied since creation or the last reset.
    #[inline]
    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::matrix::ReflectionMode;

    fn square() -> Vec<(f64, f64)> {
        vec![(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]
    }

    #[test]
    fn test_create_rejects_short_input() {
        assert!(matches!(
            Session::create([(0.0, 0.0)], Point::ORIGIN),
            Err(TransformError::InvalidParameter(_))
        ));
        assert!(Session::create(Vec::<Point>::new(), Point::ORIGIN).is_err());
    }

    #[test]
    fn test_create_starts_at_original() {
        let s = Session::create(square(), Point::new(3.0, 3.0)).unwrap();
        assert_eq!(s.current(), s.original());
        assert_eq!(s.origin(), Point::new(3.0, 3.0));
        assert_eq!(s.applied_count(), 0);
    }

    #[test]
    fn test_apply_returns_previous_and_updated() {
        let mut s = Session::create(square(), Point::new(3.0, 3.0)).unwrap();
        let (previous, updated) = s.apply(&Transform::Rotation { angle_degrees: 90.0 }).unwrap();
        assert_eq!(previous, Polygon::new(square()).unwrap());
        assert_eq!(updated.points()[0], Point::new(5.0, 1.0));
        assert_eq!(s.current(), &updated);
        assert_eq!(s.applied_count(), 1);

        // the next step starts from the rotated square
        let (previous, _) = s.apply(&Transform::Scale { kx: 2.0, ky: 2.0 }).unwrap();
        assert_eq!(previous, updated);
        assert_eq!(s.current().points()[0], Point::new(7.0, -1.0));
    }

    #[test]
    fn test_failed_apply_leaves_state_untouched() {
        let mut s = Session::create(square(), Point::ORIGIN).unwrap();
        s.apply(&Transform::Rotation { angle_degrees: 30.0 }).unwrap();
        let before = s.current().clone();

        let err = s.apply(&Transform::Scale { kx: 0.0, ky: 1.0 }).unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameter(_)));
        let err = s
            .apply(&Transform::Reflection { mode: ReflectionMode::LineSlope, slope: None })
            .unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameter(_)));

        assert_eq!(s.current(), &before);
        assert_eq!(s.applied_count(), 1);
    }

    #[test]
    fn test_reset_restores_original_exactly() {
        let transforms = [
            Transform::Rotation { angle_degrees: 33.3 },
            Transform::Reflection { mode: ReflectionMode::LineSlope, slope: Some(0.7) },
            Transform::Scale { kx: -1.5, ky: 0.2 },
            Transform::Reflection { mode: ReflectionMode::LineYEqualsMinusX, slope: None },
        ];
        for n in 0..=12 {
            let mut s = Session::create(square(), Point::new(-2.0, 0.5)).unwrap();
            for t in transforms.iter().cycle().take(n) {
                s.apply(t).unwrap();
            }
            let restored = s.reset().clone();
            assert_eq!(restored, Polygon::new(square()).unwrap());
            assert_eq!(s.current(), s.original());
            assert_eq!(s.applied_count(), 0);
        }
    }

    #[test]
    fn test_original_is_a_copy() {
        let mut input = square();
        let s = Session::create(input.clone(), Point::ORIGIN).unwrap();
        input[0] = (99.0, 99.0);
        assert_eq!(s.original().points()[0], Point::new(1.0, 1.0));
    }
}
