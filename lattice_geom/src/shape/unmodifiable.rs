use super::{PathElement, ShapeRef, ShapeSource, WindingRule};
use crate::core::errors::ShapeError;
use crate::core::math::{Point3i, Vector3i};

/// Read only view of a shape.
///
/// Queries are forwarded to the borrowed shape, so they always see its current state. The
/// mutators exist for parity with the owned shapes and always fail with
/// [ShapeError::NotSupported], leaving the shape untouched.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let s = Sphere::new(0, 0, 0, 5);
/// let mut view = s.to_unmodifiable();
/// assert!(view.contains_point(pt3(1, 1, 0)));
/// let err = view.translate(vec3(1, 0, 0)).unwrap_err();
/// assert!(err.is_not_supported());
/// ```
#[derive(Debug)]
pub struct UnmodifiableShape<'a, S: ?Sized> {
    inner: &'a S,
}

impl<S: ?Sized> Clone for UnmodifiableShape<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for UnmodifiableShape<'_, S> {}

fn not_supported<T>(operation: &'static str) -> Result<T, ShapeError> {
    Err(ShapeError::NotSupported { operation })
}

impl<'a, S> UnmodifiableShape<'a, S>
where
    S: ShapeSource + ?Sized,
{
    #[inline]
    pub fn new(inner: &'a S) -> Self {
        Self { inner }
    }

    /// Borrowed shape.
    #[inline]
    pub fn get(&self) -> &'a S {
        self.inner
    }

    pub fn translate(&mut self, _v: Vector3i) -> Result<(), ShapeError> {
        not_supported("translate")
    }

    pub fn clear(&mut self) -> Result<(), ShapeError> {
        not_supported("clear")
    }

    pub fn set_center(&mut self, _center: Point3i) -> Result<(), ShapeError> {
        not_supported("set_center")
    }

    pub fn set_radius(&mut self, _radius: i32) -> Result<(), ShapeError> {
        not_supported("set_radius")
    }

    pub fn move_to(&mut self, _x: i32, _y: i32, _z: i32) -> Result<(), ShapeError> {
        not_supported("move_to")
    }

    pub fn line_to(&mut self, _x: i32, _y: i32, _z: i32) -> Result<(), ShapeError> {
        not_supported("line_to")
    }

    pub fn quad_to(
        &mut self,
        _ctrl_x: i32,
        _ctrl_y: i32,
        _ctrl_z: i32,
        _x: i32,
        _y: i32,
        _z: i32,
    ) -> Result<(), ShapeError> {
        not_supported("quad_to")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn curve_to(
        &mut self,
        _ctrl1_x: i32,
        _ctrl1_y: i32,
        _ctrl1_z: i32,
        _ctrl2_x: i32,
        _ctrl2_y: i32,
        _ctrl2_z: i32,
        _x: i32,
        _y: i32,
        _z: i32,
    ) -> Result<(), ShapeError> {
        not_supported("curve_to")
    }

    pub fn close_path(&mut self) -> Result<(), ShapeError> {
        not_supported("close_path")
    }

    pub fn set_winding_rule(&mut self, _winding_rule: WindingRule) -> Result<(), ShapeError> {
        not_supported("set_winding_rule")
    }

    pub fn add_iter<I>(&mut self, _elements: I) -> Result<(), ShapeError>
    where
        I: IntoIterator<Item = PathElement>,
    {
        not_supported("add_iter")
    }
}

impl<S> ShapeSource for UnmodifiableShape<'_, S>
where
    S: ShapeSource + ?Sized,
{
    #[inline]
    fn as_shape_ref(&self) -> ShapeRef<'_> {
        self.inner.as_shape_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{pt3, vec3};
    use crate::shape::{AlignedBox, Path, Sphere};

    #[test]
    fn every_mutator_fails() {
        let path = crate::path_closed![(0, 0, 0), (4, 0, 0), (4, 4, 0)];
        let mut view = path.to_unmodifiable();
        assert!(view.translate(vec3(1, 0, 0)).unwrap_err().is_not_supported());
        assert!(view.clear().is_err());
        assert!(view.move_to(1, 1, 1).is_err());
        assert!(view.line_to(1, 1, 1).is_err());
        assert!(view.quad_to(1, 1, 1, 2, 2, 2).is_err());
        assert!(view.curve_to(1, 1, 1, 2, 2, 2, 3, 3, 3).is_err());
        assert!(view.close_path().is_err());
        assert!(view.set_winding_rule(WindingRule::EvenOdd).is_err());
        assert!(view.add_iter(Path::new().path_iter()).is_err());
        assert!(view.set_radius(3).is_err());
        assert!(view.set_center(pt3(0, 0, 0)).is_err());
        assert_eq!(view.get(), &path);
        assert_eq!(path.element_count(), 4);
    }

    #[test]
    fn view_reads_live_state() {
        let mut b = AlignedBox::from_min_size(0, 0, 0, 2, 2, 0);
        {
            let view = b.to_unmodifiable();
            assert!(view.contains_point(pt3(1, 1, 0)));
        }
        b.translate(vec3(10, 0, 0));
        let view = b.to_unmodifiable();
        assert!(!view.contains_point(pt3(1, 1, 0)));
        assert_eq!(view.bounding_box(), b);

        let s = Sphere::new(0, 0, 0, 2);
        let view = s.to_unmodifiable();
        assert!(view.intersects(&b) == s.intersects(&b));
    }
}
