use super::{
    AlignedBox, FlatteningOptions, FlatteningPathIter, MultiShape, Path, PathIterator, Segment,
    Shape, ShapePathIter, ShapePointIter, ShapeRef, Sphere, TransformedPathIter,
    UnmodifiableShape,
};
use crate::core::math::{Point3i, Transform3D, Vector3i};

/// Read capability shared by every shape.
///
/// Implementors only provide [ShapeSource::as_shape_ref], every query is answered by the
/// [ShapeRef] dispatch. All predicates work in the xy plane.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let b = AlignedBox::from_min_size(5, 8, 0, 10, 5, 0);
/// let p = pt3(0, 0, 0);
/// assert_eq!(b.closest_point_to(p), pt3(5, 8, 0));
/// assert_eq!(b.distance_squared(p), 89);
/// assert_eq!(b.distance_l1(p), 13);
/// assert_eq!(b.distance_linf(p), 8);
///
/// let s = Sphere::new(20, 10, 0, 3);
/// assert!(!b.intersects(&s));
/// assert!(b.intersects(&Segment::new(0, 0, 0, 20, 20, 0)));
/// ```
pub trait ShapeSource {
    fn as_shape_ref(&self) -> ShapeRef<'_>;

    #[inline]
    fn bounding_box(&self) -> AlignedBox {
        self.as_shape_ref().bounding_box()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_shape_ref().is_empty()
    }

    /// Counter bumped by every mutation of the shape.
    #[inline]
    fn generation(&self) -> u64 {
        self.as_shape_ref().generation()
    }

    #[inline]
    fn contains_point(&self, p: Point3i) -> bool {
        self.as_shape_ref().contains_point(p)
    }

    #[inline]
    fn contains_box(&self, b: &AlignedBox) -> bool {
        self.as_shape_ref().contains_box(b)
    }

    #[inline]
    fn contains_shape<S>(&self, other: &S) -> bool
    where
        S: ShapeSource + ?Sized,
    {
        self.as_shape_ref().contains_shape(other.as_shape_ref())
    }

    #[inline]
    fn intersects<S>(&self, other: &S) -> bool
    where
        S: ShapeSource + ?Sized,
    {
        self.as_shape_ref().intersects(other.as_shape_ref())
    }

    #[inline]
    fn intersects_path_iter<I>(&self, iter: I) -> bool
    where
        I: PathIterator,
    {
        self.as_shape_ref().intersects_path_iter(iter)
    }

    #[inline]
    fn closest_point_to(&self, p: Point3i) -> Point3i {
        self.as_shape_ref().closest_point_to(p)
    }

    #[inline]
    fn farthest_point_to(&self, p: Point3i) -> Point3i {
        self.as_shape_ref().farthest_point_to(p)
    }

    /// Euclidean distance from `p` to the closest point of the shape.
    #[inline]
    fn distance(&self, p: Point3i) -> f64 {
        p.distance(&self.closest_point_to(p))
    }

    #[inline]
    fn distance_squared(&self, p: Point3i) -> i64 {
        p.distance_squared(&self.closest_point_to(p))
    }

    #[inline]
    fn distance_l1(&self, p: Point3i) -> i64 {
        p.distance_l1(&self.closest_point_to(p))
    }

    #[inline]
    fn distance_linf(&self, p: Point3i) -> i64 {
        p.distance_linf(&self.closest_point_to(p))
    }

    #[inline]
    fn path_iter(&self) -> ShapePathIter<'_> {
        self.as_shape_ref().path_iter()
    }

    /// Path iterator emitting the transformed coordinates. The shape is not modified.
    #[inline]
    fn path_iter_transformed<'t, T>(
        &self,
        transform: &'t T,
    ) -> TransformedPathIter<'t, ShapePathIter<'_>, T>
    where
        T: Transform3D,
    {
        TransformedPathIter::new(self.as_shape_ref().path_iter(), transform)
    }

    /// Path iterator with the curves replaced by lines.
    #[inline]
    fn path_iter_flattened(&self, options: FlatteningOptions) -> FlatteningPathIter<ShapePathIter<'_>> {
        FlatteningPathIter::new(self.as_shape_ref().path_iter(), options)
    }

    #[inline]
    fn point_iter(&self) -> ShapePointIter<'_> {
        self.as_shape_ref().point_iter()
    }

    /// Read only view of the shape, its mutators fail with
    /// [crate::core::errors::ShapeError::NotSupported].
    #[inline]
    fn to_unmodifiable(&self) -> UnmodifiableShape<'_, Self>
    where
        Self: Sized,
    {
        UnmodifiableShape::new(self)
    }
}

/// Write capability shared by every owned shape.
pub trait ShapeSourceMut: ShapeSource {
    fn translate(&mut self, v: Vector3i);

    /// Reset the shape to its empty state.
    fn clear(&mut self);
}

macro_rules! impl_shape_source {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ShapeSource for $ty {
                #[inline]
                fn as_shape_ref(&self) -> ShapeRef<'_> {
                    ShapeRef::$variant(self)
                }
            }

            impl ShapeSourceMut for $ty {
                #[inline]
                fn translate(&mut self, v: Vector3i) {
                    <$ty>::translate(self, v)
                }

                #[inline]
                fn clear(&mut self) {
                    <$ty>::clear(self)
                }
            }
        )*
    };
}

impl_shape_source!(
    Segment => Segment,
    AlignedBox => AlignedBox,
    Sphere => Sphere,
    Path => Path,
    MultiShape => Multi,
);

impl ShapeSource for Shape {
    #[inline]
    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::from(self)
    }
}

impl ShapeSourceMut for Shape {
    #[inline]
    fn translate(&mut self, v: Vector3i) {
        Shape::translate(self, v)
    }

    #[inline]
    fn clear(&mut self) {
        Shape::clear(self)
    }
}

impl ShapeSource for ShapeRef<'_> {
    #[inline]
    fn as_shape_ref(&self) -> ShapeRef<'_> {
        *self
    }
}
