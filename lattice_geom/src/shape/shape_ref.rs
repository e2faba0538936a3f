//! Closed set of shape variants and the pairwise predicates between them.

use super::internal::circle_perimeter::{
    circle_intersects_box, circle_intersects_segment, circles_intersect,
};
use super::internal::path_crossings::{
    circle_crossings_from_path, rect_crossings_from_path, segment_crossings_from_path,
};
use super::internal::path_shadow::{path_crossings_from_shadow, PathShadow};
use super::internal::segment_intersect::{box_intersects_segment, segments_intersect};
use super::{
    AlignedBox, CrossingComputationType, FlatteningOptions, FlatteningPathIter, MultiShape, Path,
    PathElement, PathIterator, Segment, ShapePathIter, ShapePointIter, Sphere, SHAPE_INTERSECTS,
};
use crate::core::errors::ShapeError;
use crate::core::math::{Point3i, Vector3i};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Borrowed view of any shape variant.
///
/// Every predicate between two shapes is answered here by matching both operands, see
/// [ShapeRef::intersects] and [ShapeRef::contains_shape].
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let b = AlignedBox::from_min_size(0, 0, 0, 10, 10, 0);
/// let s = Sphere::new(5, 5, 0, 2);
/// let seg = Segment::new(-5, 5, 0, 20, 5, 0);
///
/// assert!(ShapeRef::from(&b).contains_shape(ShapeRef::from(&s)));
/// assert!(ShapeRef::from(&s).intersects(ShapeRef::from(&seg)));
/// assert!(!ShapeRef::from(&b).contains_shape(ShapeRef::from(&seg)));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Segment(&'a Segment),
    AlignedBox(&'a AlignedBox),
    Sphere(&'a Sphere),
    Path(&'a Path),
    Multi(&'a MultiShape),
}

impl<'a> From<&'a Segment> for ShapeRef<'a> {
    #[inline]
    fn from(value: &'a Segment) -> Self {
        ShapeRef::Segment(value)
    }
}

impl<'a> From<&'a AlignedBox> for ShapeRef<'a> {
    #[inline]
    fn from(value: &'a AlignedBox) -> Self {
        ShapeRef::AlignedBox(value)
    }
}

impl<'a> From<&'a Sphere> for ShapeRef<'a> {
    #[inline]
    fn from(value: &'a Sphere) -> Self {
        ShapeRef::Sphere(value)
    }
}

impl<'a> From<&'a Path> for ShapeRef<'a> {
    #[inline]
    fn from(value: &'a Path) -> Self {
        ShapeRef::Path(value)
    }
}

impl<'a> From<&'a MultiShape> for ShapeRef<'a> {
    #[inline]
    fn from(value: &'a MultiShape) -> Self {
        ShapeRef::Multi(value)
    }
}

impl<'a> From<&'a Shape> for ShapeRef<'a> {
    #[inline]
    fn from(value: &'a Shape) -> Self {
        match value {
            Shape::Segment(s) => ShapeRef::Segment(s),
            Shape::AlignedBox(b) => ShapeRef::AlignedBox(b),
            Shape::Sphere(s) => ShapeRef::Sphere(s),
            Shape::Path(p) => ShapeRef::Path(p),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $e:expr) => {
        match $self {
            ShapeRef::Segment($s) => $e,
            ShapeRef::AlignedBox($s) => $e,
            ShapeRef::Sphere($s) => $e,
            ShapeRef::Path($s) => $e,
            ShapeRef::Multi($s) => $e,
        }
    };
}

/// Euclidean distance check between two circles without overflow.
fn sphere_contains_sphere(outer: &Sphere, inner: &Sphere) -> bool {
    let (ra, rb) = (i64::from(outer.radius()), i64::from(inner.radius()));
    if ra < rb {
        return false;
    }
    let d2 = outer.center().distance_squared(&inner.center());
    d2 <= (ra - rb) * (ra - rb)
}

/// Flattened outline points of a path, moves included.
fn flattened_vertices(path: &Path) -> impl Iterator<Item = Point3i> + '_ {
    FlatteningPathIter::new(path.path_iter(), FlatteningOptions::new()).map(|e| e.to())
}

/// Shorten both borrows to a common lifetime so swapped operands can share a match arm.
#[inline]
fn common_lifetime<'x>(a: ShapeRef<'x>, b: ShapeRef<'x>) -> (ShapeRef<'x>, ShapeRef<'x>) {
    (a, b)
}

#[inline]
fn intersects_from_crossings(crossings: i32, area_mask: i32) -> bool {
    crossings == SHAPE_INTERSECTS || (crossings & area_mask) != 0
}

impl<'a> ShapeRef<'a> {
    pub fn bounding_box(self) -> AlignedBox {
        dispatch!(self, s => s.bounding_box())
    }

    pub fn is_empty(self) -> bool {
        dispatch!(self, s => s.is_empty())
    }

    pub fn generation(self) -> u64 {
        dispatch!(self, s => s.generation())
    }

    pub fn contains_point(self, p: Point3i) -> bool {
        dispatch!(self, s => s.contains_point(p))
    }

    pub fn contains_box(self, b: &AlignedBox) -> bool {
        dispatch!(self, s => s.contains_box(b))
    }

    pub fn closest_point_to(self, p: Point3i) -> Point3i {
        dispatch!(self, s => s.closest_point_to(p))
    }

    pub fn farthest_point_to(self, p: Point3i) -> Point3i {
        dispatch!(self, s => s.farthest_point_to(p))
    }

    pub fn path_iter(self) -> ShapePathIter<'a> {
        match self {
            ShapeRef::Segment(s) => ShapePathIter::Segment(s.path_iter()),
            ShapeRef::AlignedBox(b) => ShapePathIter::AlignedBox(b.path_iter()),
            ShapeRef::Sphere(s) => ShapePathIter::Sphere(s.path_iter()),
            ShapeRef::Path(p) => ShapePathIter::Path(p.path_iter()),
            ShapeRef::Multi(m) => ShapePathIter::Multi(m.path_iter()),
        }
    }

    pub fn point_iter(self) -> ShapePointIter<'a> {
        match self {
            ShapeRef::Segment(s) => ShapePointIter::Segment(s.point_iter()),
            ShapeRef::AlignedBox(b) => ShapePointIter::AlignedBox(b.point_iter()),
            ShapeRef::Sphere(s) => ShapePointIter::Sphere(s.point_iter()),
            ShapeRef::Path(p) => ShapePointIter::Path(p.point_iter()),
            ShapeRef::Multi(m) => ShapePointIter::Multi(m.point_iter()),
        }
    }

    /// Returns `true` if `other` lies entirely inside this shape.
    ///
    /// An empty multi shape is never contained. A path is contained in another path when none
    /// of its edges touches the outline of the container and each of its parts starts inside.
    pub fn contains_shape(self, other: ShapeRef<'_>) -> bool {
        use ShapeRef as R;
        match (self, other) {
            (_, R::Multi(m)) => {
                !m.is_empty() && m.iter().all(|c| self.contains_shape(ShapeRef::from(c)))
            }
            (R::Multi(m), _) => m.iter().any(|c| ShapeRef::from(c).contains_shape(other)),
            (_, R::AlignedBox(b)) => self.contains_box(b),

            (R::AlignedBox(a), R::Segment(s)) => {
                a.contains_point(s.p1()) && a.contains_point(s.p2())
            }
            (R::AlignedBox(a), R::Sphere(s)) => a.contains_box(&s.bounding_box()),
            (R::AlignedBox(a), R::Path(p)) => p
                .drawable_bounding_box()
                .is_some_and(|bounds| a.contains_box(&bounds)),

            (R::Sphere(a), R::Segment(s)) => a.contains_point(s.p1()) && a.contains_point(s.p2()),
            (R::Sphere(a), R::Sphere(b)) => sphere_contains_sphere(a, b),
            (R::Sphere(a), R::Path(p)) => {
                !p.is_empty() && flattened_vertices(p).all(|v| a.contains_point(v))
            }

            (R::Segment(a), R::Segment(b)) => a.contains_point(b.p1()) && a.contains_point(b.p2()),
            (R::Segment(a), R::Sphere(s)) => s.radius() == 0 && a.contains_point(s.center()),
            (R::Segment(a), R::Path(p)) => {
                !p.is_empty() && flattened_vertices(p).all(|v| a.contains_point(v))
            }

            (R::Path(a), R::Segment(s)) => {
                let (p1, p2) = (s.p1(), s.p2());
                a.contains_point(p1)
                    && a.contains_point(p2)
                    && segment_crossings_from_path(
                        a.path_iter(),
                        p1.x,
                        p1.y,
                        p2.x,
                        p2.y,
                        CrossingComputationType::AutoClose,
                    ) != SHAPE_INTERSECTS
            }
            (R::Path(a), R::Sphere(s)) => {
                let c = s.center();
                let crossings = circle_crossings_from_path(
                    a.path_iter(),
                    c.x,
                    c.y,
                    s.radius(),
                    CrossingComputationType::AutoClose,
                );
                crossings != SHAPE_INTERSECTS
                    && (crossings & a.winding_rule().area_mask()) != 0
            }
            (R::Path(a), R::Path(b)) => {
                if b.is_empty() {
                    return false;
                }
                let shadow = PathShadow::new(a.path_iter(), a.drawable_bounding_box());
                let crossings = path_crossings_from_shadow(
                    b.path_iter(),
                    &shadow,
                    CrossingComputationType::AutoClose,
                );
                crossings != SHAPE_INTERSECTS
                    && b.path_iter().all(|e| match e {
                        PathElement::MoveTo { to } => a.contains_point(to),
                        _ => true,
                    })
            }
        }
    }

    /// Returns `true` if the two shapes share at least one point. The relation is symmetric.
    pub fn intersects(self, other: ShapeRef<'_>) -> bool {
        use ShapeRef as R;
        match common_lifetime(self, other) {
            (R::Multi(m), _) => m.first_shape_intersecting(other).is_some(),
            (_, R::Multi(m)) => m.first_shape_intersecting(self).is_some(),

            (R::Segment(a), R::Segment(b)) => {
                let (a1, a2, b1, b2) = (a.p1(), a.p2(), b.p1(), b.p2());
                segments_intersect(a1.x, a1.y, a2.x, a2.y, b1.x, b1.y, b2.x, b2.y)
            }
            (R::Segment(s), R::AlignedBox(b)) | (R::AlignedBox(b), R::Segment(s)) => {
                let (min, max, p1, p2) = (b.min(), b.max(), s.p1(), s.p2());
                box_intersects_segment(min.x, min.y, max.x, max.y, p1.x, p1.y, p2.x, p2.y)
            }
            (R::Segment(s), R::Sphere(c)) | (R::Sphere(c), R::Segment(s)) => {
                let (center, p1, p2) = (c.center(), s.p1(), s.p2());
                circle_intersects_segment(center.x, center.y, c.radius(), p1.x, p1.y, p2.x, p2.y)
            }
            (R::AlignedBox(a), R::AlignedBox(b)) => a.intersects_box(b),
            (R::AlignedBox(b), R::Sphere(c)) | (R::Sphere(c), R::AlignedBox(b)) => {
                let (center, min, max) = (c.center(), b.min(), b.max());
                circle_intersects_box(center.x, center.y, c.radius(), min.x, min.y, max.x, max.y)
            }
            (R::Sphere(a), R::Sphere(b)) => {
                let (ca, cb) = (a.center(), b.center());
                circles_intersect(ca.x, ca.y, a.radius(), cb.x, cb.y, b.radius())
            }
            (R::Path(p), shape) | (shape, R::Path(p)) => shape.intersects_path_iter(p.path_iter()),
        }
    }

    /// Returns `true` if the shape shares a point with the outline or the area of the path
    /// walked by `iter`. Open paths have no area.
    pub fn intersects_path_iter<I>(self, iter: I) -> bool
    where
        I: PathIterator,
    {
        let computation = CrossingComputationType::SimpleIntersectionWhenNotPolygon;
        let area_mask = iter.winding_rule().area_mask();
        match self {
            ShapeRef::Segment(s) => {
                let (p1, p2) = (s.p1(), s.p2());
                let crossings =
                    segment_crossings_from_path(iter, p1.x, p1.y, p2.x, p2.y, computation);
                intersects_from_crossings(crossings, area_mask)
            }
            ShapeRef::AlignedBox(b) => {
                let (min, max) = (b.min(), b.max());
                let crossings =
                    rect_crossings_from_path(iter, min.x, min.y, max.x, max.y, computation);
                intersects_from_crossings(crossings, area_mask)
            }
            ShapeRef::Sphere(s) => {
                let c = s.center();
                let crossings = circle_crossings_from_path(iter, c.x, c.y, s.radius(), computation);
                intersects_from_crossings(crossings, area_mask)
            }
            ShapeRef::Path(p) => {
                let shadow = PathShadow::new(p.path_iter(), p.drawable_bounding_box());
                let crossings = path_crossings_from_shadow(iter, &shadow, computation);
                intersects_from_crossings(crossings, p.winding_rule().area_mask())
            }
            ShapeRef::Multi(m) => m
                .iter()
                .any(|c| ShapeRef::from(c).intersects_path_iter(iter.restart())),
        }
    }
}

/// Owned shape that can be stored in a [MultiShape].
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let shape: Shape = Sphere::new(0, 0, 0, 3).into();
/// assert!(shape.contains_point(pt3(1, 1, 0)));
///
/// let multi = MultiShape::new();
/// assert!(Shape::try_from(ShapeRef::from(&multi)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "camelCase")
)]
pub enum Shape {
    Segment(Segment),
    AlignedBox(AlignedBox),
    Sphere(Sphere),
    Path(Path),
}

impl Shape {
    pub fn translate(&mut self, v: Vector3i) {
        match self {
            Shape::Segment(s) => s.translate(v),
            Shape::AlignedBox(b) => b.translate(v),
            Shape::Sphere(s) => s.translate(v),
            Shape::Path(p) => p.translate(v),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Shape::Segment(s) => s.clear(),
            Shape::AlignedBox(b) => b.clear(),
            Shape::Sphere(s) => s.clear(),
            Shape::Path(p) => p.clear(),
        }
    }
}

impl From<Segment> for Shape {
    #[inline]
    fn from(value: Segment) -> Self {
        Shape::Segment(value)
    }
}

impl From<AlignedBox> for Shape {
    #[inline]
    fn from(value: AlignedBox) -> Self {
        Shape::AlignedBox(value)
    }
}

impl From<Sphere> for Shape {
    #[inline]
    fn from(value: Sphere) -> Self {
        Shape::Sphere(value)
    }
}

impl From<Path> for Shape {
    #[inline]
    fn from(value: Path) -> Self {
        Shape::Path(value)
    }
}

impl TryFrom<ShapeRef<'_>> for Shape {
    type Error = ShapeError;

    fn try_from(value: ShapeRef<'_>) -> Result<Self, Self::Error> {
        match value {
            ShapeRef::Segment(s) => Ok(Shape::Segment(*s)),
            ShapeRef::AlignedBox(b) => Ok(Shape::AlignedBox(*b)),
            ShapeRef::Sphere(s) => Ok(Shape::Sphere(*s)),
            ShapeRef::Path(p) => Ok(Shape::Path(p.clone())),
            ShapeRef::Multi(_) => Err(ShapeError::NestedMultiShape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::pt3;

    #[test]
    fn intersects_is_symmetric() {
        let b = AlignedBox::from_min_size(0, 0, 0, 4, 4, 0);
        let s = Sphere::new(6, 2, 0, 2);
        let seg = Segment::new(-2, -2, 0, 1, 1, 0);
        let far = Segment::new(10, 0, 0, 12, 1, 0);
        let shapes = [
            ShapeRef::from(&b),
            ShapeRef::from(&s),
            ShapeRef::from(&seg),
            ShapeRef::from(&far),
        ];
        for a in shapes {
            for c in shapes {
                assert_eq!(a.intersects(c), c.intersects(a));
            }
        }
        assert!(shapes[0].intersects(shapes[1]));
        assert!(shapes[0].intersects(shapes[2]));
        assert!(!shapes[0].intersects(shapes[3]));
    }

    #[test]
    fn sphere_containment() {
        let outer = Sphere::new(0, 0, 0, 5);
        let inner = Sphere::new(1, 1, 0, 2);
        let crossing = Sphere::new(4, 0, 0, 2);
        assert!(ShapeRef::from(&outer).contains_shape(ShapeRef::from(&inner)));
        assert!(!ShapeRef::from(&outer).contains_shape(ShapeRef::from(&crossing)));
        assert!(!ShapeRef::from(&inner).contains_shape(ShapeRef::from(&outer)));
    }

    #[test]
    fn segment_only_contains_degenerate_shapes() {
        let seg = Segment::new(0, 0, 0, 10, 0, 0);
        let point = Sphere::new(3, 0, 0, 0);
        let sub = Segment::new(2, 0, 0, 5, 0, 0);
        let b = AlignedBox::from_min_size(2, 0, 0, 2, 0, 0);
        assert!(ShapeRef::from(&seg).contains_shape(ShapeRef::from(&point)));
        assert!(ShapeRef::from(&seg).contains_shape(ShapeRef::from(&sub)));
        assert!(!ShapeRef::from(&seg).contains_shape(ShapeRef::from(&b)));
    }

    #[test]
    fn owned_conversions() {
        let p = crate::path_closed![(0, 0, 0), (4, 0, 0), (4, 4, 0)];
        let shape = Shape::try_from(ShapeRef::from(&p)).unwrap();
        assert_eq!(shape, Shape::Path(p));

        let mut moved: Shape = Segment::new(0, 0, 0, 1, 1, 0).into();
        moved.translate(crate::core::math::vec3(1, 1, 0));
        assert_eq!(moved, Shape::Segment(Segment::new(1, 1, 0, 2, 2, 0)));
        assert_eq!(
            ShapeRef::from(&moved).closest_point_to(pt3(0, 0, 0)),
            pt3(1, 1, 0)
        );
    }
}
