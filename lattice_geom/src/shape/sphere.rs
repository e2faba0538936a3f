use super::internal::circle_perimeter::{
    circle_closest_point, circle_contains_box, circle_contains_point, circle_farthest_point,
    CirclePerimeterIter,
};
use super::{AlignedBox, PathElement, PathIterator, WindingRule};
use crate::core::math::{Point3d, Point3i, Vector3i};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lattice sphere, every predicate works on its circle in the xy plane.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let s = Sphere::new(5, 8, 0, 5);
/// let first: Vec<_> = s.point_iter().take(4).map(|p| (p.x, p.y)).collect();
/// assert_eq!(first, vec![(5, 13), (6, 13), (7, 13), (8, 12)]);
/// assert!(s.contains_point(pt3(5, 8, 0)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Sphere {
    center: Point3i,
    radius: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    generation: u64,
}

impl PartialEq for Sphere {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

impl Eq for Sphere {}

impl Sphere {
    /// Sphere of center `(x, y, z)`. A negative radius is replaced by its absolute value.
    #[inline]
    pub fn new(x: i32, y: i32, z: i32, radius: i32) -> Self {
        Self {
            center: Point3i::new(x, y, z),
            radius: radius.saturating_abs(),
            generation: 0,
        }
    }

    #[inline]
    pub fn center(&self) -> Point3i {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, radius: i32) {
        self.center = Point3i::new(x, y, z);
        self.radius = radius.saturating_abs();
        self.touch();
    }

    pub fn set_center(&mut self, center: Point3i) {
        self.center = center;
        self.touch();
    }

    /// Set the radius, a negative value is replaced by its absolute value.
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius.saturating_abs();
        self.touch();
    }

    /// Returns `true` if the radius is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius == 0
    }

    /// Collapse to a zero radius sphere at the origin.
    pub fn clear(&mut self) {
        self.center = Point3i::zero();
        self.radius = 0;
        self.touch();
    }

    pub fn translate(&mut self, v: Vector3i) {
        self.center = self.center.saturating_add(v);
        self.touch();
    }

    pub fn bounding_box(&self) -> AlignedBox {
        let c = self.center;
        let r = self.radius;
        AlignedBox::from_corners(
            c.x.saturating_sub(r),
            c.y.saturating_sub(r),
            c.z.saturating_sub(r),
            c.x.saturating_add(r),
            c.y.saturating_add(r),
            c.z.saturating_add(r),
        )
    }

    #[inline]
    pub fn contains_point(&self, p: Point3i) -> bool {
        circle_contains_point(self.center.x, self.center.y, self.radius, p.x, p.y)
    }

    #[inline]
    pub fn contains_box(&self, b: &AlignedBox) -> bool {
        let (min, max) = (b.min(), b.max());
        circle_contains_box(
            self.center.x,
            self.center.y,
            self.radius,
            min.x,
            min.y,
            max.x,
            max.y,
        )
    }

    /// Perimeter point closest to `p`, or `p` itself when it is inside.
    #[inline]
    pub fn closest_point_to(&self, p: Point3i) -> Point3i {
        let (x, y) = circle_closest_point(self.center.x, self.center.y, self.radius, p.x, p.y);
        Point3i::new(x, y, p.z)
    }

    #[inline]
    pub fn farthest_point_to(&self, p: Point3i) -> Point3i {
        let (x, y) = circle_farthest_point(self.center.x, self.center.y, self.radius, p.x, p.y);
        Point3i::new(x, y, p.z)
    }

    /// Outline of the circle as four cubic curves.
    #[inline]
    pub fn path_iter(&self) -> SpherePathIter {
        SpherePathIter::new(self.center, self.radius)
    }

    /// Lattice points of the perimeter, clockwise from the top point.
    #[inline]
    pub fn point_iter(&self) -> CirclePerimeterIter {
        CirclePerimeterIter::new(self.center.x, self.center.y, self.center.z, self.radius)
    }

    /// Lattice points of `octant_count` octants of the perimeter starting at `first_octant`
    /// (octant 0 starts at the top point, numbering is clockwise).
    #[inline]
    pub fn point_iter_from(&self, first_octant: u8, octant_count: u8) -> CirclePerimeterIter {
        CirclePerimeterIter::with_octants(
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius,
            first_octant,
            octant_count,
            true,
        )
    }
}

/// Distance of the cubic control points to the end points, for a unit radius quarter circle.
const CTRL_VAL: f64 = 0.552_284_8_f32 as f64;
const PCV: f64 = 0.5 + CTRL_VAL * 0.5;
const NCV: f64 = 0.5 - CTRL_VAL * 0.5;

/// Control points of the four curves in the unit square of the circle, as
/// `[ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]`.
const CTRL_PTS: [[f64; 6]; 4] = [
    [1.0, PCV, PCV, 1.0, 0.5, 1.0],
    [NCV, 1.0, 0.0, PCV, 0.0, 0.5],
    [0.0, NCV, NCV, 0.0, 0.5, 0.0],
    [PCV, 0.0, 1.0, NCV, 1.0, 0.5],
];

/// Path iterator of a sphere: a move to the rightmost point, four cubic curves turning counter
/// clockwise and a close.
///
/// [Iterator::next] truncates the control points to the lattice,
/// [PathIterator::next_precise] returns them unrounded.
#[derive(Debug, Clone)]
pub struct SpherePathIter {
    center: Point3i,
    radius: i32,
    index: u8,
    last: Point3d,
}

impl SpherePathIter {
    fn new(center: Point3i, radius: i32) -> Self {
        Self {
            center,
            radius,
            index: if radius == 0 { 6 } else { 0 },
            last: Point3d::zero(),
        }
    }

    fn unit_to_shape(&self, ux: f64, uy: f64) -> Point3d {
        let x = f64::from(self.center.x) - f64::from(self.radius);
        let y = f64::from(self.center.y) - f64::from(self.radius);
        let dr = 2.0 * f64::from(self.radius);
        Point3d::new(x + dr * ux, y + dr * uy, f64::from(self.center.z))
    }
}

fn truncate(p: Point3d) -> Point3i {
    Point3i::new(p.x as i32, p.y as i32, p.z as i32)
}

impl Iterator for SpherePathIter {
    type Item = PathElement;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_precise().map(|e| e.map(truncate))
    }
}

impl PathIterator for SpherePathIter {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        false
    }

    #[inline]
    fn is_curved(&self) -> bool {
        true
    }

    #[inline]
    fn is_multi_parts(&self) -> bool {
        false
    }

    #[inline]
    fn is_polygon(&self) -> bool {
        true
    }

    #[inline]
    fn restart(&self) -> Self {
        SpherePathIter::new(self.center, self.radius)
    }

    fn next_precise(&mut self) -> Option<PathElement<Point3d>> {
        let move_row = &CTRL_PTS[3];
        let move_point = self.unit_to_shape(move_row[4], move_row[5]);
        let element = match self.index {
            0 => PathElement::MoveTo { to: move_point },
            i @ 1..=4 => {
                let row = &CTRL_PTS[usize::from(i - 1)];
                PathElement::CurveTo {
                    from: self.last,
                    ctrl1: self.unit_to_shape(row[0], row[1]),
                    ctrl2: self.unit_to_shape(row[2], row[3]),
                    to: self.unit_to_shape(row[4], row[5]),
                }
            }
            5 => PathElement::Close {
                from: self.last,
                to: move_point,
            },
            _ => return None,
        };
        self.index += 1;
        self.last = element.to();
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{pt3, vec3};
    use crate::core::traits::FuzzyEq;

    #[test]
    fn curves_are_truncated() {
        let s = Sphere::new(-5, 18, 0, 2);
        let elements: Vec<_> = s.path_iter().collect();
        assert_eq!(elements.len(), 6);
        assert_eq!(elements[0], PathElement::MoveTo { to: pt3(-3, 18, 0) });
        assert_eq!(
            elements[1],
            PathElement::CurveTo {
                from: pt3(-3, 18, 0),
                ctrl1: pt3(-3, 19, 0),
                ctrl2: pt3(-3, 20, 0),
                to: pt3(-5, 20, 0)
            }
        );
        assert_eq!(
            elements[2],
            PathElement::CurveTo {
                from: pt3(-5, 20, 0),
                ctrl1: pt3(-6, 20, 0),
                ctrl2: pt3(-7, 19, 0),
                to: pt3(-7, 18, 0)
            }
        );
        assert_eq!(
            elements[3],
            PathElement::CurveTo {
                from: pt3(-7, 18, 0),
                ctrl1: pt3(-7, 16, 0),
                ctrl2: pt3(-6, 16, 0),
                to: pt3(-5, 16, 0)
            }
        );
        assert_eq!(
            elements[4],
            PathElement::CurveTo {
                from: pt3(-5, 16, 0),
                ctrl1: pt3(-3, 16, 0),
                ctrl2: pt3(-3, 16, 0),
                to: pt3(-3, 18, 0)
            }
        );
        assert_eq!(
            elements[5],
            PathElement::Close {
                from: pt3(-3, 18, 0),
                to: pt3(-3, 18, 0)
            }
        );
    }

    #[test]
    fn precise_control_points() {
        let s = Sphere::new(0, 0, 0, 2);
        let mut iter = s.path_iter();
        iter.next();
        let Some(PathElement::CurveTo { ctrl1, .. }) = iter.next_precise() else {
            panic!("expected a curve");
        };
        assert_fuzzy_eq!(ctrl1.x, 2.0);
        assert_fuzzy_eq!(ctrl1.y, 4.0 * PCV - 2.0);
    }

    #[test]
    fn zero_radius_has_no_outline() {
        let s = Sphere::new(3, 3, 0, 0);
        assert!(s.is_empty());
        assert_eq!(s.path_iter().count(), 0);
        assert_eq!(s.point_iter().collect::<Vec<_>>(), vec![pt3(3, 3, 0)]);
    }

    #[test]
    fn bounding_box_follows_mutations() {
        let mut s = Sphere::new(-5, 18, 0, 2);
        assert_eq!(s.bounding_box(), AlignedBox::from_corners(-7, 16, -2, -3, 20, 2));
        s.translate(vec3(1, 1, 0));
        s.set_radius(-3);
        assert_eq!(s.radius(), 3);
        assert_eq!(s.bounding_box(), AlignedBox::from_corners(-7, 16, -3, -1, 22, 3));
    }
}
