use super::internal::segment_intersect::{
    segment_closest_point, segment_contains_point, segment_farthest_point,
};
use super::{AlignedBox, PathElement, PathIterator, WindingRule};
use crate::core::math::{side_of_line, BresenhamLineIter, Point3i, Vector3i};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segment between two lattice points. Equal end points are valid and describe a single point.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let seg = Segment::new(0, 0, 0, 10, 5, 0);
/// assert_eq!(seg.closest_point_to(pt3(1, 1, 0)), pt3(2, 1, 0));
/// assert!(seg.contains_point(pt3(4, 2, 0)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Segment {
    p1: Point3i,
    p2: Point3i,
    #[cfg_attr(feature = "serde", serde(skip))]
    generation: u64,
}

impl PartialEq for Segment {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl Eq for Segment {}

impl Segment {
    #[inline]
    pub fn new(x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) -> Self {
        Self::from_points(Point3i::new(x1, y1, z1), Point3i::new(x2, y2, z2))
    }

    #[inline]
    pub fn from_points(p1: Point3i, p2: Point3i) -> Self {
        Self {
            p1,
            p2,
            generation: 0,
        }
    }

    #[inline]
    pub fn p1(&self) -> Point3i {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Point3i {
        self.p2
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn set(&mut self, x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) {
        self.p1 = Point3i::new(x1, y1, z1);
        self.p2 = Point3i::new(x2, y2, z2);
        self.touch();
    }

    pub fn set_p1(&mut self, p: Point3i) {
        self.p1 = p;
        self.touch();
    }

    pub fn set_p2(&mut self, p: Point3i) {
        self.p2 = p;
        self.touch();
    }

    /// Returns `true` if both end points are equal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.p1 == self.p2
    }

    /// Collapse the segment onto the origin.
    pub fn clear(&mut self) {
        self.p1 = Point3i::zero();
        self.p2 = Point3i::zero();
        self.touch();
    }

    pub fn translate(&mut self, v: Vector3i) {
        self.p1 = self.p1.saturating_add(v);
        self.p2 = self.p2.saturating_add(v);
        self.touch();
    }

    /// Side of `p` relative to the directed line from `p1` to `p2`: `1` on the left, `-1` on
    /// the right, `0` on the line.
    #[inline]
    pub fn side_of(&self, p: Point3i) -> i32 {
        side_of_line(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y)
    }

    #[inline]
    pub fn bounding_box(&self) -> AlignedBox {
        AlignedBox::from_points(self.p1, self.p2)
    }

    /// Returns `true` if `p` is one of the pixels of the segment.
    #[inline]
    pub fn contains_point(&self, p: Point3i) -> bool {
        segment_contains_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y)
    }

    /// A segment has no area, it never contains a box.
    #[inline]
    pub fn contains_box(&self, _b: &AlignedBox) -> bool {
        false
    }

    #[inline]
    pub fn closest_point_to(&self, p: Point3i) -> Point3i {
        let (x, y) = segment_closest_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y);
        Point3i::new(x, y, p.z)
    }

    #[inline]
    pub fn farthest_point_to(&self, p: Point3i) -> Point3i {
        let (x, y) = segment_farthest_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y);
        Point3i::new(x, y, p.z)
    }

    #[inline]
    pub fn path_iter(&self) -> SegmentPathIter {
        SegmentPathIter {
            p1: self.p1,
            p2: self.p2,
            index: 0,
        }
    }

    /// Pixels of the segment from `p1` to `p2`.
    #[inline]
    pub fn point_iter(&self) -> SegmentPointIter {
        SegmentPointIter {
            pixels: BresenhamLineIter::new(self.p1.x, self.p1.y, self.p2.x, self.p2.y),
            z: self.p1.z,
        }
    }
}

/// Path iterator of a segment: a move to `p1` followed by a line to `p2`.
#[derive(Debug, Clone)]
pub struct SegmentPathIter {
    p1: Point3i,
    p2: Point3i,
    index: u8,
}

impl Iterator for SegmentPathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = match self.index {
            0 => PathElement::MoveTo { to: self.p1 },
            1 => PathElement::LineTo {
                from: self.p1,
                to: self.p2,
            },
            _ => return None,
        };
        self.index += 1;
        Some(element)
    }
}

impl PathIterator for SegmentPathIter {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        true
    }

    #[inline]
    fn is_curved(&self) -> bool {
        false
    }

    #[inline]
    fn is_multi_parts(&self) -> bool {
        false
    }

    #[inline]
    fn is_polygon(&self) -> bool {
        false
    }

    #[inline]
    fn restart(&self) -> Self {
        Self {
            index: 0,
            ..self.clone()
        }
    }
}

/// Iterator over the pixels of a segment.
#[derive(Debug, Clone)]
pub struct SegmentPointIter {
    pixels: BresenhamLineIter,
    z: i32,
}

impl Iterator for SegmentPointIter {
    type Item = Point3i;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixels.next().map(|(x, y)| Point3i::new(x, y, self.z))
    }
}
