use super::{PathElement, PathIterator, Side, WindingRule};
use crate::core::math::{min_max, Point3i, Vector3i};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned box on the lattice.
///
/// The corners are always normalized (`min <= max` on every axis). A box with a zero width or
/// height is valid, it is reported as empty. Every mutation bumps the box generation.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let b = AlignedBox::from_min_size(5, 8, 0, 10, 5, 0);
/// assert_eq!(b.closest_point_to(pt3(0, 0, 0)), pt3(5, 8, 0));
/// assert_eq!(b.farthest_point_to(pt3(0, 0, 0)), pt3(15, 13, 0));
/// assert!(b.contains_point(pt3(15, 13, 0)));
/// assert!(!b.contains_half_open(pt3(15, 13, 0)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AlignedBox {
    min: Point3i,
    max: Point3i,
    #[cfg_attr(feature = "serde", serde(skip))]
    generation: u64,
}

impl PartialEq for AlignedBox {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl Eq for AlignedBox {}

impl AlignedBox {
    /// Empty box at the origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Box spanning the two corners given in any order.
    pub fn from_corners(x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) -> Self {
        let mut b = Self::new();
        b.set_from_corners(x1, y1, z1, x2, y2, z2);
        b.generation = 0;
        b
    }

    /// Box with its minimum corner at `(x, y, z)` and the given size. Negative sizes extend
    /// the box toward the negative axis.
    pub fn from_min_size(x: i32, y: i32, z: i32, width: i32, height: i32, depth: i32) -> Self {
        Self::from_corners(
            x,
            y,
            z,
            x.saturating_add(width),
            y.saturating_add(height),
            z.saturating_add(depth),
        )
    }

    /// Box spanning the two points.
    #[inline]
    pub fn from_points(a: Point3i, b: Point3i) -> Self {
        Self::from_corners(a.x, a.y, a.z, b.x, b.y, b.z)
    }

    #[inline]
    pub fn min(&self) -> Point3i {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point3i {
        self.max
    }

    /// Extent on x, saturated to `i32::MAX`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.max.z.saturating_sub(self.min.z)
    }

    /// Center of the box, truncated to the lattice.
    pub fn center(&self) -> Point3i {
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point3i::new(
            mid(self.min.x, self.max.x),
            mid(self.min.y, self.max.y),
            mid(self.min.z, self.max.z),
        )
    }

    /// Number of times the box has been mutated.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Set the box from two corners given in any order.
    pub fn set_from_corners(&mut self, x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) {
        let (min_x, max_x) = min_max(x1, x2);
        let (min_y, max_y) = min_max(y1, y2);
        let (min_z, max_z) = min_max(z1, z2);
        self.min = Point3i::new(min_x, min_y, min_z);
        self.max = Point3i::new(max_x, max_y, max_z);
        self.touch();
    }

    /// Set the box from its minimum corner and size.
    pub fn set_min_size(&mut self, x: i32, y: i32, z: i32, width: i32, height: i32, depth: i32) {
        self.set_from_corners(
            x,
            y,
            z,
            x.saturating_add(width),
            y.saturating_add(height),
            z.saturating_add(depth),
        );
    }

    /// Copy the corners of `other`.
    #[inline]
    pub fn set(&mut self, other: &AlignedBox) {
        self.min = other.min;
        self.max = other.max;
        self.touch();
    }

    /// Returns `true` if the box has a zero width or height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x == self.max.x || self.min.y == self.max.y
    }

    /// Reset to the empty box at the origin.
    pub fn clear(&mut self) {
        self.min = Point3i::zero();
        self.max = Point3i::zero();
        self.touch();
    }

    /// Move the box by `v`, corners are clamped to the `i32` range.
    pub fn translate(&mut self, v: Vector3i) {
        self.min = self.min.saturating_add(v);
        self.max = self.max.saturating_add(v);
        self.touch();
    }

    /// Grow the box to also cover `other`.
    pub fn set_union(&mut self, other: &AlignedBox) {
        self.min = Point3i::new(
            self.min.x.min(other.min.x),
            self.min.y.min(other.min.y),
            self.min.z.min(other.min.z),
        );
        self.max = Point3i::new(
            self.max.x.max(other.max.x),
            self.max.y.max(other.max.y),
            self.max.z.max(other.max.z),
        );
        self.touch();
    }

    /// Move the minimum corner by `-min_border` and the maximum corner by `max_border`.
    /// Negative borders shrink the box, the corners are normalized again afterwards.
    pub fn inflate(&mut self, min_border: Vector3i, max_border: Vector3i) {
        let min = self.min.saturating_sub(min_border);
        let max = self.max.saturating_add(max_border);
        self.set_from_corners(min.x, min.y, min.z, max.x, max.y, max.z);
    }

    /// Shrink the box to its overlap with `other`. Disjoint boxes clear the box.
    pub fn set_intersection(&mut self, other: &AlignedBox) {
        let x1 = self.min.x.max(other.min.x);
        let y1 = self.min.y.max(other.min.y);
        let z1 = self.min.z.max(other.min.z);
        let x2 = self.max.x.min(other.max.x);
        let y2 = self.max.y.min(other.max.y);
        let z2 = self.max.z.min(other.max.z);
        if x1 <= x2 && y1 <= y2 && z1 <= z2 {
            self.set_from_corners(x1, y1, z1, x2, y2, z2);
        } else {
            self.clear();
        }
    }

    /// Returns `true` if `p` is inside the box, both edges included.
    #[inline]
    pub fn contains_point(&self, p: Point3i) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if `p` is inside the box, the minimum edges included and the maximum
    /// edges excluded.
    #[inline]
    pub fn contains_half_open(&self, p: Point3i) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Returns `true` if `other` lies inside this box.
    #[inline]
    pub fn contains_box(&self, other: &AlignedBox) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Returns `true` if the interiors of the two boxes overlap. Boxes sharing only an edge
    /// do not intersect.
    #[inline]
    pub fn intersects_box(&self, other: &AlignedBox) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }

    /// Point of the box closest to `p` (`p` itself when inside).
    #[inline]
    pub fn closest_point_to(&self, p: Point3i) -> Point3i {
        Point3i::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z,
        )
    }

    /// Corner of the box farthest from `p`. On an axis where `p` is halfway between the
    /// edges the maximum edge wins.
    pub fn farthest_point_to(&self, p: Point3i) -> Point3i {
        let far = |v: i32, min: i32, max: i32| {
            let to_min = (i64::from(v) - i64::from(min)).abs();
            let to_max = (i64::from(max) - i64::from(v)).abs();
            if to_min > to_max {
                min
            } else {
                max
            }
        };
        Point3i::new(
            far(p.x, self.min.x, self.max.x),
            far(p.y, self.min.y, self.max.y),
            p.z,
        )
    }

    /// Copy of the box, it is its own bounding box.
    #[inline]
    pub fn bounding_box(&self) -> AlignedBox {
        AlignedBox::from_points(self.min, self.max)
    }

    /// Outline of the box as a closed four edge polygon.
    #[inline]
    pub fn path_iter(&self) -> BoxPathIter {
        BoxPathIter::new(self.min, self.max)
    }

    /// Lattice points of the perimeter, clockwise from the minimum corner.
    #[inline]
    pub fn point_iter(&self) -> BoxPointIter {
        self.point_iter_from(Side::Top)
    }

    /// Lattice points of the perimeter starting at the first point of `side`.
    #[inline]
    pub fn point_iter_from(&self, side: Side) -> BoxPointIter {
        BoxPointIter::new(self.min, self.max, side)
    }
}

/// Path iterator over the four edges of a box.
#[derive(Debug, Clone)]
pub struct BoxPathIter {
    min: Point3i,
    max: Point3i,
    index: u8,
}

impl BoxPathIter {
    fn new(min: Point3i, max: Point3i) -> Self {
        let empty = min.x == max.x || min.y == max.y;
        Self {
            min,
            max,
            index: if empty { 5 } else { 0 },
        }
    }

    fn corner(&self, i: u8) -> Point3i {
        let z = self.min.z;
        match i {
            0 => Point3i::new(self.min.x, self.min.y, z),
            1 => Point3i::new(self.max.x, self.min.y, z),
            2 => Point3i::new(self.max.x, self.max.y, z),
            _ => Point3i::new(self.min.x, self.max.y, z),
        }
    }
}

impl Iterator for BoxPathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = match self.index {
            0 => PathElement::MoveTo { to: self.corner(0) },
            i @ 1..=3 => PathElement::LineTo {
                from: self.corner(i - 1),
                to: self.corner(i),
            },
            4 => PathElement::Close {
                from: self.corner(3),
                to: self.corner(0),
            },
            _ => return None,
        };
        self.index += 1;
        Some(element)
    }
}

impl PathIterator for BoxPathIter {
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
        false
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
        BoxPathIter::new(self.min, self.max)
    }
}

/// Iterator over the lattice points of a box perimeter, side after side.
///
/// Corners are produced once, as the first point of the side they start. Boxes with a zero
/// width or height produce nothing.
///
/// # Examples
///
/// ```
/// # use lattice_geom::shape::*;
/// let b = AlignedBox::from_min_size(0, 0, 0, 2, 1, 0);
/// let pts: Vec<_> = b.point_iter().map(|p| (p.x, p.y)).collect();
/// assert_eq!(pts, vec![(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct BoxPointIter {
    min: Point3i,
    max: Point3i,
    first_side: Side,
    current: Option<Side>,
    index: i64,
}

impl BoxPointIter {
    fn new(min: Point3i, max: Point3i, first_side: Side) -> Self {
        let active = max.x > min.x && max.y > min.y;
        Self {
            min,
            max,
            first_side,
            current: active.then_some(first_side),
            index: 0,
        }
    }
}

impl BoxPointIter {
    fn side_len(&self, side: Side) -> i64 {
        let w = i64::from(self.max.x) - i64::from(self.min.x);
        let h = i64::from(self.max.y) - i64::from(self.min.y);
        match side {
            Side::Top => w + 1,
            Side::Right => h,
            Side::Bottom => w,
            Side::Left => h - 1,
        }
    }
}

impl Iterator for BoxPointIter {
    type Item = Point3i;

    fn next(&mut self) -> Option<Self::Item> {
        let side = loop {
            let side = self.current?;
            if self.index < self.side_len(side) {
                break side;
            }
            self.index = 0;
            let next = side.next();
            self.current = (next != self.first_side).then_some(next);
        };

        let (x0, y0) = (i64::from(self.min.x), i64::from(self.min.y));
        let (x1, y1) = (i64::from(self.max.x), i64::from(self.max.y));
        let i = self.index;
        let (x, y) = match side {
            Side::Top => (x0 + i, y0),
            Side::Right => (x1, y0 + i + 1),
            Side::Bottom => (x1 - i - 1, y1),
            Side::Left => (x0, y1 - i - 1),
        };
        self.index += 1;

        // every produced point lies between the corners
        Some(Point3i::new(x as i32, y as i32, self.min.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{pt3, vec3};

    #[test]
    fn corners_are_normalized() {
        let b = AlignedBox::from_corners(10, 2, 0, 4, 8, 0);
        assert_eq!(b.min(), pt3(4, 2, 0));
        assert_eq!(b.max(), pt3(10, 8, 0));
        assert_eq!(b.width(), 6);
        assert_eq!(b.height(), 6);
        assert_eq!(b.center(), pt3(7, 5, 0));
        assert_eq!(
            AlignedBox::from_min_size(5, 5, 0, -2, -3, 0),
            AlignedBox::from_corners(3, 2, 0, 5, 5, 0)
        );
    }

    #[test]
    fn union_and_intersection() {
        let mut b = AlignedBox::from_min_size(0, 0, 0, 4, 4, 0);
        b.set_union(&AlignedBox::from_min_size(2, -2, 0, 6, 3, 0));
        assert_eq!(b, AlignedBox::from_corners(0, -2, 0, 8, 4, 0));

        b.set_intersection(&AlignedBox::from_min_size(6, 3, 0, 10, 10, 0));
        assert_eq!(b, AlignedBox::from_corners(6, 3, 0, 8, 4, 0));

        b.set_intersection(&AlignedBox::from_min_size(20, 20, 0, 1, 1, 0));
        assert_eq!(b, AlignedBox::new());
        assert!(b.is_empty());
    }

    #[test]
    fn inflate_normalizes() {
        let mut b = AlignedBox::from_min_size(0, 0, 0, 4, 4, 0);
        b.inflate(vec3(1, 2, 0), vec3(3, 4, 0));
        assert_eq!(b, AlignedBox::from_corners(-1, -2, 0, 7, 8, 0));
        b.inflate(vec3(-10, 0, 0), vec3(0, 0, 0));
        assert_eq!(b, AlignedBox::from_corners(7, -2, 0, 9, 8, 0));
    }

    #[test]
    fn generation_changes_on_mutation() {
        let mut b = AlignedBox::from_min_size(0, 0, 0, 4, 4, 0);
        let g = b.generation();
        b.translate(vec3(1, 1, 0));
        assert_ne!(b.generation(), g);
        assert_eq!(b, AlignedBox::from_min_size(1, 1, 0, 4, 4, 0));
    }

    #[test]
    fn farthest_corner_with_negative_coordinates() {
        let b = AlignedBox::from_corners(-6, -6, 0, -5, -5, 0);
        assert_eq!(b.farthest_point_to(pt3(-5, -5, 0)), pt3(-6, -6, 0));
        assert_eq!(b.farthest_point_to(pt3(-6, -6, 0)), pt3(-5, -5, 0));
        let wide = AlignedBox::from_corners(-7, -3, 0, 0, 1, 0);
        assert_eq!(wide.farthest_point_to(pt3(-4, -1, 0)), pt3(0, 1, 0));
        assert_eq!(wide.farthest_point_to(pt3(-3, -2, 0)), pt3(-7, 1, 0));
    }

    #[test]
    fn extreme_corners_saturate() {
        let mut b = AlignedBox::from_corners(i32::MIN, 0, 0, i32::MAX, 1, 0);
        assert_eq!(b.width(), i32::MAX);
        assert_eq!(b.height(), 1);
        assert!(!b.is_empty());
        assert_eq!(b.center(), pt3(0, 0, 0));
        assert_eq!(b.point_iter().take(2).count(), 2);

        b.translate(vec3(10, 0, 0));
        assert_eq!(b.min(), pt3(i32::MIN + 10, 0, 0));
        assert_eq!(b.max(), pt3(i32::MAX, 1, 0));
        b.inflate(vec3(20, 0, 0), vec3(0, 0, 0));
        assert_eq!(b.min().x, i32::MIN);
    }

    #[test]
    fn box_relations() {
        let b = AlignedBox::from_min_size(0, 0, 0, 4, 4, 0);
        assert!(b.contains_box(&AlignedBox::from_min_size(0, 0, 0, 4, 4, 0)));
        assert!(!b.contains_box(&AlignedBox::from_min_size(1, 1, 0, 4, 4, 0)));
        assert!(b.intersects_box(&AlignedBox::from_min_size(3, 3, 0, 4, 4, 0)));
        // shared edge only
        assert!(!b.intersects_box(&AlignedBox::from_min_size(4, 0, 0, 4, 4, 0)));
    }

    #[test]
    fn path_elements() {
        let b = AlignedBox::from_min_size(5, 8, 0, 2, 1, 0);
        let elements: Vec<_> = b.path_iter().collect();
        assert_eq!(
            elements,
            vec![
                PathElement::MoveTo { to: pt3(5, 8, 0) },
                PathElement::LineTo {
                    from: pt3(5, 8, 0),
                    to: pt3(7, 8, 0)
                },
                PathElement::LineTo {
                    from: pt3(7, 8, 0),
                    to: pt3(7, 9, 0)
                },
                PathElement::LineTo {
                    from: pt3(7, 9, 0),
                    to: pt3(5, 9, 0)
                },
                PathElement::Close {
                    from: pt3(5, 9, 0),
                    to: pt3(5, 8, 0)
                },
            ]
        );
        assert_eq!(AlignedBox::from_min_size(0, 0, 0, 4, 0, 0).path_iter().count(), 0);
    }

    #[test]
    fn perimeter_from_side() {
        let b = AlignedBox::from_min_size(0, 0, 0, 2, 2, 0);
        let pts: Vec<_> = b.point_iter_from(Side::Bottom).map(|p| (p.x, p.y)).collect();
        assert_eq!(
            pts,
            vec![(1, 2), (0, 2), (0, 1), (0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(b.point_iter().count(), 8);
    }
}
