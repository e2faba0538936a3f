//! Digital circle enumeration and the circle predicates built on it.
//!
//! The perimeter of a lattice circle is produced octant by octant with the midpoint circle
//! algorithm. Octants are numbered clockwise from the top point:
//!
//! | octant | point          |
//! |--------|----------------|
//! | 0      | `(cx+x, cy+y)` |
//! | 1      | `(cx+y, cy+x)` |
//! | 2      | `(cx+x, cy-y)` |
//! | 3      | `(cx+y, cy-x)` |
//! | 4      | `(cx-x, cy-y)` |
//! | 5      | `(cx-y, cy-x)` |
//! | 6      | `(cx-x, cy+y)` |
//! | 7      | `(cx-y, cy+x)` |
//!
//! Octants `2k` and `2k + 1` form quadrant `k`.

use super::segment_intersect::segment_closest_point;
use crate::core::math::Point3i;

/// Number of octants of a full circle.
pub const OCTANT_COUNT: u8 = 8;

/// Iterator over the lattice points of a circle perimeter.
///
/// Points shared by two octants are only produced once.
///
/// # Examples
///
/// ```
/// # use lattice_geom::shape::internal::circle_perimeter::*;
/// let pts: Vec<_> = CirclePerimeterIter::new(0, 0, 0, 1).map(|p| (p.x, p.y)).collect();
/// assert_eq!(pts, vec![(0, 1), (1, 0), (0, -1), (-1, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct CirclePerimeterIter {
    cx: i32,
    cy: i32,
    cz: i32,
    radius: i32,
    octant: u8,
    last_octant: u8,
    skip_shared: bool,
    x: i32,
    y: i32,
    d: i64,
    junctions: Vec<(i32, i32)>,
    center_only: bool,
}

impl CirclePerimeterIter {
    /// Full perimeter starting at the top point and turning clockwise.
    pub fn new(cx: i32, cy: i32, cz: i32, radius: i32) -> Self {
        Self::with_octants(cx, cy, cz, radius, 0, OCTANT_COUNT, true)
    }

    /// Perimeter restricted to `octant_count` octants starting at `first_octant`.
    ///
    /// With `skip_shared` the first point of the octants that start on a point already
    /// produced by the previous octant is dropped. Octants past the eighth are ignored.
    pub fn with_octants(
        cx: i32,
        cy: i32,
        cz: i32,
        radius: i32,
        first_octant: u8,
        octant_count: u8,
        skip_shared: bool,
    ) -> Self {
        let first_octant = first_octant.min(OCTANT_COUNT);
        let last_octant = first_octant.saturating_add(octant_count).min(OCTANT_COUNT);
        let mut iter = Self {
            cx,
            cy,
            cz,
            radius: radius.abs(),
            octant: first_octant,
            last_octant,
            skip_shared,
            x: 0,
            y: 0,
            d: 0,
            junctions: Vec::with_capacity(OCTANT_COUNT as usize),
            center_only: radius == 0,
        };
        iter.reset_octant();
        iter
    }

    fn reset_octant(&mut self) {
        self.x = 0;
        self.y = self.radius;
        self.d = 3 - 2 * i64::from(self.radius);
        if self.skip_shared && matches!(self.octant, 3 | 4 | 6 | 7) {
            self.step();
        }
    }

    #[inline]
    fn step(&mut self) {
        if self.d <= 0 {
            self.d += 4 * i64::from(self.x) + 6;
        } else {
            self.d += 4 * (i64::from(self.x) - i64::from(self.y)) + 10;
            self.y -= 1;
        }
        self.x += 1;
    }

    #[inline]
    fn octant_point(&self) -> (i32, i32) {
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        match self.octant {
            0 => (cx + x, cy + y),
            1 => (cx + y, cy + x),
            2 => (cx + x, cy - y),
            3 => (cx + y, cy - x),
            4 => (cx - x, cy - y),
            5 => (cx - y, cy - x),
            6 => (cx - x, cy + y),
            _ => (cx - y, cy + x),
        }
    }
}

impl Iterator for CirclePerimeterIter {
    type Item = Point3i;

    fn next(&mut self) -> Option<Self::Item> {
        if self.center_only {
            if self.octant >= self.last_octant {
                return None;
            }
            self.octant = self.last_octant;
            return Some(Point3i::new(self.cx, self.cy, self.cz));
        }

        while self.octant < self.last_octant {
            let (px, py) = self.octant_point();
            self.step();
            if self.x > self.y {
                let seen = self.junctions.contains(&(px, py));
                if !seen {
                    self.junctions.push((px, py));
                }
                self.octant += 1;
                self.reset_octant();
                if !seen {
                    return Some(Point3i::new(px, py, self.cz));
                }
            } else {
                return Some(Point3i::new(px, py, self.cz));
            }
        }

        None
    }
}

/// First octant of the quadrant holding the vector `(vx, vy)`.
#[inline]
fn quadrant_first_octant(vx: i64, vy: i64) -> u8 {
    match (vx >= 0, vy >= 0) {
        (true, true) => 0,
        (true, false) => 2,
        (false, true) => 6,
        (false, false) => 4,
    }
}

/// Points of the quadrant `first_octant / 2`, shared points included.
#[inline]
fn quadrant_points(cx: i32, cy: i32, radius: i32, first_octant: u8) -> CirclePerimeterIter {
    CirclePerimeterIter::with_octants(cx, cy, 0, radius, first_octant, 2, false)
}

/// Cross product telling on which side of the perimeter tangent at `(qx, qy)` the point
/// `(x, y)` lies. Positive means outside.
#[inline]
fn tangent_side(cx: i32, cy: i32, qx: i32, qy: i32, x: i64, y: i64) -> i64 {
    let px = i64::from(cy) - i64::from(qy);
    let py = i64::from(qx) - i64::from(cx);
    let cpx = x - i64::from(qx);
    let cpy = y - i64::from(qy);
    cpx * py - cpy * px
}

/// Returns `true` if `(x, y)` is on or inside the lattice circle.
pub fn circle_contains_point(cx: i32, cy: i32, radius: i32, x: i32, y: i32) -> bool {
    let r = i64::from(radius.abs());
    let vx = i64::from(x) - i64::from(cx);
    let vy = i64::from(y) - i64::from(cy);
    if vx < -r || vx > r || vy < -r || vy > r {
        return false;
    }

    // perimeter points are tested first, an earlier tangent may cut them off
    let quadrant = quadrant_points(cx, cy, radius, quadrant_first_octant(vx, vy));
    if quadrant.clone().any(|q| q.x == x && q.y == y) {
        return true;
    }

    let mut all_collinear = true;
    for q in quadrant {
        let side = tangent_side(cx, cy, q.x, q.y, i64::from(x), i64::from(y));
        if side > 0 {
            return false;
        }
        if side < 0 {
            all_collinear = false;
        }
    }
    !all_collinear
}

/// Perimeter point closest to `(x, y)`, or `(x, y)` itself when it is inside the circle.
pub fn circle_closest_point(cx: i32, cy: i32, radius: i32, x: i32, y: i32) -> (i32, i32) {
    let vx = i64::from(x) - i64::from(cx);
    let vy = i64::from(y) - i64::from(cy);
    let mut inside = true;
    let mut best: Option<(i64, (i32, i32))> = None;
    for q in quadrant_points(cx, cy, radius, quadrant_first_octant(vx, vy)) {
        let side = tangent_side(cx, cy, q.x, q.y, i64::from(x), i64::from(y));
        if side >= 0 {
            inside = false;
            let d = (i64::from(x) - i64::from(q.x)).abs() + (i64::from(y) - i64::from(q.y)).abs();
            if best.is_none_or(|(min, _)| d < min) {
                best = Some((d, (q.x, q.y)));
            }
        }
    }
    match best {
        Some((_, p)) if !inside => p,
        _ => (x, y),
    }
}

/// Perimeter point farthest from `(x, y)`.
///
/// The search runs over the quadrant opposite to the query point. Ties on the manhattan
/// distance prefer the point with the smaller chebyshev component.
pub fn circle_farthest_point(cx: i32, cy: i32, radius: i32, x: i32, y: i32) -> (i32, i32) {
    let vx = i64::from(x) - i64::from(cx);
    let vy = i64::from(y) - i64::from(cy);
    let first_octant = match (vx >= 0, vy >= 0) {
        (true, true) => 4,
        (true, false) => 6,
        (false, true) => 2,
        (false, false) => 0,
    };
    let mut best: Option<(i64, i64)> = None;
    let mut result = (x, y);
    for q in quadrant_points(cx, cy, radius, first_octant) {
        let a = (i64::from(q.x) - i64::from(x)).abs();
        let b = (i64::from(q.y) - i64::from(y)).abs();
        let l1 = a + b;
        let linf_min = a.min(b);
        let better = match best {
            None => true,
            Some((max_l1, min_other)) => l1 > max_l1 || (l1 == max_l1 && linf_min < min_other),
        };
        if better {
            best = Some((l1, linf_min));
            result = (q.x, q.y);
        }
    }
    result
}

/// Returns `true` if the circle and the segment share a point.
#[inline]
pub fn circle_intersects_segment(
    cx: i32,
    cy: i32,
    radius: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> bool {
    let (px, py) = segment_closest_point(x1, y1, x2, y2, cx, cy);
    circle_contains_point(cx, cy, radius, px, py)
}

/// Returns `true` if the circle and the closed box `[min_x, max_x] x [min_y, max_y]` share a
/// point.
#[inline]
pub fn circle_intersects_box(
    cx: i32,
    cy: i32,
    radius: i32,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> bool {
    let px = cx.clamp(min_x, max_x);
    let py = cy.clamp(min_y, max_y);
    circle_contains_point(cx, cy, radius, px, py)
}

/// Returns `true` if the two circles share a point.
#[inline]
pub fn circles_intersect(x1: i32, y1: i32, r1: i32, x2: i32, y2: i32, r2: i32) -> bool {
    let (px, py) = circle_closest_point(x1, y1, r1, x2, y2);
    circle_contains_point(x2, y2, r2, px, py)
}

/// Returns `true` if the four corners of the box are inside the circle.
///
/// Each corner is checked against the tangents of the quadrant it lies in.
pub fn circle_contains_box(
    cx: i32,
    cy: i32,
    radius: i32,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> bool {
    let r = i64::from(radius.abs());
    let vx1 = i64::from(min_x) - i64::from(cx);
    let vy1 = i64::from(min_y) - i64::from(cy);
    let vx2 = i64::from(max_x) - i64::from(cx);
    let vy2 = i64::from(max_y) - i64::from(cy);
    let in_range = |v: i64| -r <= v && v <= r;
    if !(in_range(vx1) && in_range(vy1) && in_range(vx2) && in_range(vy2)) {
        return false;
    }

    let corners = [(vx1, vy1), (vx2, vy1), (vx2, vy2), (vx1, vy2)];
    let mut quadrants = [0u8; 4];
    for (i, &(vx, vy)) in corners.iter().enumerate() {
        let quadrant = match (vx > 0, vy > 0) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 3,
            (false, false) => 2,
        };
        quadrants[quadrant] |= 1 << i;
    }

    for (quadrant, &flags) in quadrants.iter().enumerate() {
        if flags == 0 {
            continue;
        }
        for q in quadrant_points(cx, cy, radius, quadrant as u8 * 2) {
            for (i, &(vx, vy)) in corners.iter().enumerate() {
                if flags & (1 << i) != 0
                    && tangent_side(cx, cy, q.x, q.y, i64::from(cx) + vx, i64::from(cy) + vy) > 0
                {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy(iter: CirclePerimeterIter) -> Vec<(i32, i32)> {
        iter.map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn perimeter_order() {
        assert_eq!(
            xy(CirclePerimeterIter::new(4, 6, 0, 3)),
            vec![
                (4, 9),
                (5, 9),
                (6, 8),
                (7, 6),
                (7, 7),
                (4, 3),
                (5, 3),
                (6, 4),
                (7, 5),
                (3, 3),
                (2, 4),
                (1, 6),
                (1, 5),
                (3, 9),
                (2, 8),
                (1, 7)
            ]
        );
    }

    #[test]
    fn zero_radius_is_the_center() {
        let pts: Vec<_> = CirclePerimeterIter::new(3, -2, 7, 0).collect();
        assert_eq!(pts, vec![Point3i::new(3, -2, 7)]);
    }

    #[test]
    fn point_containment() {
        assert!(circle_contains_point(5, 8, 5, 5, 8));
        assert!(circle_contains_point(5, 8, 5, 5, 13));
        assert!(circle_contains_point(5, 8, 5, 8, 12));
        assert!(!circle_contains_point(5, 8, 5, 9, 12));
        assert!(!circle_contains_point(5, 8, 5, 11, 8));
        assert!(circle_contains_point(0, 0, 0, 0, 0));
        assert!(!circle_contains_point(0, 0, 0, 1, 0));
    }

    #[test]
    fn every_perimeter_point_is_contained() {
        assert!(circle_contains_point(0, 0, 4, 3, 3));
        assert!(circle_contains_point(0, 0, 4, -3, -3));
        for r in 0..30 {
            for p in CirclePerimeterIter::new(2, -3, 0, r) {
                assert!(circle_contains_point(2, -3, r, p.x, p.y), "r={} p={:?}", r, p);
            }
        }
    }

    #[test]
    fn closest_and_farthest() {
        assert_eq!(circle_closest_point(-5, 18, 2, -10, 2), (-6, 16));
        assert_eq!(circle_closest_point(-5, 18, 2, -4, 19), (-4, 19));
        assert_eq!(circle_farthest_point(-5, 18, 2, 12, 14), (-7, 19));
    }
}
