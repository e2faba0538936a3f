//! Lattice segment predicates: closest/farthest pixel, pixel membership and the
//! segment/segment and box/segment intersection tests.
//!
//! All functions work in the xy plane on the Bresenham pixels of the segments.

use crate::core::math::{min_max, side_of_line, BresenhamLineIter};
use std::iter::Peekable;

/// Pixel of the segment `(ax, ay) -> (bx, by)` closest to `(px, py)`.
///
/// The walk stops as soon as the distance starts growing again after the minimum was
/// reached, or on an exact hit.
pub fn segment_closest_point(ax: i32, ay: i32, bx: i32, by: i32, px: i32, py: i32) -> (i32, i32) {
    let mut min_dist: Option<i64> = None;
    let mut one_best_found = false;
    let mut result = (ax, ay);
    for (x, y) in BresenhamLineIter::new(ax, ay, bx, by) {
        let d = dist_sq(px, py, x, y);
        if d == 0 {
            return (x, y);
        }
        match min_dist {
            Some(min) if d > min => {
                if one_best_found {
                    return result;
                }
                one_best_found = true;
            }
            _ => {
                min_dist = Some(d);
                result = (x, y);
                if one_best_found {
                    return result;
                }
            }
        }
    }
    result
}

/// End point of the segment farthest from `(px, py)`, the first one on ties.
#[inline]
pub fn segment_farthest_point(ax: i32, ay: i32, bx: i32, by: i32, px: i32, py: i32) -> (i32, i32) {
    if dist_sq(px, py, ax, ay) >= dist_sq(px, py, bx, by) {
        (ax, ay)
    } else {
        (bx, by)
    }
}

/// Returns `true` if `(x, y)` is one of the Bresenham pixels of the segment.
pub fn segment_contains_point(ax: i32, ay: i32, bx: i32, by: i32, x: i32, y: i32) -> bool {
    let (min_x, max_x) = min_max(ax, bx);
    let (min_y, max_y) = min_max(ay, by);
    if x < min_x || x > max_x || y < min_y || y > max_y {
        return false;
    }

    if ax == bx || ay == by {
        return true;
    }

    let mut min_dist: Option<i64> = None;
    for (px, py) in BresenhamLineIter::new(ax, ay, bx, by) {
        let d = dist_sq(x, y, px, py);
        if d == 0 {
            return true;
        }
        if matches!(min_dist, Some(min) if d > min) {
            return false;
        }
        min_dist = Some(d);
    }
    false
}

/// Pixel iterator walking a segment in increasing x.
fn ordered_pixels(x1: i32, y1: i32, x2: i32, y2: i32) -> Peekable<BresenhamLineIter> {
    if x1 < x2 {
        BresenhamLineIter::new(x1, y1, x2, y2).peekable()
    } else {
        BresenhamLineIter::new(x2, y2, x1, y1).peekable()
    }
}

/// Classify how the pixels of two segments meet.
///
/// Returns `0` when the segments share no pixel column overlap, `1` when they cross with
/// pixels of the second segment remaining after the crossing column and `2` when they only
/// touch at the end of the second segment. `enable_third` and `enable_fourth` control
/// whether the first and the last pixel of the second segment may count as a hit.
#[allow(clippy::too_many_arguments)]
pub fn segment_intersection_type(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    x4: i32,
    y4: i32,
    enable_third: bool,
    enable_fourth: bool,
) -> i32 {
    let mut it1 = ordered_pixels(x1, y1, x2, y2);
    let mut it2 = ordered_pixels(x3, y3, x4, y4);

    let (Some(mut p1), Some(mut p2)) = (it1.next(), it2.next()) else {
        return 0;
    };
    let mut is_first_point_of_second = true;

    loop {
        if p1.0 < p2.0 {
            while p1.0 < p2.0 {
                match it1.next() {
                    Some(p) => p1 = p,
                    None => break,
                }
            }
        } else if p2.0 < p1.0 {
            while p2.0 < p1.0 {
                match it2.next() {
                    Some(p) => {
                        p2 = p;
                        is_first_point_of_second = false;
                    }
                    None => break,
                }
            }
        }

        let x = p1.0;
        let (mut min1, mut max1) = (p1.1, p1.1);
        let (mut min2, mut max2) = if is_first_point_of_second && !enable_third {
            (i32::MAX, i32::MIN)
        } else {
            (p2.1, p2.1)
        };

        for p in it1.by_ref() {
            p1 = p;
            if p1.0 != x {
                break;
            }
            min1 = min1.min(p1.1);
            max1 = max1.max(p1.1);
        }

        for p in it2.by_ref() {
            p2 = p;
            is_first_point_of_second = false;
            if p2.0 != x {
                break;
            }
            min2 = min2.min(p2.1);
            max2 = max2.max(p2.1);
        }

        if max2 >= min1 && max1 >= min2 {
            return crossing_kind(is_first_point_of_second, &mut it2);
        }

        if it1.peek().is_none() || it2.peek().is_none() {
            break;
        }
    }

    if enable_fourth && p1 == p2 {
        return crossing_kind(is_first_point_of_second, &mut it2);
    }

    0
}

#[inline]
fn crossing_kind(is_first_point_of_second: bool, it2: &mut Peekable<BresenhamLineIter>) -> i32 {
    if !is_first_point_of_second && it2.peek().is_some() {
        1
    } else {
        2
    }
}

/// Returns `true` if the two lattice segments share a pixel column overlap.
///
/// Segments crossing between lattice points without sharing a pixel do not intersect.
///
/// # Examples
///
/// ```
/// # use lattice_geom::shape::internal::segment_intersect::*;
/// assert!(segments_intersect(0, 0, 4, 4, 0, 4, 4, 0));
/// // the diagonals cross between pixels
/// assert!(!segments_intersect(0, 0, 10, 5, 0, 5, 10, 0));
/// assert!(!segments_intersect(0, 0, 10, 5, 0, 1, 10, 6));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn segments_intersect(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    x4: i32,
    y4: i32,
) -> bool {
    let side1 = side_of_line(x1, y1, x2, y2, x3, y3);
    let side2 = side_of_line(x1, y1, x2, y2, x4, y4);
    if side1 * side2 <= 0 {
        return segment_intersection_type(x1, y1, x2, y2, x3, y3, x4, y4, true, true) != 0;
    }
    false
}

pub const COHEN_SUTHERLAND_INSIDE: u8 = 0;
pub const COHEN_SUTHERLAND_TOP: u8 = 1;
pub const COHEN_SUTHERLAND_BOTTOM: u8 = 2;
pub const COHEN_SUTHERLAND_RIGHT: u8 = 4;
pub const COHEN_SUTHERLAND_LEFT: u8 = 8;

/// Region code of `(px, py)` against the closed box `[min_x, max_x] x [min_y, max_y]`.
#[inline]
pub fn cohen_sutherland_code(px: i32, py: i32, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> u8 {
    let mut code = COHEN_SUTHERLAND_INSIDE;
    if px < min_x {
        code |= COHEN_SUTHERLAND_LEFT;
    }
    if px > max_x {
        code |= COHEN_SUTHERLAND_RIGHT;
    }
    if py < min_y {
        code |= COHEN_SUTHERLAND_BOTTOM;
    }
    if py > max_y {
        code |= COHEN_SUTHERLAND_TOP;
    }
    code
}

/// Returns `true` if the segment `(x3, y3) -> (x4, y4)` has a pixel inside the closed box
/// `[x1, x2] x [y1, y2]`.
///
/// The segment is clipped with region codes, walking its pixels up to the box edge the
/// current start point lies beyond.
#[allow(clippy::too_many_arguments)]
pub fn box_intersects_segment(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    x4: i32,
    y4: i32,
) -> bool {
    let mut c1 = cohen_sutherland_code(x3, y3, x1, y1, x2, y2);
    let c2 = cohen_sutherland_code(x4, y4, x1, y1, x2, y2);

    if c1 == COHEN_SUTHERLAND_INSIDE || c2 == COHEN_SUTHERLAND_INSIDE {
        return true;
    }
    if c1 & c2 != 0 {
        return false;
    }

    let mut pixels = BresenhamLineIter::new(x3, y3, x4, y4).peekable();

    while pixels.peek().is_some()
        && c1 != COHEN_SUTHERLAND_INSIDE
        && c2 != COHEN_SUTHERLAND_INSIDE
        && c1 & c2 == 0
    {
        let (sx1, sy1) = if c1 & COHEN_SUTHERLAND_TOP != 0 {
            match advance_until(&mut pixels, |(_, y)| y == y2) {
                Some(p) if p.1 == y2 => p,
                _ => return false,
            }
        } else if c1 & COHEN_SUTHERLAND_BOTTOM != 0 {
            match advance_until(&mut pixels, |(_, y)| y == y1) {
                Some(p) if p.1 == y1 => p,
                _ => return false,
            }
        } else if c1 & COHEN_SUTHERLAND_RIGHT != 0 {
            match advance_until(&mut pixels, |(x, _)| x == x2) {
                Some(p) if p.0 == x2 => p,
                _ => return false,
            }
        } else {
            match advance_until(&mut pixels, |(x, _)| x == x1) {
                Some(p) if p.0 == x1 => p,
                _ => return false,
            }
        };
        c1 = cohen_sutherland_code(sx1, sy1, x1, y1, x2, y2);
    }

    c1 == COHEN_SUTHERLAND_INSIDE || c2 == COHEN_SUTHERLAND_INSIDE
}

/// Consume pixels until `stop` holds or the iterator runs out, returning the last pixel read.
fn advance_until<F>(pixels: &mut Peekable<BresenhamLineIter>, stop: F) -> Option<(i32, i32)>
where
    F: Fn((i32, i32)) -> bool,
{
    let mut last = pixels.next()?;
    while !stop(last) {
        match pixels.next() {
            Some(p) => last = p,
            None => break,
        }
    }
    Some(last)
}

#[inline]
fn dist_sq(x1: i32, y1: i32, x2: i32, y2: i32) -> i64 {
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_walks_pixels() {
        assert_eq!(segment_closest_point(0, 0, 10, 5, 1, 1), (2, 1));
        assert_eq!(segment_closest_point(0, 0, 10, 5, 4, 2), (4, 2));
        assert_eq!(segment_closest_point(0, 0, 10, 5, -3, -3), (0, 0));
        assert_eq!(segment_closest_point(0, 0, 10, 5, 20, 20), (10, 5));
    }

    #[test]
    fn contains_only_lattice_pixels() {
        assert!(segment_contains_point(0, 0, 10, 5, 2, 1));
        assert!(!segment_contains_point(0, 0, 10, 5, 2, 2));
        assert!(segment_contains_point(10, 5, 0, 0, 10, 5));
        assert!(segment_contains_point(3, 0, 3, 9, 3, 4));
        assert!(!segment_contains_point(3, 0, 3, 9, 3, 10));
    }

    #[test]
    fn box_segment_clipping() {
        // box [0, 4] x [0, 4]
        assert!(box_intersects_segment(0, 0, 4, 4, -2, 2, 6, 2));
        assert!(box_intersects_segment(0, 0, 4, 4, -3, -3, 8, 8));
        assert!(!box_intersects_segment(0, 0, 4, 4, -2, 5, 6, 5));
        assert!(!box_intersects_segment(0, 0, 4, 4, 5, -3, 9, 1));
        // touching a corner
        assert!(box_intersects_segment(0, 0, 4, 4, 4, 4, 8, 8));
    }

    #[test]
    fn segment_pairs() {
        assert!(segments_intersect(0, 0, 4, 4, 0, 4, 4, 0));
        // parallel
        assert!(!segments_intersect(0, 0, 4, 0, 0, 1, 4, 1));
        // shared end point
        assert!(segments_intersect(0, 0, 4, 0, 4, 0, 8, 3));
    }
}
