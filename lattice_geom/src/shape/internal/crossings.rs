//! Crossing number contributions of a single path edge.
//!
//! Every function takes the crossing count accumulated so far and the edge
//! `(x0, y0) -> (x1, y1)`, and returns the updated count. The count grows when the edge goes
//! up (increasing y) and shrinks when it goes down. The edge is only counted when it passes on
//! the right of the query primitive (a horizontal half line going to positive x). When the
//! edge touches the query primitive [SHAPE_INTERSECTS] is returned instead of a count.

use super::circle_perimeter::circle_intersects_segment;
use super::segment_intersect::segment_intersection_type;
use crate::core::math::{min_max, side_of_line, BresenhamLineIter};
use crate::shape::SHAPE_INTERSECTS;

/// Crossings of the horizontal half line starting at `(px, py)`.
///
/// `include_top` and `include_bottom` select whether the edge end points at the lowest and at
/// the highest y count as a crossing.
///
/// # Examples
///
/// ```
/// # use lattice_geom::shape::internal::crossings::*;
/// # use lattice_geom::shape::SHAPE_INTERSECTS;
/// // upward edge on the right of the point
/// assert_eq!(point_crossings_from_edge(0, 0, 2, 4, -2, 4, 6, true, true), 2);
/// // point on the edge
/// assert_eq!(point_crossings_from_edge(0, 4, 0, 4, -2, 4, 2, true, true), SHAPE_INTERSECTS);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn point_crossings_from_edge(
    crossings: i32,
    px: i32,
    py: i32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    include_top: bool,
    include_bottom: bool,
) -> i32 {
    if y0 == y1 {
        // horizontal edges never cross the half line, they can only hold the point
        let (xmin, xmax) = min_max(x0, x1);
        if py == y0 && xmin <= px && px <= xmax {
            return SHAPE_INTERSECTS;
        }
        return crossings;
    }
    if py < y0 && py < y1 {
        return crossings;
    }
    if py > y0 && py > y1 {
        return crossings;
    }
    if px > x0 && px > x1 {
        return crossings;
    }

    // the whole row is scanned, a shallow edge walked leftward reaches `px` last
    let mut on_row = false;
    let mut right = false;
    for (x, y) in BresenhamLineIter::new(x0, y0, x1, y1) {
        if y != py {
            if on_row {
                break;
            }
            continue;
        }
        on_row = true;
        if x == px {
            return SHAPE_INTERSECTS;
        }
        if x > px {
            right = true;
        }
    }

    if !right {
        return crossings;
    }

    let mut n = crossings;
    if y0 <= y1 {
        if y0 < py && include_top {
            n += 1;
        }
        if y1 > py && include_bottom {
            n += 1;
        }
    } else {
        if y0 > py && include_bottom {
            n -= 1;
        }
        if y1 < py && include_top {
            n -= 1;
        }
    }
    n
}

/// Count for an edge entirely on the right of a query primitive spanning `[ymin, ymax]`.
#[inline]
fn right_side_crossings(crossings: i32, ymin: i32, ymax: i32, y0: i32, y1: i32) -> i32 {
    let mut n = crossings;
    if y0 < y1 {
        if y0 < ymin {
            n += 1;
        }
        if y1 > ymax {
            n += 1;
        }
    } else if y1 < y0 {
        if y1 < ymin {
            n -= 1;
        }
        if y0 > ymax {
            n -= 1;
        }
    }
    n
}

/// Crossings of the closed rectangle `[rxmin, rxmax] x [rymin, rymax]`.
///
/// The rectangle casts two half lines, one from its bottom edge and one from its top edge,
/// so a full crossing counts twice.
#[allow(clippy::too_many_arguments)]
pub fn rect_crossings_from_edge(
    crossings: i32,
    rxmin: i32,
    rymin: i32,
    rxmax: i32,
    rymax: i32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> i32 {
    if y0 == y1 {
        if rymin <= y0 && y0 <= rymax && (x0 >= rxmin || x1 >= rxmin) && (x0 <= rxmax || x1 <= rxmax)
        {
            return SHAPE_INTERSECTS;
        }
        return crossings;
    }
    if y0 > rymax && y1 > rymax {
        return crossings;
    }
    if y0 < rymin && y1 < rymin {
        return crossings;
    }
    if x0 < rxmin && x1 < rxmin {
        return crossings;
    }
    if x0 > rxmax && x1 > rxmax {
        return right_side_crossings(crossings, rymin, rymax, y0, y1);
    }

    let inside = |x: i32, y: i32| rxmin <= x && x <= rxmax && rymin <= y && y <= rymax;
    if inside(x0, y0) || inside(x1, y1) {
        return SHAPE_INTERSECTS;
    }

    // leftmost pixel of the edge on the bottom and on the top line of the rectangle
    let (pixels, y_end) = if y0 <= y1 {
        (BresenhamLineIter::new(x0, y0, x1, y1), y1)
    } else {
        (BresenhamLineIter::new(x1, y1, x0, y0), y0)
    };
    let mut x_at_min: Option<i32> = None;
    let mut x_at_max: Option<i32> = None;
    for (px, py) in pixels {
        if py == rymin && x_at_min.is_none_or(|x| x > px) {
            x_at_min = Some(px);
        }
        if py == rymax && x_at_max.is_none_or(|x| x > px) {
            x_at_max = Some(px);
        }
        if py > y_end {
            break;
        }
    }

    let mut n = crossings;
    match (x_at_min, x_at_max) {
        (Some(xi1), Some(xi2)) => {
            if xi1 < rxmin && xi2 < rxmin {
                // on the left
            } else if xi1 > rxmax && xi2 > rxmax {
                if y0 < y1 {
                    if y0 <= rymin {
                        n += 1;
                    }
                    if y1 >= rymax {
                        n += 1;
                    }
                } else if y1 < y0 {
                    if y1 <= rymin {
                        n -= 1;
                    }
                    if y0 >= rymax {
                        n -= 1;
                    }
                }
            } else {
                return SHAPE_INTERSECTS;
            }
        }
        (Some(xi1), None) => {
            if xi1 > rxmax {
                if y0 < y1 {
                    if y0 <= rymin {
                        n += 1;
                    }
                } else if y1 < y0 && y1 <= rymin {
                    n -= 1;
                }
            } else if xi1 >= rxmin {
                return SHAPE_INTERSECTS;
            }
        }
        (None, Some(xi2)) => {
            if xi2 > rxmax {
                if y0 < y1 {
                    if y0 <= rymax {
                        n += 1;
                    }
                } else if y1 < y0 && y1 <= rymax {
                    n -= 1;
                }
            } else if xi2 >= rxmin {
                return SHAPE_INTERSECTS;
            }
        }
        (None, None) => {}
    }

    n
}

/// Crossings of the segment `(sx1, sy1) -> (sx2, sy2)`, counted from both of its end points.
#[allow(clippy::too_many_arguments)]
pub fn segment_crossings_from_edge(
    crossings: i32,
    sx1: i32,
    sy1: i32,
    sx2: i32,
    sy2: i32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> i32 {
    let (xmin, xmax) = min_max(sx1, sx2);
    let (ymin, ymax) = min_max(sy1, sy2);

    if y0 < ymin && y1 < ymin {
        return crossings;
    }
    if y0 > ymax && y1 > ymax {
        return crossings;
    }
    if x0 < xmin && x1 < xmin {
        return crossings;
    }
    if x0 > xmax && x1 > xmax {
        return right_side_crossings(crossings, ymin, ymax, y0, y1);
    }

    if segment_intersection_type(x0, y0, x1, y1, sx1, sy1, sx2, sy2, true, true) != 0 {
        return SHAPE_INTERSECTS;
    }

    let segment_goes_up = sy1 <= sy2;
    let (side1, side2) = if segment_goes_up {
        (
            side_of_line(sx1, sy1, sx2, sy2, x0, y0),
            side_of_line(sx1, sy1, sx2, sy2, x1, y1),
        )
    } else {
        (
            side_of_line(sx2, sy2, sx1, sy1, x0, y0),
            side_of_line(sx2, sy2, sx1, sy1, x1, y1),
        )
    };

    let mut n = crossings;
    if side1 <= 0 || side2 <= 0 {
        let n1 = point_crossings_from_edge(
            0,
            sx1,
            sy1,
            x0,
            y0,
            x1,
            y1,
            segment_goes_up,
            !segment_goes_up,
        );
        let n2 = point_crossings_from_edge(
            0,
            sx2,
            sy2,
            x0,
            y0,
            x1,
            y1,
            !segment_goes_up,
            segment_goes_up,
        );
        if n1 == SHAPE_INTERSECTS || n2 == SHAPE_INTERSECTS {
            return SHAPE_INTERSECTS;
        }
        n += n1 + n2;
    }
    n
}

/// Crossings of the circle of center `(cx, cy)`, counted from its lowest and highest points.
#[allow(clippy::too_many_arguments)]
pub fn circle_crossings_from_edge(
    crossings: i32,
    cx: i32,
    cy: i32,
    radius: i32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> i32 {
    let r = radius.abs();
    let (xmin, xmax) = (cx - r, cx + r);
    let (ymin, ymax) = (cy - r, cy + r);

    if y0 < ymin && y1 < ymin {
        return crossings;
    }
    if y0 > ymax && y1 > ymax {
        return crossings;
    }
    if x0 < xmin && x1 < xmin {
        return crossings;
    }
    if x0 > xmax && x1 > xmax {
        return right_side_crossings(crossings, ymin, ymax, y0, y1);
    }

    if circle_intersects_segment(cx, cy, r, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    }

    let n = point_crossings_from_edge(crossings, cx, ymin, x0, y0, x1, y1, true, false);
    point_crossings_from_edge(n, cx, ymax, x0, y0, x1, y1, false, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_crossings() {
        // downward edge on the right
        assert_eq!(point_crossings_from_edge(0, 0, 2, 4, 6, 4, -2, true, true), -2);
        // edge on the left is ignored
        assert_eq!(point_crossings_from_edge(0, 5, 2, 4, -2, 4, 6, true, true), 0);
        // horizontal edges never count
        assert_eq!(point_crossings_from_edge(3, 0, 2, 4, 2, 8, 2, true, true), 3);
        assert_eq!(
            point_crossings_from_edge(3, 6, 2, 8, 2, 4, 2, true, true),
            SHAPE_INTERSECTS
        );
    }

    #[test]
    fn shallow_edge_hits_in_both_directions() {
        // pixels of (0,0)-(7,-5) on the row y = -1 are x = 1 and x = 2
        for &(x0, y0, x1, y1) in &[(0, 0, 7, -5), (7, -5, 0, 0)] {
            assert_eq!(
                point_crossings_from_edge(0, 1, -1, x0, y0, x1, y1, true, true),
                SHAPE_INTERSECTS
            );
            assert_eq!(
                point_crossings_from_edge(0, 2, -1, x0, y0, x1, y1, true, true),
                SHAPE_INTERSECTS
            );
        }
        assert_eq!(point_crossings_from_edge(0, 0, -1, 7, -5, 0, 0, true, true), 2);
        assert_eq!(point_crossings_from_edge(0, 3, -1, 7, -5, 0, 0, true, true), 0);
    }

    #[test]
    fn rect_crossings() {
        // rectangle [0, 2] x [0, 2]
        assert_eq!(rect_crossings_from_edge(0, 0, 0, 2, 2, 5, -1, 5, 3), 2);
        assert_eq!(rect_crossings_from_edge(0, 0, 0, 2, 2, 5, 3, 5, -1), -2);
        assert_eq!(
            rect_crossings_from_edge(0, 0, 0, 2, 2, 1, -1, 1, 3),
            SHAPE_INTERSECTS
        );
        assert_eq!(
            rect_crossings_from_edge(0, 0, 0, 2, 2, -3, 1, 8, 1),
            SHAPE_INTERSECTS
        );
        assert_eq!(rect_crossings_from_edge(0, 0, 0, 2, 2, -5, -1, -5, 3), 0);
    }

    #[test]
    fn circle_crossings() {
        assert_eq!(circle_crossings_from_edge(0, 0, 0, 2, 5, -4, 5, 4), 2);
        assert_eq!(
            circle_crossings_from_edge(0, 0, 0, 2, 2, -4, 2, 4),
            SHAPE_INTERSECTS
        );
    }
}
