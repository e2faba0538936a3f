//! Closest and farthest points of a flattened path.

use super::crossings::point_crossings_from_edge;
use super::segment_intersect::{segment_closest_point, segment_farthest_point};
use crate::core::math::Point3i;
use crate::shape::{PathElement, WindingRule, SHAPE_INTERSECTS};

/// Point of the flattened path closest to `p`.
///
/// `p` itself is returned when it lies inside the area of the path under `winding_rule`,
/// the last part being implicitly closed. Candidates are ranked with the manhattan distance,
/// ties prefer the smaller of the two axis offsets.
pub fn path_closest_point<I>(flattened: I, winding_rule: WindingRule, p: Point3i) -> Point3i
where
    I: IntoIterator<Item = PathElement>,
{
    let (x, y) = (p.x, p.y);
    let mut best: Option<(i64, i64, (i32, i32))> = None;
    let mut crossings = 0;
    let mut move_point: Option<Point3i> = None;
    let mut current = Point3i::zero();
    let mut closed = false;

    for element in flattened {
        let (a, b) = match element {
            PathElement::MoveTo { to } => {
                move_point = Some(to);
                current = to;
                closed = false;
                continue;
            }
            PathElement::Close { from, to } if from.same_xy(&to) => {
                closed = true;
                current = to;
                continue;
            }
            e => (e.from(), e.to()),
        };

        let (cx, cy) = segment_closest_point(a.x, a.y, b.x, b.y, x, y);
        let dx = (i64::from(cx) - i64::from(x)).abs();
        let dy = (i64::from(cy) - i64::from(y)).abs();
        let d = dx + dy;
        if d == 0 {
            return Point3i::new(cx, cy, p.z);
        }
        let tie = dx.min(dy);
        if best.is_none_or(|(min_d, min_tie, _)| d < min_d || (d == min_d && tie < min_tie)) {
            best = Some((d, tie, (cx, cy)));
        }

        crossings = point_crossings_from_edge(crossings, x, y, a.x, a.y, b.x, b.y, true, true);
        if crossings == SHAPE_INTERSECTS {
            return p;
        }
        closed = matches!(element, PathElement::Close { .. });
        current = b;
    }

    if let Some(mv) = move_point {
        if !closed && !current.same_xy(&mv) {
            crossings =
                point_crossings_from_edge(crossings, x, y, current.x, current.y, mv.x, mv.y, true, true);
        }
    }

    if crossings == SHAPE_INTERSECTS || (crossings & winding_rule.point_mask()) != 0 {
        return p;
    }

    match (best, move_point) {
        (Some((_, _, (bx, by))), _) => Point3i::new(bx, by, p.z),
        (None, Some(mv)) => Point3i::new(mv.x, mv.y, p.z),
        (None, None) => p,
    }
}

/// Point of the flattened path farthest from `p`.
///
/// Candidates are ranked with the manhattan distance, ties prefer the smaller of the two
/// axis offsets. An empty path returns `p`.
pub fn path_farthest_point<I>(flattened: I, p: Point3i) -> Point3i
where
    I: IntoIterator<Item = PathElement>,
{
    let (x, y) = (p.x, p.y);
    let mut best: Option<(i64, i64)> = None;
    let mut result = (x, y);

    for element in flattened {
        let candidate = match element {
            PathElement::MoveTo { to } => (to.x, to.y),
            e => {
                let (a, b) = (e.from(), e.to());
                segment_farthest_point(a.x, a.y, b.x, b.y, x, y)
            }
        };
        let dx = (i64::from(candidate.0) - i64::from(x)).abs();
        let dy = (i64::from(candidate.1) - i64::from(y)).abs();
        let d = dx + dy;
        let tie = dx.min(dy);
        if best.is_none_or(|(max_d, min_tie)| d > max_d || (d == max_d && tie < min_tie)) {
            best = Some((d, tie));
            result = candidate;
        }
    }

    Point3i::new(result.0, result.1, p.z)
}
