//! Crossing numbers of query primitives against a whole path.
//!
//! The path is walked element by element, curves are flattened on the fly with the default
//! [FlatteningOptions], and the per edge contributions from [super::crossings] are summed. The
//! walk stops as soon as an edge reports [SHAPE_INTERSECTS].

use super::crossings::{
    circle_crossings_from_edge, point_crossings_from_edge, rect_crossings_from_edge,
    segment_crossings_from_edge,
};
use super::flattening::flattened_points;
use crate::core::math::Point3i;
use crate::shape::{CrossingComputationType, FlatteningOptions, PathElement, SHAPE_INTERSECTS};
use tracing::trace;

/// How the walk treats the end of the path.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CrossingScan {
    /// Point whose crossings are computed, an auto closing edge landing on it is a hit.
    pub point_query: Option<(i32, i32)>,
    /// Stop at the first close element that leaves a non zero count.
    pub stop_after_close: bool,
}

/// Sum the crossings of every edge of `elements` using `edge_crossings`.
pub(crate) fn accumulate_crossings<I, F>(
    elements: I,
    computation: CrossingComputationType,
    scan: CrossingScan,
    query: &'static str,
    mut edge_crossings: F,
) -> i32
where
    I: IntoIterator<Item = PathElement>,
    F: FnMut(i32, i32, i32, i32, i32) -> i32,
{
    let options = FlatteningOptions::new();
    let mut move_point: Option<Point3i> = None;
    let mut current = Point3i::zero();
    let mut n = 0;

    macro_rules! edge {
        ($from:expr, $to:expr) => {{
            let (a, b): (Point3i, Point3i) = ($from, $to);
            n = edge_crossings(n, a.x, a.y, b.x, b.y);
            if n == SHAPE_INTERSECTS {
                trace!(query, "boundary touched, crossing scan stopped");
                return SHAPE_INTERSECTS;
            }
        }};
    }

    for element in elements {
        if move_point.is_none() {
            move_point = Some(element.from());
        }
        match element {
            PathElement::MoveTo { to } => {
                move_point = Some(to);
                current = to;
            }
            PathElement::LineTo { from, to } => {
                edge!(from, to);
                current = to;
            }
            PathElement::QuadTo { from, to, .. } | PathElement::CurveTo { from, to, .. } => {
                let mut prev = from;
                for p in flattened_points(&element, &options) {
                    edge!(prev, p);
                    prev = p;
                }
                current = to;
            }
            PathElement::Close { from, to } => {
                if !from.same_xy(&to) {
                    edge!(from, to);
                }
                if scan.stop_after_close && n != 0 {
                    return n;
                }
                current = to;
            }
        }
    }

    if let Some(mv) = move_point {
        if !current.same_xy(&mv) {
            match computation {
                CrossingComputationType::AutoClose => {
                    if scan.point_query == Some((mv.x, mv.y)) {
                        trace!(query, "auto close edge ends on the query point");
                        return SHAPE_INTERSECTS;
                    }
                    edge!(current, mv);
                }
                CrossingComputationType::SimpleIntersectionWhenNotPolygon => n = 0,
                CrossingComputationType::Standard => {}
            }
        }
    }

    n
}

/// Crossings of the horizontal half line starting at `(px, py)` with the path.
///
/// # Examples
///
/// ```
/// # use lattice_geom::shape::*;
/// # use lattice_geom::path_closed;
/// # use lattice_geom::shape::internal::path_crossings::*;
/// let square = path_closed![(0, 0, 0), (4, 0, 0), (4, 4, 0), (0, 4, 0)];
/// let n = point_crossings_from_path(square.path_iter(), 2, 2, CrossingComputationType::Standard);
/// assert_ne!(n, 0);
/// let n = point_crossings_from_path(square.path_iter(), 6, 2, CrossingComputationType::Standard);
/// assert_eq!(n, 0);
/// ```
pub fn point_crossings_from_path<I>(
    elements: I,
    px: i32,
    py: i32,
    computation: CrossingComputationType,
) -> i32
where
    I: IntoIterator<Item = PathElement>,
{
    let scan = CrossingScan {
        point_query: Some((px, py)),
        stop_after_close: false,
    };
    accumulate_crossings(elements, computation, scan, "point", |n, x0, y0, x1, y1| {
        point_crossings_from_edge(n, px, py, x0, y0, x1, y1, true, true)
    })
}

/// Crossings of the closed rectangle `[rxmin, rxmax] x [rymin, rymax]` with the path.
pub fn rect_crossings_from_path<I>(
    elements: I,
    rxmin: i32,
    rymin: i32,
    rxmax: i32,
    rymax: i32,
    computation: CrossingComputationType,
) -> i32
where
    I: IntoIterator<Item = PathElement>,
{
    let scan = CrossingScan {
        point_query: None,
        stop_after_close: true,
    };
    accumulate_crossings(elements, computation, scan, "rect", |n, x0, y0, x1, y1| {
        rect_crossings_from_edge(n, rxmin, rymin, rxmax, rymax, x0, y0, x1, y1)
    })
}

/// Crossings of the segment `(sx1, sy1) -> (sx2, sy2)` with the path.
pub fn segment_crossings_from_path<I>(
    elements: I,
    sx1: i32,
    sy1: i32,
    sx2: i32,
    sy2: i32,
    computation: CrossingComputationType,
) -> i32
where
    I: IntoIterator<Item = PathElement>,
{
    accumulate_crossings(
        elements,
        computation,
        CrossingScan::default(),
        "segment",
        |n, x0, y0, x1, y1| segment_crossings_from_edge(n, sx1, sy1, sx2, sy2, x0, y0, x1, y1),
    )
}

/// Crossings of the circle of center `(cx, cy)` with the path.
pub fn circle_crossings_from_path<I>(
    elements: I,
    cx: i32,
    cy: i32,
    radius: i32,
    computation: CrossingComputationType,
) -> i32
where
    I: IntoIterator<Item = PathElement>,
{
    accumulate_crossings(
        elements,
        computation,
        CrossingScan::default(),
        "circle",
        |n, x0, y0, x1, y1| circle_crossings_from_edge(n, cx, cy, radius, x0, y0, x1, y1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::pt3;

    fn open_triangle() -> Vec<PathElement> {
        vec![
            PathElement::MoveTo { to: pt3(0, 0, 0) },
            PathElement::LineTo {
                from: pt3(0, 0, 0),
                to: pt3(6, 0, 0),
            },
            PathElement::LineTo {
                from: pt3(6, 0, 0),
                to: pt3(3, 6, 0),
            },
        ]
    }

    #[test]
    fn open_path_policies() {
        // the point is on the left of the open triangle, only the closing edge tells it is
        // outside
        let standard =
            point_crossings_from_path(open_triangle(), -2, 2, CrossingComputationType::Standard);
        let auto_close =
            point_crossings_from_path(open_triangle(), -2, 2, CrossingComputationType::AutoClose);
        let simple = point_crossings_from_path(
            open_triangle(),
            -2,
            2,
            CrossingComputationType::SimpleIntersectionWhenNotPolygon,
        );
        assert_eq!(standard, 2);
        assert_eq!(auto_close, 0);
        assert_eq!(simple, 0);

        let inside =
            point_crossings_from_path(open_triangle(), 3, 2, CrossingComputationType::AutoClose);
        assert_eq!(inside, 2);
    }

    #[test]
    fn hits_short_circuit() {
        assert_eq!(
            point_crossings_from_path(open_triangle(), 5, 2, CrossingComputationType::Standard),
            SHAPE_INTERSECTS
        );
        assert_eq!(
            rect_crossings_from_path(open_triangle(), 2, -1, 3, 1, CrossingComputationType::Standard),
            SHAPE_INTERSECTS
        );
    }

    #[test]
    fn empty_path_has_no_crossings() {
        assert_eq!(
            point_crossings_from_path(Vec::new(), 0, 0, CrossingComputationType::AutoClose),
            0
        );
    }
}
