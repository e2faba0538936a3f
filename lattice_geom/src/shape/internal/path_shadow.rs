//! Crossings of one path against the edges of another path.
//!
//! The shadow of a path is the region on the right of it between the horizontal lines through
//! the bottom and the top of its drawable bounding box. An edge of the other path that crosses
//! the bounding box is tested against every edge of the shadowed path. Each crossing of the
//! shadow lines is counted the way a rectangle query counts its two half lines.

use super::crossings::rect_crossings_from_edge;
use super::flattening::flattened_points;
use super::path_crossings::{accumulate_crossings, CrossingScan};
use super::segment_intersect::segments_intersect;
use crate::core::math::{min_max, round_half_up, side_of_line, Point3i};
use crate::shape::{
    AlignedBox, CrossingComputationType, FlatteningOptions, PathElement, PathIterator,
    WindingRule, SHAPE_INTERSECTS,
};

/// Shadow of a path, computing the crossings contributed by edges of another path.
#[derive(Debug, Clone)]
pub struct PathShadow<S> {
    source: S,
    bounds: Option<AlignedBox>,
    winding_rule: WindingRule,
}

impl<S> PathShadow<S>
where
    S: PathIterator,
{
    /// Create the shadow of the path walked by `source`, `bounds` is its drawable bounding box
    /// (`None` when the path draws nothing).
    pub fn new(source: S, bounds: Option<AlignedBox>) -> Self {
        let winding_rule = source.winding_rule();
        Self {
            source,
            bounds,
            winding_rule,
        }
    }

    /// Crossings after adding the edge `(x0, y0) -> (x1, y1)` to `crossings`.
    pub fn compute_crossings(&self, crossings: i32, x0: i32, y0: i32, x1: i32, y1: i32) -> i32 {
        let Some(bounds) = self.bounds.as_ref() else {
            return crossings;
        };
        let min = bounds.min();
        let max = bounds.max();

        let n = rect_crossings_from_edge(crossings, min.x, min.y, max.x, max.y, x0, y0, x1, y1);
        if n != SHAPE_INTERSECTS {
            return n;
        }

        let mut data = ShadowData::new(min.x, min.y, max.y);
        data.discretize(self.source.restart(), x0, y0, x1, y1);

        if data.crossings == SHAPE_INTERSECTS
            || (data.crossings & self.winding_rule.area_mask()) != 0
        {
            return SHAPE_INTERSECTS;
        }

        let increment = i32::from(data.has_min) + i32::from(data.has_max);
        if y0 < y1 {
            crossings + increment
        } else {
            crossings - increment
        }
    }
}

#[derive(Debug)]
struct ShadowData {
    crossings: i32,
    has_min: bool,
    has_max: bool,
    x4_min: i32,
    x4_max: i32,
    bounds_min_y: i32,
    bounds_max_y: i32,
}

impl ShadowData {
    fn new(bounds_min_x: i32, bounds_min_y: i32, bounds_max_y: i32) -> Self {
        Self {
            crossings: 0,
            has_min: false,
            has_max: false,
            x4_min: bounds_min_x,
            x4_max: bounds_min_x,
            bounds_min_y,
            bounds_max_y,
        }
    }

    fn discretize<I>(&mut self, elements: I, sx0: i32, sy0: i32, sx1: i32, sy1: i32)
    where
        I: Iterator<Item = PathElement>,
    {
        let options = FlatteningOptions::new();
        let mut move_point: Option<Point3i> = None;
        let mut current = Point3i::zero();

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
                    self.cross_edge(from, to, sx0, sy0, sx1, sy1);
                    if self.crossings == SHAPE_INTERSECTS {
                        return;
                    }
                    current = to;
                }
                PathElement::QuadTo { from, to, .. } | PathElement::CurveTo { from, to, .. } => {
                    let mut prev = from;
                    for p in flattened_points(&element, &options) {
                        self.cross_edge(prev, p, sx0, sy0, sx1, sy1);
                        if self.crossings == SHAPE_INTERSECTS {
                            return;
                        }
                        prev = p;
                    }
                    current = to;
                }
                PathElement::Close { from, to } => {
                    if !from.same_xy(&to) {
                        self.cross_edge(from, to, sx0, sy0, sx1, sy1);
                    }
                    if self.crossings != 0 {
                        return;
                    }
                    current = to;
                }
            }
        }

        // an open path only reports direct hits
        if move_point.is_some_and(|mv| !current.same_xy(&mv)) {
            self.crossings = 0;
        }
    }

    fn set_min(&mut self, x: i32, y: i32) {
        if y <= self.bounds_min_y && x > self.x4_min {
            self.x4_min = x;
            self.has_min = true;
        }
    }

    fn set_max(&mut self, x: i32, y: i32) {
        if y >= self.bounds_max_y && x > self.x4_max {
            self.x4_max = x;
            self.has_max = true;
        }
    }

    /// Account for the shadowed edge `a -> b` against the query edge `(sx0, sy0) -> (sx1, sy1)`.
    fn cross_edge(&mut self, a: Point3i, b: Point3i, sx0: i32, sy0: i32, sx1: i32, sy1: i32) {
        let (xmin, xmax) = min_max(a.x, b.x);
        let (ymin, ymax) = min_max(a.y, b.y);

        if sy0 < ymin && sy1 < ymin {
            return;
        }
        if sy0 > ymax && sy1 > ymax {
            return;
        }
        if sx0 < xmin && sx1 < xmin {
            return;
        }

        if sx0 > xmax && sx1 > xmax {
            if sy1 == sy0 {
                return;
            }
            let alpha = ((i64::from(sx1) - i64::from(sx0)) / (i64::from(sy1) - i64::from(sy0))) as f64;
            let x_at = |y: i32| {
                round_half_up(f64::from(sx0) + (i64::from(y) - i64::from(sy0)) as f64 * alpha)
            };
            if sy0 < sy1 {
                if sy0 <= ymin {
                    self.set_min(x_at(ymin), ymin);
                    self.crossings += 1;
                }
                if sy1 >= ymax {
                    self.set_max(x_at(ymax), ymax);
                    self.crossings += 1;
                }
            } else {
                if sy1 <= ymin {
                    self.set_min(x_at(ymin), ymin);
                    self.crossings -= 1;
                }
                if sy0 >= ymax {
                    self.set_max(x_at(ymax), ymax);
                    self.crossings -= 1;
                }
            }
        } else if segments_intersect(a.x, a.y, b.x, b.y, sx0, sy0, sx1, sy1) {
            self.crossings = SHAPE_INTERSECTS;
        } else {
            let goes_up = a.y <= b.y;
            let (side1, side2) = if goes_up {
                (
                    side_of_line(a.x, a.y, b.x, b.y, sx0, sy0),
                    side_of_line(a.x, a.y, b.x, b.y, sx1, sy1),
                )
            } else {
                (
                    side_of_line(b.x, b.y, a.x, a.y, sx0, sy0),
                    side_of_line(b.x, b.y, a.x, a.y, sx1, sy1),
                )
            };
            if side1 > 0 || side2 > 0 {
                let (x_low, x_high) = if goes_up { (a.x, b.x) } else { (b.x, a.x) };
                self.cross_shadow_line(x_high, ymax, sx0, sy0, sx1, sy1, goes_up);
                self.cross_shadow_line(x_low, ymin, sx0, sy0, sx1, sy1, !goes_up);
            }
        }
    }

    /// Account for the query edge crossing the horizontal shadow line starting at
    /// `(shadow_x, shadow_y)`.
    #[allow(clippy::too_many_arguments)]
    fn cross_shadow_line(
        &mut self,
        shadow_x: i32,
        shadow_y: i32,
        sx0: i32,
        sy0: i32,
        sx1: i32,
        sy1: i32,
        is_max: bool,
    ) {
        if shadow_y < sy0 && shadow_y < sy1 {
            return;
        }
        if shadow_y > sy0 && shadow_y > sy1 {
            return;
        }
        if shadow_x > sx0 && shadow_x > sx1 {
            return;
        }
        // horizontal query edges never cross a horizontal line
        if sy1 == sy0 {
            return;
        }

        let num = (i64::from(shadow_y) - i64::from(sy0)) * (i64::from(sx1) - i64::from(sx0));
        let den = i64::from(sy1) - i64::from(sy0);
        let xi = round_half_up(f64::from(sx0) + (num / den) as f64);
        if shadow_x > xi {
            return;
        }

        if is_max {
            self.set_max(xi, shadow_y);
        } else {
            self.set_min(xi, shadow_y);
        }

        if sy0 < sy1 {
            self.crossings += 1;
        } else {
            self.crossings -= 1;
        }
    }
}

/// Crossings of the path walked by `elements` against the shadow of another path.
///
/// The walk stops at the first close element that leaves a non zero count.
pub fn path_crossings_from_shadow<I, S>(
    elements: I,
    shadow: &PathShadow<S>,
    computation: CrossingComputationType,
) -> i32
where
    I: IntoIterator<Item = PathElement>,
    S: PathIterator,
{
    let scan = CrossingScan {
        point_query: None,
        stop_after_close: true,
    };
    accumulate_crossings(
        elements,
        computation,
        scan,
        "path",
        |n, x0, y0, x1, y1| shadow.compute_crossings(n, x0, y0, x1, y1),
    )
}
