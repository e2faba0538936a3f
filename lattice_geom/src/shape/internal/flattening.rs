//! Recursive subdivision of quadratic and cubic curves into line end points.

use crate::core::math::{
    dist_squared_line_point, dist_squared_segment_point, Point3d, Point3i,
};
use crate::shape::{FlatteningOptions, PathElement};
use tracing::trace;

#[derive(Debug, Clone, Copy)]
enum Curve {
    Quad([Point3d; 3]),
    Cubic([Point3d; 4]),
}

#[inline]
fn mid(a: Point3d, b: Point3d) -> Point3d {
    Point3d::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

impl Curve {
    fn end(&self) -> Point3d {
        match self {
            Curve::Quad(pts) => pts[2],
            Curve::Cubic(pts) => pts[3],
        }
    }

    /// Squared distance used as flatness measure.
    fn flatness_squared(&self) -> f64 {
        match self {
            Curve::Quad([start, ctrl, end]) => {
                dist_squared_line_point(start.x, start.y, end.x, end.y, ctrl.x, ctrl.y)
            }
            Curve::Cubic([start, ctrl1, ctrl2, end]) => {
                let d1 = dist_squared_segment_point(end.x, end.y, ctrl1.x, ctrl1.y, start.x, start.y);
                let d2 = dist_squared_segment_point(end.x, end.y, ctrl2.x, ctrl2.y, start.x, start.y);
                d1.max(d2)
            }
        }
    }

    /// Split at parameter 0.5 (de Casteljau).
    fn subdivide(&self) -> (Curve, Curve) {
        match *self {
            Curve::Quad([start, ctrl, end]) => {
                let left_ctrl = mid(start, ctrl);
                let right_ctrl = mid(ctrl, end);
                let m = mid(left_ctrl, right_ctrl);
                (
                    Curve::Quad([start, left_ctrl, m]),
                    Curve::Quad([m, right_ctrl, end]),
                )
            }
            Curve::Cubic([start, ctrl1, ctrl2, end]) => {
                let a = mid(start, ctrl1);
                let b = mid(end, ctrl2);
                let c = mid(ctrl1, ctrl2);
                let d1 = mid(a, c);
                let d2 = mid(b, c);
                let m = mid(d1, d2);
                (
                    Curve::Cubic([start, a, d1, m]),
                    Curve::Cubic([m, d2, b, end]),
                )
            }
        }
    }
}

/// Visit the end points of the lines approximating a curved element, in order.
///
/// Non curved elements produce their `to` point only.
pub fn flatten_curve<F>(element: &PathElement<Point3d>, options: &FlatteningOptions, mut visitor: F)
where
    F: FnMut(Point3d),
{
    let curve = match *element {
        PathElement::QuadTo { from, ctrl, to } => Curve::Quad([from, ctrl, to]),
        PathElement::CurveTo {
            from,
            ctrl1,
            ctrl2,
            to,
        } => Curve::Cubic([from, ctrl1, ctrl2, to]),
        _ => {
            visitor(element.to());
            return;
        }
    };

    let tolerance_sq = options.tolerance * options.tolerance;
    let mut stack = Vec::with_capacity(options.limit as usize + 2);
    stack.push((curve, 0u32));
    while let Some((c, level)) = stack.pop() {
        let flat = c.flatness_squared() < tolerance_sq;
        if level < options.limit && !flat {
            let (left, right) = c.subdivide();
            stack.push((right, level + 1));
            stack.push((left, level + 1));
        } else {
            if !flat {
                trace!(level, "flattening depth limit reached");
            }
            visitor(c.end());
        }
    }
}

/// Lattice end points of the lines approximating a curved element starting at its `from`
/// point. Consecutive duplicates, and points equal to `from`, are dropped.
pub fn flattened_points(element: &PathElement, options: &FlatteningOptions) -> Vec<Point3i> {
    let mut points: Vec<Point3i> = Vec::new();
    let mut last = element.from();
    flatten_curve(&element.map(|p| p.to_f64()), options, |p| {
        let p = p.round_to_lattice();
        if p != last {
            points.push(p);
            last = p;
        }
    });
    points
}
