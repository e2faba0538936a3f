use super::{PathElementType, WindingRule};
use crate::core::math::{Point3d, Point3i};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawing command produced by a path iterator.
///
/// Every variant except [PathElement::MoveTo] carries the point it starts from (the end point
/// of the previous element), so an element can be processed without looking back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "camelCase")
)]
pub enum PathElement<P = Point3i> {
    MoveTo { to: P },
    LineTo { from: P, to: P },
    QuadTo { from: P, ctrl: P, to: P },
    CurveTo { from: P, ctrl1: P, ctrl2: P, to: P },
    /// Closing edge, `to` is the point of the most recent move.
    Close { from: P, to: P },
}

impl<P> PathElement<P>
where
    P: Copy + PartialEq,
{
    #[inline]
    pub fn kind(&self) -> PathElementType {
        match self {
            PathElement::MoveTo { .. } => PathElementType::MoveTo,
            PathElement::LineTo { .. } => PathElementType::LineTo,
            PathElement::QuadTo { .. } => PathElementType::QuadTo,
            PathElement::CurveTo { .. } => PathElementType::CurveTo,
            PathElement::Close { .. } => PathElementType::Close,
        }
    }

    /// Start point of the element. A move starts where it lands.
    #[inline]
    pub fn from(&self) -> P {
        match *self {
            PathElement::MoveTo { to } => to,
            PathElement::LineTo { from, .. }
            | PathElement::QuadTo { from, .. }
            | PathElement::CurveTo { from, .. }
            | PathElement::Close { from, .. } => from,
        }
    }

    /// End point of the element.
    #[inline]
    pub fn to(&self) -> P {
        match *self {
            PathElement::MoveTo { to }
            | PathElement::LineTo { to, .. }
            | PathElement::QuadTo { to, .. }
            | PathElement::CurveTo { to, .. }
            | PathElement::Close { to, .. } => to,
        }
    }

    /// Returns `true` if the element neither changes the position nor has a control point
    /// away from it. Moves never draw and are always empty.
    pub fn is_empty(&self) -> bool {
        match *self {
            PathElement::MoveTo { .. } => true,
            PathElement::LineTo { from, to } | PathElement::Close { from, to } => from == to,
            PathElement::QuadTo { from, ctrl, to } => from == ctrl && ctrl == to,
            PathElement::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => from == ctrl1 && ctrl1 == ctrl2 && ctrl2 == to,
        }
    }

    /// Returns `true` if the element leaves a visible mark.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        !self.is_empty()
    }

    /// Apply `f` to every point of the element.
    pub fn map<Q, F>(self, mut f: F) -> PathElement<Q>
    where
        F: FnMut(P) -> Q,
    {
        match self {
            PathElement::MoveTo { to } => PathElement::MoveTo { to: f(to) },
            PathElement::LineTo { from, to } => PathElement::LineTo {
                from: f(from),
                to: f(to),
            },
            PathElement::QuadTo { from, ctrl, to } => PathElement::QuadTo {
                from: f(from),
                ctrl: f(ctrl),
                to: f(to),
            },
            PathElement::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => PathElement::CurveTo {
                from: f(from),
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            PathElement::Close { from, to } => PathElement::Close {
                from: f(from),
                to: f(to),
            },
        }
    }

    /// Control points of curved elements (empty for the other kinds).
    pub fn ctrl_points(&self) -> impl Iterator<Item = P> {
        let (a, b) = match *self {
            PathElement::QuadTo { ctrl, .. } => (Some(ctrl), None),
            PathElement::CurveTo { ctrl1, ctrl2, .. } => (Some(ctrl1), Some(ctrl2)),
            _ => (None, None),
        };
        a.into_iter().chain(b)
    }
}

/// Lazy, finite and restartable sequence of path elements.
///
/// Iterators borrow the shape they walk, so the shape cannot change while an iteration is in
/// progress. Use [PathIterator::restart] to walk the same shape again from the beginning.
pub trait PathIterator: Iterator<Item = PathElement> + Clone {
    fn winding_rule(&self) -> WindingRule;

    /// Returns `true` if the elements are a single move followed by at least one line.
    fn is_polyline(&self) -> bool;

    /// Returns `true` if at least one element is a quadratic or cubic curve.
    fn is_curved(&self) -> bool;

    /// Returns `true` if the elements contain more than one move.
    fn is_multi_parts(&self) -> bool;

    /// Returns `true` if the elements form a single closed part.
    fn is_polygon(&self) -> bool;

    /// Fresh iterator positioned at the first element.
    fn restart(&self) -> Self;

    /// Next element with the coordinates the shape computes before snapping them to the
    /// lattice. Shapes stored on the lattice return their exact coordinates.
    #[inline]
    fn next_precise(&mut self) -> Option<PathElement<Point3d>> {
        self.next().map(|e| e.map(|p| p.to_f64()))
    }
}
