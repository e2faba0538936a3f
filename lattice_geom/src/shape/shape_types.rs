//! Small enums and constants shared by every shape.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Crossing number value reserved to report that the query primitive touches the boundary.
///
/// It is ambiguous as a count but definite as an intersection: `intersects` treats it as
/// `true`, `contains` of an area treats it as `false`.
pub const SHAPE_INTERSECTS: i32 = i32::MIN;

/// Default flattening tolerance used when curves are approximated by lines.
pub const SPLINE_APPROXIMATION_RATIO: f64 = 0.1;

/// Default maximum subdivision depth of the flattening iterator.
pub const DEFAULT_FLATTENING_LIMIT: u32 = 10;

/// Policy used to turn a crossing number into an inside/outside decision.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum WindingRule {
    /// Inside when the crossing number is not zero.
    #[default]
    NonZero,
    /// Inside when the crossing number is odd.
    EvenOdd,
}

impl WindingRule {
    /// Mask applied to point crossing numbers (each boundary crossing counts once).
    #[inline]
    pub fn point_mask(self) -> i32 {
        match self {
            WindingRule::NonZero => -1,
            WindingRule::EvenOdd => 1,
        }
    }

    /// Mask applied to area crossing numbers (rectangles, circles, segments and paths count
    /// each crossing edge twice, once per horizontal shadow line).
    #[inline]
    pub fn area_mask(self) -> i32 {
        match self {
            WindingRule::NonZero => -1,
            WindingRule::EvenOdd => 2,
        }
    }
}

/// Kind of a path element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum PathElementType {
    MoveTo,
    LineTo,
    QuadTo,
    CurveTo,
    Close,
}

/// How an open path is treated by the crossing computations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CrossingComputationType {
    /// Never close the path. Direct hits still report [SHAPE_INTERSECTS].
    #[default]
    Standard,
    /// Account for the implicit edge from the last point back to the last move point.
    AutoClose,
    /// Like [CrossingComputationType::Standard] for hits, but an open path never reports
    /// a non-zero count.
    SimpleIntersectionWhenNotPolygon,
}

/// Options of the flattening path iterator.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FlatteningOptions {
    /// Maximum allowed distance between a curve and its approximating lines.
    pub tolerance: f64,
    /// Maximum subdivision depth of a single curve element.
    pub limit: u32,
}

impl FlatteningOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: SPLINE_APPROXIMATION_RATIO,
            limit: DEFAULT_FLATTENING_LIMIT,
        }
    }

    #[inline]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::new()
        }
    }
}

impl Default for FlatteningOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Side of an axis aligned box, in the order used by the perimeter point iterator.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Next side in perimeter order.
    #[inline]
    pub fn next(self) -> Side {
        match self {
            Side::Top => Side::Right,
            Side::Right => Side::Bottom,
            Side::Bottom => Side::Left,
            Side::Left => Side::Top,
        }
    }
}
