//! Iterators over any shape variant, returned by [super::ShapeRef::path_iter] and
//! [super::ShapeRef::point_iter].

use super::internal::circle_perimeter::CirclePerimeterIter;
use super::{
    BoxPathIter, BoxPointIter, MultiPathIter, MultiPointIter, PathElement, PathIter,
    PathIterator, PathPointIter, SegmentPathIter, SegmentPointIter, SpherePathIter, WindingRule,
};
use crate::core::math::{Point3d, Point3i};

/// Path iterator of any shape variant.
#[derive(Debug, Clone)]
pub enum ShapePathIter<'a> {
    Segment(SegmentPathIter),
    AlignedBox(BoxPathIter),
    Sphere(SpherePathIter),
    Path(PathIter<'a>),
    Multi(MultiPathIter<'a>),
}

macro_rules! delegate {
    ($self:expr, $iter:ident => $e:expr) => {
        match $self {
            ShapePathIter::Segment($iter) => $e,
            ShapePathIter::AlignedBox($iter) => $e,
            ShapePathIter::Sphere($iter) => $e,
            ShapePathIter::Path($iter) => $e,
            ShapePathIter::Multi($iter) => $e,
        }
    };
}

impl Iterator for ShapePathIter<'_> {
    type Item = PathElement;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        delegate!(self, iter => iter.next())
    }
}

impl PathIterator for ShapePathIter<'_> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        delegate!(self, iter => iter.winding_rule())
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        delegate!(self, iter => iter.is_polyline())
    }

    #[inline]
    fn is_curved(&self) -> bool {
        delegate!(self, iter => iter.is_curved())
    }

    #[inline]
    fn is_multi_parts(&self) -> bool {
        delegate!(self, iter => iter.is_multi_parts())
    }

    #[inline]
    fn is_polygon(&self) -> bool {
        delegate!(self, iter => iter.is_polygon())
    }

    fn restart(&self) -> Self {
        match self {
            ShapePathIter::Segment(iter) => ShapePathIter::Segment(iter.restart()),
            ShapePathIter::AlignedBox(iter) => ShapePathIter::AlignedBox(iter.restart()),
            ShapePathIter::Sphere(iter) => ShapePathIter::Sphere(iter.restart()),
            ShapePathIter::Path(iter) => ShapePathIter::Path(iter.restart()),
            ShapePathIter::Multi(iter) => ShapePathIter::Multi(iter.restart()),
        }
    }

    #[inline]
    fn next_precise(&mut self) -> Option<PathElement<Point3d>> {
        delegate!(self, iter => iter.next_precise())
    }
}

/// Point iterator of any shape variant.
#[derive(Debug, Clone)]
pub enum ShapePointIter<'a> {
    Segment(SegmentPointIter),
    AlignedBox(BoxPointIter),
    Sphere(CirclePerimeterIter),
    Path(PathPointIter<'a>),
    Multi(MultiPointIter<'a>),
}

impl Iterator for ShapePointIter<'_> {
    type Item = Point3i;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ShapePointIter::Segment(iter) => iter.next(),
            ShapePointIter::AlignedBox(iter) => iter.next(),
            ShapePointIter::Sphere(iter) => iter.next(),
            ShapePointIter::Path(iter) => iter.next(),
            ShapePointIter::Multi(iter) => iter.next(),
        }
    }
}
