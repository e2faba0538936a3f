//! Path iterator adapters: on the fly transformation and curve flattening.

use super::internal::flattening::flatten_curve;
use super::{FlatteningOptions, PathElement, PathIterator, WindingRule};
use crate::core::math::{Point3d, Point3i, Transform3D};
use std::collections::VecDeque;

/// Path iterator emitting the elements of `inner` with every point transformed.
///
/// Points are transformed from the coordinates the inner iterator computes before snapping
/// them to the lattice, then rounded half up. The source shape is never modified.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let seg = Segment::new(0, 0, 0, 3, 1, 0);
/// let t = AffineTransform3D::translation(1.0, 2.0, 0.0);
/// let elements: Vec<_> = TransformedPathIter::new(seg.path_iter(), &t).collect();
/// assert_eq!(elements[1].to(), pt3(4, 3, 0));
/// // the segment itself is unchanged
/// assert_eq!(seg.p2(), pt3(3, 1, 0));
/// ```
pub struct TransformedPathIter<'t, I, T> {
    inner: I,
    transform: &'t T,
}

impl<'t, I, T> TransformedPathIter<'t, I, T>
where
    I: PathIterator,
    T: Transform3D,
{
    #[inline]
    pub fn new(inner: I, transform: &'t T) -> Self {
        Self { inner, transform }
    }
}

impl<I, T> Clone for TransformedPathIter<'_, I, T>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            transform: self.transform,
        }
    }
}

impl<I, T> Iterator for TransformedPathIter<'_, I, T>
where
    I: PathIterator,
    T: Transform3D,
{
    type Item = PathElement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.transform.is_identity() {
            return self.inner.next();
        }
        let transform = self.transform;
        self.inner
            .next_precise()
            .map(|e| e.map(|p| transform.apply_to_point(p).round_to_lattice()))
    }
}

impl<I, T> PathIterator for TransformedPathIter<'_, I, T>
where
    I: PathIterator,
    T: Transform3D,
{
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        self.inner.is_polyline()
    }

    #[inline]
    fn is_curved(&self) -> bool {
        self.inner.is_curved()
    }

    #[inline]
    fn is_multi_parts(&self) -> bool {
        self.inner.is_multi_parts()
    }

    #[inline]
    fn is_polygon(&self) -> bool {
        self.inner.is_polygon()
    }

    #[inline]
    fn restart(&self) -> Self {
        Self {
            inner: self.inner.restart(),
            transform: self.transform,
        }
    }

    fn next_precise(&mut self) -> Option<PathElement<Point3d>> {
        let transform = self.transform;
        self.inner
            .next_precise()
            .map(|e| e.map(|p| transform.apply_to_point(p)))
    }
}

/// Path iterator replacing the curves of `inner` by lines.
///
/// Emitted coordinates are rounded to the lattice and lines that would not move the current
/// point are dropped, so the output only has moves, visible lines and closes.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let s = Sphere::new(0, 0, 0, 10);
/// let flat = FlatteningPathIter::new(s.path_iter(), FlatteningOptions::new());
/// assert!(!flat.is_curved());
/// assert!(flat.clone().all(|e| e.kind() != PathElementType::CurveTo));
/// ```
#[derive(Debug, Clone)]
pub struct FlatteningPathIter<I> {
    inner: I,
    options: FlatteningOptions,
    pending: VecDeque<PathElement>,
    last: Option<Point3i>,
    move_point: Option<Point3i>,
}

impl<I> FlatteningPathIter<I>
where
    I: PathIterator,
{
    pub fn new(inner: I, options: FlatteningOptions) -> Self {
        Self {
            inner,
            options,
            pending: VecDeque::new(),
            last: None,
            move_point: None,
        }
    }

    fn push_line(&mut self, to: Point3i) {
        match self.last {
            Some(from) if from == to => {}
            Some(from) => {
                self.pending.push_back(PathElement::LineTo { from, to });
                self.last = Some(to);
            }
            None => {
                self.pending.push_back(PathElement::MoveTo { to });
                self.last = Some(to);
                self.move_point = Some(to);
            }
        }
    }
}

impl<I> Iterator for FlatteningPathIter<I>
where
    I: PathIterator,
{
    type Item = PathElement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.pending.pop_front() {
                return Some(e);
            }

            let element = self.inner.next_precise()?;
            match element {
                PathElement::MoveTo { to } => {
                    let to = to.round_to_lattice();
                    self.last = Some(to);
                    self.move_point = Some(to);
                    return Some(PathElement::MoveTo { to });
                }
                PathElement::LineTo { to, .. } => self.push_line(to.round_to_lattice()),
                PathElement::QuadTo { .. } | PathElement::CurveTo { .. } => {
                    let mut points = Vec::new();
                    flatten_curve(&element, &self.options, |p| points.push(p.round_to_lattice()));
                    for p in points {
                        self.push_line(p);
                    }
                }
                PathElement::Close { .. } => {
                    if let (Some(from), Some(to)) = (self.last, self.move_point) {
                        self.last = Some(to);
                        return Some(PathElement::Close { from, to });
                    }
                }
            }
        }
    }
}

impl<I> PathIterator for FlatteningPathIter<I>
where
    I: PathIterator,
{
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        self.inner.is_polyline()
    }

    #[inline]
    fn is_curved(&self) -> bool {
        false
    }

    #[inline]
    fn is_multi_parts(&self) -> bool {
        self.inner.is_multi_parts()
    }

    #[inline]
    fn is_polygon(&self) -> bool {
        self.inner.is_polygon()
    }

    #[inline]
    fn restart(&self) -> Self {
        FlatteningPathIter::new(self.inner.restart(), self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{pt3, AffineTransform3D};
    use crate::shape::{PathElementType, Sphere};

    #[test]
    fn identity_transform_keeps_truncated_points() {
        let s = Sphere::new(-5, 18, 0, 2);
        let t = AffineTransform3D::identity();
        let plain: Vec<_> = s.path_iter().collect();
        let transformed: Vec<_> = TransformedPathIter::new(s.path_iter(), &t).collect();
        assert_eq!(plain, transformed);
    }

    #[test]
    fn transform_rounds_precise_points() {
        let s = Sphere::new(-5, 18, 0, 2);
        let t = AffineTransform3D::translation(1.0, 0.0, 0.0);
        let mut iter = TransformedPathIter::new(s.path_iter(), &t);
        assert_eq!(iter.next(), Some(PathElement::MoveTo { to: pt3(-2, 18, 0) }));
        // the first control point is at y = 19.1, rounded instead of truncated
        let Some(PathElement::CurveTo { ctrl1, ctrl2, .. }) = iter.next() else {
            panic!("expected a curve");
        };
        assert_eq!(ctrl1, pt3(-2, 19, 0));
        assert_eq!(ctrl2, pt3(-3, 20, 0));
    }

    #[test]
    fn flattened_sphere_is_closed_polygon() {
        let s = Sphere::new(0, 0, 0, 5);
        let elements: Vec<_> =
            FlatteningPathIter::new(s.path_iter(), FlatteningOptions::new()).collect();
        assert_eq!(elements.first().map(|e| e.kind()), Some(PathElementType::MoveTo));
        assert_eq!(elements.last().map(|e| e.kind()), Some(PathElementType::Close));
        assert!(elements[1..elements.len() - 1]
            .iter()
            .all(|e| e.kind() == PathElementType::LineTo && e.from() != e.to()));
        // every element starts where the previous one ended
        for pair in elements.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
    }

    #[test]
    fn restart_is_independent() {
        let s = Sphere::new(0, 0, 0, 5);
        let mut a = FlatteningPathIter::new(s.path_iter(), FlatteningOptions::new());
        a.next();
        a.next();
        let b = a.restart();
        assert_eq!(
            b.collect::<Vec<_>>(),
            FlatteningPathIter::new(s.path_iter(), FlatteningOptions::new()).collect::<Vec<_>>()
        );
    }
}
