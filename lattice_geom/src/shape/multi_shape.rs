use super::{
    AlignedBox, PathElement, PathIterator, Shape, ShapePathIter, ShapePointIter, ShapeRef,
    ShapeSource, WindingRule,
};
use crate::core::math::{Point3d, Point3i, Vector3i};
use crate::core::traits::ControlFlow;
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};
use std::cell::{Cell, RefCell};
use std::fmt;
use tracing::debug;

/// Key identifying the state of the children: structure generation and wrapping sum of the
/// child generations.
type CacheKey = (u64, u64);

/// Ordered list of shapes answering queries over their union.
///
/// The bounding box of the union and a spatial index of the child bounding boxes are cached
/// and rebuilt lazily when the children change. Every `&mut self` method invalidates both.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let mut multi = MultiShape::new();
/// multi.add(AlignedBox::from_min_size(5, 8, 0, 2, 1, 0));
/// multi.add(Sphere::new(-5, 18, 0, 2));
/// assert_eq!(multi.bounding_box(), AlignedBox::from_corners(-7, 8, -2, 7, 20, 2));
///
/// multi.get_mut(0).unwrap().translate(vec3(12, -7, 0));
/// assert_eq!(multi.bounding_box(), AlignedBox::from_corners(-7, 1, -2, 19, 20, 2));
/// ```
#[derive(Default)]
pub struct MultiShape {
    children: Vec<Shape>,
    structure_generation: u64,
    bounds_cache: Cell<Option<(CacheKey, AlignedBox)>>,
    index_cache: RefCell<Option<(CacheKey, StaticAABB2DIndex<f64>)>>,
}

impl fmt::Debug for MultiShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiShape")
            .field("children", &self.children)
            .field("structure_generation", &self.structure_generation)
            .finish()
    }
}

impl Clone for MultiShape {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            structure_generation: self.structure_generation,
            bounds_cache: Cell::new(self.bounds_cache.get()),
            index_cache: RefCell::new(None),
        }
    }
}

impl PartialEq for MultiShape {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl Eq for MultiShape {}

#[cfg(feature = "serde")]
impl serde::Serialize for MultiShape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.children, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MultiShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<Shape> as serde::Deserialize>::deserialize(deserializer).map(MultiShape::from_shapes)
    }
}

impl FromIterator<Shape> for MultiShape {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        MultiShape::from_shapes(iter.into_iter().collect())
    }
}

impl MultiShape {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_shapes(children: Vec<Shape>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there is no child.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Generation bumped by every mutation of the list or of a child.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.structure_generation
    }

    #[inline]
    fn touch(&mut self) {
        self.structure_generation = self.structure_generation.wrapping_add(1);
    }

    fn cache_key(&self) -> CacheKey {
        let child_sum = self
            .children
            .iter()
            .fold(0u64, |acc, c| acc.wrapping_add(c.generation()));
        (self.structure_generation, child_sum)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.children.get(index)
    }

    /// Mutable access to a child. The caches are invalidated even if the child is left
    /// untouched.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.touch();
        self.children.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.children.iter()
    }

    /// Append a child. The same shape may be added several times.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.children.push(shape.into());
        self.touch();
    }

    /// Insert a child at `index`, an index past the end appends.
    pub fn insert(&mut self, index: usize, shape: impl Into<Shape>) {
        let index = index.min(self.children.len());
        self.children.insert(index, shape.into());
        self.touch();
    }

    /// Remove the first child equal to `shape`. Returns `true` if a child was removed.
    pub fn remove(&mut self, shape: &Shape) -> bool {
        match self.children.iter().position(|c| c == shape) {
            Some(index) => {
                self.children.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        if index >= self.children.len() {
            return None;
        }
        let removed = self.children.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.children.clear();
        self.touch();
    }

    /// Replace the children by `shapes`.
    pub fn set_from<I>(&mut self, shapes: I)
    where
        I: IntoIterator<Item = Shape>,
    {
        self.children.clear();
        self.children.extend(shapes);
        self.touch();
    }

    pub fn translate(&mut self, v: Vector3i) {
        for child in &mut self.children {
            child.translate(v);
        }
        self.touch();
    }

    /// Union of the bounding boxes of the children, the empty box if there is no child.
    pub fn bounding_box(&self) -> AlignedBox {
        let key = self.cache_key();
        if let Some((cached_key, bounds)) = self.bounds_cache.get() {
            if cached_key == key {
                return bounds;
            }
        }

        let mut iter = self.children.iter();
        let bounds = match iter.next() {
            Some(first) => iter.fold(first.bounding_box(), |mut acc, c| {
                acc.set_union(&c.bounding_box());
                acc
            }),
            None => AlignedBox::new(),
        };
        debug!(
            children = self.children.len(),
            structure_generation = key.0,
            "multi shape bounding box recomputed"
        );
        self.bounds_cache.set(Some((key, bounds)));
        bounds
    }

    fn build_index(&self) -> Option<StaticAABB2DIndex<f64>> {
        let mut builder = StaticAABB2DIndexBuilder::new(self.children.len());
        for child in &self.children {
            let b = child.bounding_box();
            let (min, max) = (b.min(), b.max());
            builder.add(
                f64::from(min.x),
                f64::from(min.y),
                f64::from(max.x),
                f64::from(max.y),
            );
        }
        match builder.build() {
            Ok(index) => {
                debug!(children = self.children.len(), "multi shape index rebuilt");
                Some(index)
            }
            Err(err) => {
                debug!(%err, "multi shape index build failed, falling back to a linear scan");
                None
            }
        }
    }

    /// Indices, in list order, of the children whose bounding box overlaps `area`.
    fn candidates(&self, area: &AlignedBox) -> Vec<usize> {
        let key = self.cache_key();
        let mut cache = self.index_cache.borrow_mut();
        if !matches!(cache.as_ref(), Some((cached_key, _)) if *cached_key == key) {
            *cache = self.build_index().map(|index| (key, index));
        }

        let (min, max) = (area.min(), area.max());
        match cache.as_ref() {
            Some((_, index)) => {
                let mut hits = index.query(
                    f64::from(min.x),
                    f64::from(min.y),
                    f64::from(max.x),
                    f64::from(max.y),
                );
                hits.sort_unstable();
                hits
            }
            None => (0..self.children.len()).collect(),
        }
    }

    /// Returns `true` if one of the children contains `p`.
    pub fn contains_point(&self, p: Point3i) -> bool {
        self.first_shape_containing(p).is_some()
    }

    /// Returns `true` if one of the children contains the whole box.
    pub fn contains_box(&self, b: &AlignedBox) -> bool {
        self.candidates(b)
            .into_iter()
            .filter_map(|i| self.children.get(i))
            .any(|c| c.as_shape_ref().contains_box(b))
    }

    /// First child, in list order, containing `p`.
    pub fn first_shape_containing(&self, p: Point3i) -> Option<&Shape> {
        self.candidates(&AlignedBox::from_points(p, p))
            .into_iter()
            .filter_map(|i| self.children.get(i))
            .find(|c| c.as_shape_ref().contains_point(p))
    }

    /// Every child containing `p`, in list order.
    pub fn shapes_containing(&self, p: Point3i) -> Vec<&Shape> {
        self.candidates(&AlignedBox::from_points(p, p))
            .into_iter()
            .filter_map(|i| self.children.get(i))
            .filter(|c| c.as_shape_ref().contains_point(p))
            .collect()
    }

    /// Visit the children intersecting `query` in list order, with their index.
    ///
    /// The visitor returns a [ControlFlow] value to continue or stop the traversal, the value
    /// that stopped it is returned.
    pub fn visit_shapes_intersecting<C, V>(&self, query: ShapeRef<'_>, visitor: &mut V) -> C
    where
        C: ControlFlow,
        V: FnMut(usize, &Shape) -> C,
    {
        for i in self.candidates(&query.bounding_box()) {
            let Some(child) = self.children.get(i) else {
                continue;
            };
            if child.as_shape_ref().intersects(query) {
                try_cf!(visitor(i, child));
            }
        }
        C::continuing()
    }

    /// First child, in list order, intersecting `query`.
    pub fn first_shape_intersecting(&self, query: ShapeRef<'_>) -> Option<&Shape> {
        let mut found = None;
        self.visit_shapes_intersecting(query, &mut |i, _| {
            found = Some(i);
            crate::core::Control::Break(())
        });
        found.and_then(|i| self.children.get(i))
    }

    /// Every child intersecting `query`, in list order.
    pub fn shapes_intersecting(&self, query: ShapeRef<'_>) -> Vec<&Shape> {
        let mut found = Vec::new();
        self.visit_shapes_intersecting(query, &mut |i, _| {
            found.push(i);
            crate::core::Control::<()>::Continue
        });
        found
            .into_iter()
            .filter_map(|i| self.children.get(i))
            .collect()
    }

    /// Closest point among the closest points of the children, the first child wins ties.
    /// An empty multi shape returns `p`.
    pub fn closest_point_to(&self, p: Point3i) -> Point3i {
        self.children
            .iter()
            .map(|c| c.as_shape_ref().closest_point_to(p))
            .min_by_key(|q| q.distance_squared(&p))
            .unwrap_or(p)
    }

    /// Farthest point among the farthest points of the children, the first child wins ties.
    /// An empty multi shape returns `p`.
    pub fn farthest_point_to(&self, p: Point3i) -> Point3i {
        self.children
            .iter()
            .map(|c| c.as_shape_ref().farthest_point_to(p))
            .reduce(|best, q| {
                if q.distance_squared(&p) > best.distance_squared(&p) {
                    q
                } else {
                    best
                }
            })
            .unwrap_or(p)
    }

    /// Elements of every child in list order.
    #[inline]
    pub fn path_iter(&self) -> MultiPathIter<'_> {
        MultiPathIter {
            shape: self,
            index: 0,
            current: None,
        }
    }

    /// Points of every child in list order.
    #[inline]
    pub fn point_iter(&self) -> MultiPointIter<'_> {
        MultiPointIter {
            shape: self,
            index: 0,
            current: None,
        }
    }
}

/// Path iterator concatenating the path iterators of the children of a [MultiShape].
#[derive(Debug, Clone)]
pub struct MultiPathIter<'a> {
    shape: &'a MultiShape,
    index: usize,
    current: Option<Box<ShapePathIter<'a>>>,
}

impl<'a> MultiPathIter<'a> {
    fn advance<T, F>(&mut self, mut next: F) -> Option<T>
    where
        F: FnMut(&mut ShapePathIter<'a>) -> Option<T>,
    {
        loop {
            if let Some(item) = self.current.as_deref_mut().and_then(&mut next) {
                return Some(item);
            }
            let child = self.shape.children.get(self.index)?;
            self.index += 1;
            self.current = Some(Box::new(ShapeRef::from(child).path_iter()));
        }
    }

    fn any_child<F>(&self, f: F) -> bool
    where
        F: Fn(ShapePathIter<'a>) -> bool,
    {
        self.shape
            .children
            .iter()
            .any(|c| f(ShapeRef::from(c).path_iter()))
    }
}

impl Iterator for MultiPathIter<'_> {
    type Item = PathElement;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance(|iter| iter.next())
    }
}

impl PathIterator for MultiPathIter<'_> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        false
    }

    fn is_curved(&self) -> bool {
        self.any_child(|iter| iter.is_curved())
    }

    fn is_multi_parts(&self) -> bool {
        self.shape.len() > 1 || self.any_child(|iter| iter.is_multi_parts())
    }

    fn is_polygon(&self) -> bool {
        self.shape.len() == 1 && self.any_child(|iter| iter.is_polygon())
    }

    #[inline]
    fn restart(&self) -> Self {
        self.shape.path_iter()
    }

    #[inline]
    fn next_precise(&mut self) -> Option<PathElement<Point3d>> {
        self.advance(|iter| iter.next_precise())
    }
}

/// Iterator chaining the point iterators of the children of a [MultiShape].
#[derive(Debug, Clone)]
pub struct MultiPointIter<'a> {
    shape: &'a MultiShape,
    index: usize,
    current: Option<Box<ShapePointIter<'a>>>,
}

impl Iterator for MultiPointIter<'_> {
    type Item = Point3i;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.current.as_deref_mut().and_then(Iterator::next) {
                return Some(p);
            }
            let child = self.shape.children.get(self.index)?;
            self.index += 1;
            self.current = Some(Box::new(ShapeRef::from(child).point_iter()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{pt3, vec3};
    use crate::shape::{Segment, Sphere};

    fn scenario() -> MultiShape {
        let mut multi = MultiShape::new();
        multi.add(AlignedBox::from_min_size(5, 8, 0, 2, 1, 0));
        multi.add(Sphere::new(-5, 18, 0, 2));
        multi
    }

    #[test]
    fn bounding_box_tracks_child_mutations() {
        let mut multi = scenario();
        let before = multi.bounding_box();
        assert_eq!((before.min().x, before.min().y), (-7, 8));
        assert_eq!((before.max().x, before.max().y), (7, 20));

        if let Some(child) = multi.get_mut(0) {
            child.translate(vec3(12, -7, 0));
        }
        let after = multi.bounding_box();
        assert_eq!((after.min().x, after.min().y), (-7, 1));
        assert_eq!((after.max().x, after.max().y), (19, 20));
    }

    #[test]
    fn duplicates_are_kept_and_removed_one_at_a_time() {
        let mut multi = MultiShape::new();
        let seg: Shape = Segment::new(0, 0, 0, 1, 1, 0).into();
        multi.add(seg.clone());
        multi.add(seg.clone());
        assert_eq!(multi.len(), 2);
        assert!(multi.remove(&seg));
        assert_eq!(multi.len(), 1);
        assert!(multi.remove(&seg));
        assert!(!multi.remove(&seg));
        assert!(multi.bounding_box().is_empty());
    }

    #[test]
    fn queries_follow_list_order() {
        let mut multi = MultiShape::new();
        multi.add(AlignedBox::from_min_size(0, 0, 0, 10, 10, 0));
        multi.add(Sphere::new(20, 20, 0, 2));
        multi.add(AlignedBox::from_min_size(2, 2, 0, 2, 2, 0));

        let hits = multi.shapes_containing(pt3(3, 3, 0));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], &multi.children[0]);
        assert_eq!(hits[1], &multi.children[2]);
        assert_eq!(multi.first_shape_containing(pt3(20, 21, 0)), multi.get(1));
        assert_eq!(multi.first_shape_containing(pt3(50, 50, 0)), None);

        let query = Segment::new(-5, 3, 0, 30, 3, 0);
        let hits = multi.shapes_intersecting(ShapeRef::from(&query));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1], &multi.children[2]);
    }

    #[test]
    fn index_follows_removals() {
        let mut multi = scenario();
        assert!(multi.contains_point(pt3(6, 8, 0)));
        multi.remove_at(0);
        assert!(!multi.contains_point(pt3(6, 8, 0)));
        assert!(multi.contains_point(pt3(-4, 19, 0)));
    }

    #[test]
    fn path_iterator_concatenates_children() {
        let multi = scenario();
        let kinds = multi.path_iter().count();
        assert_eq!(kinds, 5 + 6);
        let iter = multi.path_iter();
        assert!(iter.is_multi_parts());
        assert!(iter.is_curved());
        assert!(!iter.is_polygon());
    }

    #[test]
    fn empty_multi_shape() {
        let multi = MultiShape::new();
        assert_eq!(multi.closest_point_to(pt3(1, 2, 3)), pt3(1, 2, 3));
        assert_eq!(multi.point_iter().count(), 0);
        assert!(!multi.contains_point(pt3(0, 0, 0)));
    }
}
