use static_aabb2d_index as aabb_index;
/// Trait for control flow inside visiting methods.
///
/// Visitors return a value implementing this trait to either keep receiving results or stop
/// the traversal early.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::*;
/// # use lattice_geom::shape::*;
/// let mut multi = MultiShape::new();
/// multi.add(AlignedBox::from_min_size(0, 0, 0, 4, 4, 0));
/// multi.add(Sphere::new(20, 20, 0, 2));
/// multi.add(AlignedBox::from_min_size(2, 2, 0, 4, 4, 0));
///
/// let query = AlignedBox::from_min_size(1, 1, 0, 4, 4, 0);
/// let mut visited = 0;
/// multi.visit_shapes_intersecting(ShapeRef::from(&query), &mut |_index, _shape| {
///     visited += 1;
///     // Return Control::Break to stop at the first hit
///     Control::Break(())
/// });
///
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        C::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        self.should_break()
    }
}
