use super::internal::path_crossings::{point_crossings_from_path, rect_crossings_from_path};
use super::internal::path_distance::{path_closest_point, path_farthest_point};
use super::{
    AlignedBox, CrossingComputationType, FlatteningOptions, FlatteningPathIter, PathElement,
    PathIterator, WindingRule, SHAPE_INTERSECTS,
};
use crate::core::errors::ShapeError;
use crate::core::math::{BresenhamLineIter, Point3i, Transform3D, Vector3i};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Command stored in the path buffer. The start point of each command is implied by the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "camelCase")
)]
enum PathCommand {
    MoveTo {
        to: Point3i,
    },
    LineTo {
        to: Point3i,
    },
    QuadTo {
        ctrl: Point3i,
        to: Point3i,
    },
    CurveTo {
        ctrl1: Point3i,
        ctrl2: Point3i,
        to: Point3i,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, `None` for a close (it lands on the move point).
    #[inline]
    fn end_point(&self) -> Option<Point3i> {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::CurveTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }

    /// Every stored point, control points included.
    fn points(&self) -> impl Iterator<Item = Point3i> {
        let pts: [Option<Point3i>; 3] = match *self {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => [Some(to), None, None],
            PathCommand::QuadTo { ctrl, to } => [Some(ctrl), Some(to), None],
            PathCommand::CurveTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
            PathCommand::Close => [None, None, None],
        };
        pts.into_iter().flatten()
    }

    fn map_points<F>(&mut self, mut f: F)
    where
        F: FnMut(Point3i) -> Point3i,
    {
        match self {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => *to = f(*to),
            PathCommand::QuadTo { ctrl, to } => {
                *ctrl = f(*ctrl);
                *to = f(*to);
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                *ctrl1 = f(*ctrl1);
                *ctrl2 = f(*ctrl2);
                *to = f(*to);
            }
            PathCommand::Close => {}
        }
    }

    fn set_end_point(&mut self, p: Point3i) {
        match self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::CurveTo { to, .. } => *to = p,
            PathCommand::Close => {}
        }
    }

    #[inline]
    fn is_move(&self) -> bool {
        matches!(self, PathCommand::MoveTo { .. })
    }
}

/// Path made of moves, lines, quadratic and cubic curves and closes on the integer lattice.
///
/// The first command of a non empty path is always a move. Drawing commands issued before any
/// move fail with [ShapeError::MissingMoveTo] and leave the path unchanged.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// # use lattice_geom::shape::*;
/// let mut path = Path::new();
/// path.move_to(0, 0, 0);
/// path.line_to(2, 2, 0)?;
/// path.quad_to(3, 0, 0, 4, 3, 0)?;
/// path.curve_to(5, -1, 0, 6, 5, 0, 7, -5, 0)?;
/// path.close_path()?;
///
/// assert!(path.contains_point(pt3(4, 3, 0)));
/// assert!(!path.contains_point(pt3(-1, -1, 0)));
/// assert!(path.is_polygon());
/// assert!(path.is_curved());
/// # Ok::<(), lattice_geom::core::errors::ShapeError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Path {
    commands: Vec<PathCommand>,
    winding_rule: WindingRule,
    #[cfg_attr(feature = "serde", serde(skip))]
    generation: u64,
    /// Drawable bounding box, tagged with the generation it was computed for.
    #[cfg_attr(feature = "serde", serde(skip))]
    bounds_cache: Cell<Option<(u64, Option<AlignedBox>)>>,
}

impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.winding_rule == other.winding_rule && self.commands == other.commands
    }
}

impl Eq for Path {}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_winding_rule(winding_rule: WindingRule) -> Self {
        Self {
            winding_rule,
            ..Default::default()
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        if self.winding_rule != winding_rule {
            self.winding_rule = winding_rule;
            self.touch();
        }
    }

    /// Number of stored commands, moves and closes included.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.commands.len()
    }

    /// Point the next drawing command would start from.
    pub fn current_point(&self) -> Option<Point3i> {
        match self.commands.last()? {
            PathCommand::Close => self.last_move_point(),
            cmd => cmd.end_point(),
        }
    }

    fn last_move_point(&self) -> Option<Point3i> {
        self.commands.iter().rev().find_map(|cmd| match *cmd {
            PathCommand::MoveTo { to } => Some(to),
            _ => None,
        })
    }

    /// Start a new part at `(x, y, z)`. Consecutive moves collapse into the last one.
    pub fn move_to(&mut self, x: i32, y: i32, z: i32) {
        let to = Point3i::new(x, y, z);
        match self.commands.last_mut() {
            Some(PathCommand::MoveTo { to: last }) => *last = to,
            _ => self.commands.push(PathCommand::MoveTo { to }),
        }
        self.touch();
    }

    #[inline]
    fn ensure_started(&self, operation: &'static str) -> Result<(), ShapeError> {
        if self.commands.is_empty() {
            return Err(ShapeError::MissingMoveTo { operation });
        }
        Ok(())
    }

    pub fn line_to(&mut self, x: i32, y: i32, z: i32) -> Result<(), ShapeError> {
        self.ensure_started("line_to")?;
        self.commands.push(PathCommand::LineTo {
            to: Point3i::new(x, y, z),
        });
        self.touch();
        Ok(())
    }

    pub fn quad_to(
        &mut self,
        ctrl_x: i32,
        ctrl_y: i32,
        ctrl_z: i32,
        x: i32,
        y: i32,
        z: i32,
    ) -> Result<(), ShapeError> {
        self.ensure_started("quad_to")?;
        self.commands.push(PathCommand::QuadTo {
            ctrl: Point3i::new(ctrl_x, ctrl_y, ctrl_z),
            to: Point3i::new(x, y, z),
        });
        self.touch();
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn curve_to(
        &mut self,
        ctrl1_x: i32,
        ctrl1_y: i32,
        ctrl1_z: i32,
        ctrl2_x: i32,
        ctrl2_y: i32,
        ctrl2_z: i32,
        x: i32,
        y: i32,
        z: i32,
    ) -> Result<(), ShapeError> {
        self.ensure_started("curve_to")?;
        self.commands.push(PathCommand::CurveTo {
            ctrl1: Point3i::new(ctrl1_x, ctrl1_y, ctrl1_z),
            ctrl2: Point3i::new(ctrl2_x, ctrl2_y, ctrl2_z),
            to: Point3i::new(x, y, z),
        });
        self.touch();
        Ok(())
    }

    /// Close the current part. Closing right after a move or another close does nothing.
    pub fn close_path(&mut self) -> Result<(), ShapeError> {
        self.ensure_started("close_path")?;
        self.close_commands();
        Ok(())
    }

    fn close_commands(&mut self) {
        if matches!(
            self.commands.last(),
            None | Some(PathCommand::MoveTo { .. } | PathCommand::Close)
        ) {
            return;
        }
        self.commands.push(PathCommand::Close);
        self.touch();
    }

    /// Move to the point when the path is empty, add a line to it otherwise.
    #[doc(hidden)]
    pub fn push_point(&mut self, x: i32, y: i32, z: i32) {
        let to = Point3i::new(x, y, z);
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo { to });
        } else {
            self.commands.push(PathCommand::LineTo { to });
        }
        self.touch();
    }

    #[doc(hidden)]
    pub fn close_if_started(&mut self) {
        if !self.commands.is_empty() {
            self.close_commands();
        }
    }

    /// Remove the last command.
    pub fn remove_last(&mut self) -> Result<(), ShapeError> {
        if self.commands.pop().is_none() {
            return Err(ShapeError::EmptyPath {
                operation: "remove_last",
            });
        }
        self.touch();
        Ok(())
    }

    /// Replace the end point of the last command that has one.
    pub fn set_last_point(&mut self, x: i32, y: i32, z: i32) -> Result<(), ShapeError> {
        let last = self
            .commands
            .iter_mut()
            .rev()
            .find(|cmd| !matches!(cmd, PathCommand::Close))
            .ok_or(ShapeError::EmptyPath {
                operation: "set_last_point",
            })?;
        last.set_end_point(Point3i::new(x, y, z));
        self.touch();
        Ok(())
    }

    /// Remove the first command ending on `(x, y, z)`.
    ///
    /// A move followed by a drawing command is kept so the part it starts stays valid, closes
    /// are never removed. Returns `true` if a command was removed.
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> bool {
        let target = Point3i::new(x, y, z);
        let found = self.commands.iter().enumerate().position(|(i, cmd)| {
            if cmd.end_point() != Some(target) {
                return false;
            }
            if cmd.is_move() {
                let next = self.commands.get(i + 1);
                return !matches!(
                    next,
                    Some(
                        PathCommand::LineTo { .. }
                            | PathCommand::QuadTo { .. }
                            | PathCommand::CurveTo { .. }
                    )
                );
            }
            true
        });

        match found {
            Some(index) => {
                self.commands.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove every command and reset the winding rule to non zero.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.winding_rule = WindingRule::NonZero;
        self.touch();
    }

    pub fn translate(&mut self, v: Vector3i) {
        for cmd in &mut self.commands {
            cmd.map_points(|p| p.saturating_add(v));
        }
        self.touch();
    }

    /// Transform every stored point in place, results are rounded to the lattice.
    pub fn transform<T>(&mut self, transform: &T)
    where
        T: Transform3D,
    {
        if transform.is_identity() {
            return;
        }
        for cmd in &mut self.commands {
            cmd.map_points(|p| transform.apply_to_point(p.to_f64()).round_to_lattice());
        }
        self.touch();
    }

    /// Append the elements of `elements`.
    ///
    /// Either every element is appended or, on error, the path is left unchanged.
    pub fn add_iter<I>(&mut self, elements: I) -> Result<(), ShapeError>
    where
        I: IntoIterator<Item = PathElement>,
    {
        let mut staged = self.clone();
        for element in elements {
            match element {
                PathElement::MoveTo { to } => staged.move_to(to.x, to.y, to.z),
                PathElement::LineTo { to, .. } => staged.line_to(to.x, to.y, to.z)?,
                PathElement::QuadTo { ctrl, to, .. } => {
                    staged.quad_to(ctrl.x, ctrl.y, ctrl.z, to.x, to.y, to.z)?
                }
                PathElement::CurveTo {
                    ctrl1, ctrl2, to, ..
                } => staged.curve_to(
                    ctrl1.x, ctrl1.y, ctrl1.z, ctrl2.x, ctrl2.y, ctrl2.z, to.x, to.y, to.z,
                )?,
                PathElement::Close { .. } => staged.close_path()?,
            }
        }
        self.commands = staged.commands;
        self.touch();
        Ok(())
    }

    /// Replace the content of the path by the elements of `iter`, adopting its winding rule.
    pub fn set_from<I>(&mut self, iter: I) -> Result<(), ShapeError>
    where
        I: PathIterator,
    {
        let mut staged = Path::with_winding_rule(iter.winding_rule());
        staged.add_iter(iter)?;
        self.commands = staged.commands;
        self.winding_rule = staged.winding_rule;
        self.touch();
        Ok(())
    }

    /// Returns `true` if no command moves the current point away from the last move.
    pub fn is_empty(&self) -> bool {
        !self.path_iter().any(|e| e.is_drawable())
    }

    /// Returns `true` if the path is a single move followed by lines only.
    pub fn is_polyline(&self) -> bool {
        match self.commands.split_first() {
            Some((PathCommand::MoveTo { .. }, rest)) => {
                !rest.is_empty()
                    && rest
                        .iter()
                        .all(|cmd| matches!(cmd, PathCommand::LineTo { .. }))
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_curved(&self) -> bool {
        self.commands.iter().any(|cmd| {
            matches!(
                cmd,
                PathCommand::QuadTo { .. } | PathCommand::CurveTo { .. }
            )
        })
    }

    #[inline]
    pub fn is_multi_parts(&self) -> bool {
        self.commands.iter().filter(|cmd| cmd.is_move()).count() > 1
    }

    /// Returns `true` if the path is a single part ending with a close.
    pub fn is_polygon(&self) -> bool {
        match self.commands.split_first() {
            Some((PathCommand::MoveTo { .. }, rest)) => {
                matches!(rest.last(), Some(PathCommand::Close))
                    && !rest.iter().any(|cmd| cmd.is_move())
            }
            _ => false,
        }
    }

    /// Returns `true` if `p` is one of the stored points (end points or control points).
    pub fn contains_control_point(&self, p: Point3i) -> bool {
        self.commands.iter().any(|cmd| cmd.points().any(|q| q == p))
    }

    /// Box enclosing every stored point, control points included.
    pub fn bounding_box_with_ctrl_points(&self) -> Option<AlignedBox> {
        bounds_of(self.commands.iter().flat_map(|cmd| cmd.points()))
    }

    /// Box enclosing the drawn outline, curves flattened. `None` if nothing is drawn.
    pub fn drawable_bounding_box(&self) -> Option<AlignedBox> {
        if let Some((generation, bounds)) = self.bounds_cache.get() {
            if generation == self.generation {
                return bounds;
            }
        }

        let bounds = bounds_of(
            FlatteningPathIter::new(self.path_iter(), FlatteningOptions::new())
                .filter(|e| e.is_drawable())
                .flat_map(|e| [e.from(), e.to()]),
        );
        self.bounds_cache.set(Some((self.generation, bounds)));
        bounds
    }

    /// Drawable bounding box, or the empty box when nothing is drawn.
    #[inline]
    pub fn bounding_box(&self) -> AlignedBox {
        self.drawable_bounding_box().unwrap_or_default()
    }

    /// Returns `true` if `p` is inside the area of the path or on its outline.
    ///
    /// A path that is not closed has no area.
    pub fn contains_point(&self, p: Point3i) -> bool {
        let crossings = point_crossings_from_path(
            self.path_iter(),
            p.x,
            p.y,
            CrossingComputationType::SimpleIntersectionWhenNotPolygon,
        );
        (crossings & self.winding_rule.point_mask()) != 0
    }

    /// Returns `true` if the box is inside the area of the path, the last part being
    /// implicitly closed. A box touching the outline is not contained.
    pub fn contains_box(&self, b: &AlignedBox) -> bool {
        let (min, max) = (b.min(), b.max());
        let crossings = rect_crossings_from_path(
            self.path_iter(),
            min.x,
            min.y,
            max.x,
            max.y,
            CrossingComputationType::AutoClose,
        );
        crossings != SHAPE_INTERSECTS && (crossings & self.winding_rule.area_mask()) != 0
    }

    /// Point of the flattened outline closest to `p`, or `p` itself when it is inside.
    pub fn closest_point_to(&self, p: Point3i) -> Point3i {
        path_closest_point(
            FlatteningPathIter::new(self.path_iter(), FlatteningOptions::new()),
            self.winding_rule,
            p,
        )
    }

    pub fn farthest_point_to(&self, p: Point3i) -> Point3i {
        path_farthest_point(
            FlatteningPathIter::new(self.path_iter(), FlatteningOptions::new()),
            p,
        )
    }

    #[inline]
    pub fn path_iter(&self) -> PathIter<'_> {
        PathIter {
            path: self,
            index: 0,
            current: Point3i::zero(),
            move_point: Point3i::zero(),
        }
    }

    /// Pixels of the flattened outline, each shared vertex reported once.
    #[inline]
    pub fn point_iter(&self) -> PathPointIter<'_> {
        PathPointIter {
            elements: FlatteningPathIter::new(self.path_iter(), FlatteningOptions::new()),
            pixels: None,
            z: 0,
            last: None,
            part_start: None,
            skip_part_start: false,
        }
    }
}

fn bounds_of<I>(points: I) -> Option<AlignedBox>
where
    I: IntoIterator<Item = Point3i>,
{
    let mut points = points.into_iter();
    let first = points.next()?;
    let (min, max) = points.fold((first, first), |(min, max), p| {
        (
            Point3i::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
            Point3i::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
        )
    });
    Some(AlignedBox::from_points(min, max))
}

/// Path iterator over the commands of a [Path].
#[derive(Debug, Clone)]
pub struct PathIter<'a> {
    path: &'a Path,
    index: usize,
    current: Point3i,
    move_point: Point3i,
}

impl Iterator for PathIter<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<Self::Item> {
        let cmd = *self.path.commands.get(self.index)?;
        self.index += 1;
        let from = self.current;
        let element = match cmd {
            PathCommand::MoveTo { to } => {
                self.move_point = to;
                PathElement::MoveTo { to }
            }
            PathCommand::LineTo { to } => PathElement::LineTo { from, to },
            PathCommand::QuadTo { ctrl, to } => PathElement::QuadTo { from, ctrl, to },
            PathCommand::CurveTo { ctrl1, ctrl2, to } => PathElement::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            },
            PathCommand::Close => PathElement::Close {
                from,
                to: self.move_point,
            },
        };
        self.current = element.to();
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.commands.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathIter<'_> {}

impl PathIterator for PathIter<'_> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.path.winding_rule
    }

    #[inline]
    fn is_polyline(&self) -> bool {
        self.path.is_polyline()
    }

    #[inline]
    fn is_curved(&self) -> bool {
        self.path.is_curved()
    }

    #[inline]
    fn is_multi_parts(&self) -> bool {
        self.path.is_multi_parts()
    }

    #[inline]
    fn is_polygon(&self) -> bool {
        self.path.is_polygon()
    }

    #[inline]
    fn restart(&self) -> Self {
        self.path.path_iter()
    }
}

/// Iterator over the pixels of the flattened outline of a [Path].
#[derive(Debug, Clone)]
pub struct PathPointIter<'a> {
    elements: FlatteningPathIter<PathIter<'a>>,
    pixels: Option<BresenhamLineIter>,
    z: i32,
    last: Option<(i32, i32)>,
    part_start: Option<(i32, i32)>,
    /// Set while walking an edge that ends on the first pixel of its part.
    skip_part_start: bool,
}

impl Iterator for PathPointIter<'_> {
    type Item = Point3i;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(px) = self.pixels.as_mut().and_then(Iterator::next) {
                if Some(px) == self.last || (self.skip_part_start && Some(px) == self.part_start)
                {
                    continue;
                }
                if self.part_start.is_none() {
                    self.part_start = Some(px);
                }
                self.last = Some(px);
                return Some(Point3i::new(px.0, px.1, self.z));
            }

            match self.elements.next()? {
                PathElement::MoveTo { .. } => {
                    self.pixels = None;
                    self.last = None;
                    self.part_start = None;
                }
                e => {
                    let (from, to) = (e.from(), e.to());
                    self.skip_part_start = self.part_start == Some((to.x, to.y));
                    self.pixels = Some(BresenhamLineIter::new(from.x, from.y, to.x, to.y));
                    self.z = from.z;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{pt3, vec3, AffineTransform3D};
    use crate::shape::PathElementType;

    fn scenario_path() -> Path {
        let mut path = Path::new();
        path.move_to(0, 0, 0);
        path.line_to(2, 2, 0).unwrap();
        path.quad_to(3, 0, 0, 4, 3, 0).unwrap();
        path.curve_to(5, -1, 0, 6, 5, 0, 7, -5, 0).unwrap();
        path.close_path().unwrap();
        path
    }

    #[test]
    fn drawing_before_move_fails() {
        let mut path = Path::new();
        let err = path.line_to(1, 1, 0).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingMoveTo {
                operation: "line_to"
            }
        );
        assert!(path.quad_to(1, 1, 0, 2, 2, 0).is_err());
        assert!(path.curve_to(1, 1, 0, 2, 2, 0, 3, 3, 0).is_err());
        assert!(path.close_path().is_err());
        assert_eq!(path.element_count(), 0);
        assert_eq!(path.generation(), 0);
    }

    #[test]
    fn closing_macro_skips_empty_paths() {
        let mut empty = Path::new();
        empty.close_if_started();
        assert_eq!(empty.element_count(), 0);
        assert_eq!(empty.generation(), 0);

        let single = crate::path_closed![(1, 2, 0)];
        assert_eq!(single.element_count(), 1);

        let triangle = crate::path_closed![(0, 0, 0), (4, 0, 0), (4, 4, 0)];
        assert_eq!(triangle.element_count(), 4);
        assert!(triangle.is_polygon());
    }

    #[test]
    fn moves_collapse_and_closes_are_idempotent() {
        let mut path = Path::new();
        path.move_to(0, 0, 0);
        path.move_to(1, 1, 0);
        assert_eq!(path.element_count(), 1);
        path.close_path().unwrap();
        assert_eq!(path.element_count(), 1);
        path.line_to(3, 1, 0).unwrap();
        path.close_path().unwrap();
        path.close_path().unwrap();
        assert_eq!(path.element_count(), 3);
        assert_eq!(path.current_point(), Some(pt3(1, 1, 0)));
    }

    #[test]
    fn iteration_carries_start_points() {
        let path = scenario_path();
        let elements: Vec<_> = path.path_iter().collect();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0], PathElement::MoveTo { to: pt3(0, 0, 0) });
        assert_eq!(
            elements[2],
            PathElement::QuadTo {
                from: pt3(2, 2, 0),
                ctrl: pt3(3, 0, 0),
                to: pt3(4, 3, 0)
            }
        );
        assert_eq!(
            elements[4],
            PathElement::Close {
                from: pt3(7, -5, 0),
                to: pt3(0, 0, 0)
            }
        );
        // iteration never consumes the path
        assert_eq!(path.path_iter().collect::<Vec<_>>(), elements);
    }

    #[test]
    fn flags() {
        let path = scenario_path();
        assert!(path.is_polygon());
        assert!(path.is_curved());
        assert!(!path.is_polyline());
        assert!(!path.is_multi_parts());

        let mut poly = Path::new();
        poly.move_to(0, 0, 0);
        assert!(!poly.is_polyline());
        poly.line_to(1, 0, 0).unwrap();
        assert!(poly.is_polyline());
        poly.move_to(5, 5, 0);
        poly.line_to(6, 5, 0).unwrap();
        assert!(poly.is_multi_parts());
        assert!(!poly.is_polyline());
    }

    #[test]
    fn containment() {
        let path = scenario_path();
        assert!(path.contains_point(pt3(4, 3, 0)));
        assert!(!path.contains_point(pt3(-1, -1, 0)));
        assert!(!path.contains_point(pt3(3, 2, 0)));
        assert!(path.contains_point(pt3(5, 0, 0)));
        assert!(path.contains_point(pt3(6, -2, 0)));

        assert!(!path.contains_box(&AlignedBox::from_min_size(3, 0, 0, 1, 1, 0)));
        assert!(path.contains_box(&AlignedBox::from_min_size(4, -1, 0, 1, 1, 0)));
        assert!(!path.contains_box(&AlignedBox::from_min_size(-5, -5, 0, 1, 1, 0)));
    }

    #[test]
    fn open_path_has_no_area() {
        let path = crate::path_open![(0, 0, 0), (4, 0, 0), (4, 4, 0), (0, 4, 0)];
        assert!(!path.contains_point(pt3(2, 2, 0)));
        let closed = crate::path_closed![(0, 0, 0), (4, 0, 0), (4, 4, 0), (0, 4, 0)];
        assert!(closed.contains_point(pt3(2, 2, 0)));
    }

    #[test]
    fn closest_and_farthest() {
        let path = scenario_path();
        assert_eq!(path.closest_point_to(pt3(-5, 1, 0)), pt3(0, 0, 0));
        assert_eq!(path.closest_point_to(pt3(3, 5, 0)), pt3(4, 3, 0));
        assert_eq!(path.closest_point_to(pt3(10, 0, 0)), pt3(6, 0, 0));
        assert_eq!(path.closest_point_to(pt3(4, 0, 0)), pt3(4, 0, 0));
        assert_eq!(path.farthest_point_to(pt3(-5, 1, 0)), pt3(7, -5, 0));
        assert_eq!(path.farthest_point_to(pt3(10, 0, 0)), pt3(0, 0, 0));
    }

    #[test]
    fn bounding_boxes() {
        let path = scenario_path();
        assert_eq!(
            path.drawable_bounding_box(),
            Some(AlignedBox::from_corners(0, -5, 0, 7, 3, 0))
        );
        assert_eq!(
            path.bounding_box_with_ctrl_points(),
            Some(AlignedBox::from_corners(0, -5, 0, 7, 5, 0))
        );

        let mut single = Path::new();
        single.move_to(3, 3, 0);
        assert!(single.is_empty());
        assert_eq!(single.drawable_bounding_box(), None);
        assert!(single.bounding_box().is_empty());
    }

    #[test]
    fn bounds_cache_follows_mutations() {
        let mut path = scenario_path();
        let before = path.bounding_box();
        path.translate(vec3(10, 0, 0));
        let mut expected = before;
        expected.translate(vec3(10, 0, 0));
        assert_eq!(path.bounding_box(), expected);
    }

    #[test]
    fn remove_skips_leading_moves() {
        let mut path = crate::path_open![(0, 0, 0), (2, 0, 0), (0, 0, 0)];
        assert!(path.remove(0, 0, 0));
        assert_eq!(path.element_count(), 2);
        assert_eq!(path.current_point(), Some(pt3(2, 0, 0)));
        assert!(!path.remove(9, 9, 9));
    }

    #[test]
    fn last_element_edition() {
        let mut path = crate::path_closed![(0, 0, 0), (2, 0, 0), (2, 2, 0)];
        path.set_last_point(3, 3, 0).unwrap();
        assert!(path.contains_control_point(pt3(3, 3, 0)));
        path.remove_last().unwrap();
        assert!(!path.is_polygon());

        let mut empty = Path::new();
        assert!(empty.remove_last().unwrap_err().is_illegal_state());
        assert!(empty.set_last_point(1, 1, 1).is_err());
    }

    #[test]
    fn add_iter_is_all_or_nothing() {
        let source = scenario_path();
        let mut target = Path::new();
        target.add_iter(source.path_iter()).unwrap();
        assert_eq!(target, source);

        let mut empty = Path::new();
        let bad = [
            PathElement::LineTo {
                from: pt3(0, 0, 0),
                to: pt3(1, 1, 0),
            },
            PathElement::MoveTo { to: pt3(0, 0, 0) },
        ];
        assert!(empty.add_iter(bad).is_err());
        assert_eq!(empty.element_count(), 0);
    }

    #[test]
    fn set_from_adopts_winding_rule() {
        let mut source = scenario_path();
        source.set_winding_rule(WindingRule::EvenOdd);
        let mut target = crate::path_open![(9, 9, 9), (10, 10, 10)];
        target.set_from(source.path_iter()).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn transform_in_place() {
        let mut path = crate::path_open![(0, 0, 0), (2, 1, 0)];
        path.transform(&AffineTransform3D::scaling(1.5, 1.5, 1.0));
        let elements: Vec<_> = path.path_iter().collect();
        assert_eq!(elements[1].to(), pt3(3, 2, 0));
    }

    #[test]
    fn pixels_report_shared_vertices_once() {
        let square = crate::path_closed![(0, 0, 0), (2, 0, 0), (2, 2, 0), (0, 2, 0)];
        let pixels: Vec<_> = square.point_iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            pixels,
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
        );
        assert!(square
            .path_iter()
            .all(|e| e.kind() != PathElementType::QuadTo));
    }
}
