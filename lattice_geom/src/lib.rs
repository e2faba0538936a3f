extern crate static_aabb2d_index;

#[macro_use]
mod macros;
#[macro_use]
pub mod core;
pub mod shape;

pub use crate::core::errors::ShapeError;
pub use crate::core::math::{pt3, vec3, Point3d, Point3i, Vector3d, Vector3i};
pub use crate::shape::{
    AlignedBox, MultiShape, Path, PathElement, PathIterator, Segment, Shape, ShapeRef,
    ShapeSource, ShapeSourceMut, Sphere, UnmodifiableShape, WindingRule,
};
