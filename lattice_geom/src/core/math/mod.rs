//! Tuple substrate and math helpers: lattice points and vectors, rounding, Bresenham lines,
//! affine transforms and handedness.
mod base_math;
mod bresenham;
mod coordinate_system;
mod point3;
mod transform;

pub use base_math::*;
pub use bresenham::BresenhamLineIter;
pub use coordinate_system::CoordinateSystem;
pub use point3::{pt3, vec3, Point3, Point3d, Point3i, Vector3, Vector3d, Vector3i};
pub use transform::{AffineTransform3D, Transform3D};
