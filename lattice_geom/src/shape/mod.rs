//! Lattice shapes and the queries they answer: containment, intersection, closest and farthest
//! points, path iteration and pixel enumeration.
pub mod internal;
mod aligned_box;
mod multi_shape;
mod path;
mod path_element;
mod path_iter;
mod segment;
mod shape_iter;
mod shape_ref;
mod shape_types;
mod sphere;
mod traits;
mod unmodifiable;

pub use aligned_box::*;
pub use internal::circle_perimeter::CirclePerimeterIter;
pub use multi_shape::*;
pub use path::*;
pub use path_element::*;
pub use path_iter::*;
pub use segment::*;
pub use shape_iter::*;
pub use shape_ref::*;
pub use shape_types::*;
pub use sphere::*;
pub use traits::*;
pub use unmodifiable::*;
