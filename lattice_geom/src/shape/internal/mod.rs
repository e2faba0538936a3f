//! Algorithms behind the shape queries, made public for benchmarking and testing purposes.
pub mod circle_perimeter;
pub mod crossings;
pub mod flattening;
pub mod path_crossings;
pub mod path_distance;
pub mod path_shadow;
pub mod segment_intersect;
