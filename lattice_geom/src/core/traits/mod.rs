//! Core/common traits for use in lattice_geom.
mod control_flow;
mod fuzzy_eq;
mod real;
mod scalar;

pub use control_flow::ControlFlow;
pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
pub use scalar::Scalar;
