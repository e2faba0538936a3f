use super::{FuzzyEq, Scalar};

/// Trait representing a real number used by the float side of the tuple substrate
/// (transformed coordinates, curve subdivision, angles).
pub trait Real: num_traits::real::Real + Scalar + FuzzyEq {
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }
}
