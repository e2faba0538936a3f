use std::fmt::Debug;

/// Numeric component type of the tuple substrate (`i32` for lattice tuples, `f64` for the
/// transformed and flattened coordinates).
pub trait Scalar:
    num_traits::Num + num_traits::Signed + Copy + PartialOrd + Default + Debug + 'static
{
}

impl<T> Scalar for T where
    T: num_traits::Num + num_traits::Signed + Copy + PartialOrd + Default + Debug + 'static
{
}
