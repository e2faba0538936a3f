/// Handedness of the coordinate system. Only operations whose sign depends on it
/// (turning a vector, signed angles) take this as a parameter, everything else is
/// handedness independent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// Counter clockwise rotations are positive.
    #[default]
    RightHanded,
    /// Clockwise rotations are positive.
    LeftHanded,
}

impl CoordinateSystem {
    #[inline]
    pub fn is_left_handed(&self) -> bool {
        matches!(self, CoordinateSystem::LeftHanded)
    }

    #[inline]
    pub fn is_right_handed(&self) -> bool {
        !self.is_left_handed()
    }
}
