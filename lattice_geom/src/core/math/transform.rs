use super::{Point3d, Vector3d};

/// Transform applied to coordinates emitted by transformed path iterators.
///
/// Shapes never store transformed coordinates, the transform is applied on the fly to float
/// copies and the result is rounded back to the lattice by the consumer.
pub trait Transform3D {
    /// Transform a point (linear part plus translation).
    fn apply_to_point(&self, point: Point3d) -> Point3d;
    /// Transform a vector (linear part only).
    fn apply_to_vector(&self, vector: Vector3d) -> Vector3d;
    /// Returns `true` if applying the transform leaves every coordinate unchanged.
    fn is_identity(&self) -> bool;
}

/// Affine transform made of a 3x3 linear part (row major) and a translation.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// let t = AffineTransform3D::scaling(2.0, 2.0, 1.0).then(&AffineTransform3D::translation(1.0, 0.0, 0.0));
/// let p = t.apply_to_point(pt3(3.0, 4.0, 5.0));
/// assert_eq!(p, pt3(7.0, 8.0, 5.0));
/// assert!(!t.is_identity());
/// assert!(AffineTransform3D::identity().is_identity());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform3D {
    pub linear: [[f64; 3]; 3],
    pub translation: Vector3d,
}

impl Default for AffineTransform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform3D {
    pub fn identity() -> Self {
        Self {
            linear: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: Vector3d::zero(),
        }
    }

    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            translation: Vector3d::new(dx, dy, dz),
            ..Self::identity()
        }
    }

    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            linear: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz]],
            translation: Vector3d::zero(),
        }
    }

    /// Rotation about the z axis by `angle` radians (counter clockwise for positive angles in
    /// a right handed system).
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            linear: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
            translation: Vector3d::zero(),
        }
    }

    /// Composition that applies `self` first and `next` second.
    pub fn then(&self, next: &AffineTransform3D) -> Self {
        let mut linear = [[0.0; 3]; 3];
        for (r, row) in linear.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| next.linear[r][k] * self.linear[k][c]).sum();
            }
        }
        Self {
            linear,
            translation: next.apply_to_vector(self.translation) + next.translation,
        }
    }
}

impl Transform3D for AffineTransform3D {
    fn apply_to_point(&self, point: Point3d) -> Point3d {
        let v = self.apply_to_vector(point.to_vector());
        Point3d::new(
            v.x + self.translation.x,
            v.y + self.translation.y,
            v.z + self.translation.z,
        )
    }

    fn apply_to_vector(&self, vector: Vector3d) -> Vector3d {
        let m = &self.linear;
        Vector3d::new(
            m[0][0] * vector.x + m[0][1] * vector.y + m[0][2] * vector.z,
            m[1][0] * vector.x + m[1][1] * vector.y + m[1][2] * vector.z,
            m[2][0] * vector.x + m[2][1] * vector.y + m[2][2] * vector.z,
        )
    }

    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::pt3;

    #[test]
    fn rotation_then_translation() {
        let t = AffineTransform3D::rotation_z(std::f64::consts::FRAC_PI_2)
            .then(&AffineTransform3D::translation(10.0, 0.0, 0.0));
        let p = t.apply_to_point(pt3(1.0, 0.0, 2.0));
        assert!(p.fuzzy_eq_eps(pt3(10.0, 1.0, 2.0), 1e-12));
        let v = t.apply_to_vector(Vector3d::new(1.0, 0.0, 0.0));
        assert!(v.x.abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
    }
}
