use super::{round_half_up, CoordinateSystem};
use crate::core::traits::{Real, Scalar};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

/// Point in 3D lattice (or float) space. Shapes copy points in and out by value, they never
/// hold on to a caller's point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3<T = i32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Displacement in 3D lattice (or float) space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3<T = i32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Integer lattice point.
pub type Point3i = Point3<i32>;
/// Integer lattice vector.
pub type Vector3i = Vector3<i32>;
/// Float point, used for transformed coordinates and curve subdivision.
pub type Point3d = Point3<f64>;
/// Float vector.
pub type Vector3d = Vector3<f64>;

impl<T> Point3<T>
where
    T: Scalar,
{
    /// Create a new point from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }

    /// Origin point.
    #[inline]
    pub fn zero() -> Self {
        Point3::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector from the origin to this point.
    #[inline]
    pub fn to_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns `true` if both points share the same x and y (z is ignored).
    #[inline]
    pub fn same_xy(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Copy of this point with `z` replaced.
    #[inline]
    pub fn with_z(&self, z: T) -> Self {
        Point3::new(self.x, self.y, z)
    }
}

impl Point3<i32> {
    /// Squared euclidean distance in the xy plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lattice_geom::core::math::*;
    /// let p = pt3(1, 2, 0);
    /// assert_eq!(p.distance_squared(&pt3(4, 6, 9)), 25);
    /// assert_eq!(p.distance_l1(&pt3(4, 6, 9)), 7);
    /// assert_eq!(p.distance_linf(&pt3(4, 6, 9)), 4);
    /// ```
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance in the xy plane.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Manhattan distance in the xy plane.
    #[inline]
    pub fn distance_l1(&self, other: &Self) -> i64 {
        (i64::from(other.x) - i64::from(self.x)).abs()
            + (i64::from(other.y) - i64::from(self.y)).abs()
    }

    /// Chebyshev distance in the xy plane.
    #[inline]
    pub fn distance_linf(&self, other: &Self) -> i64 {
        (i64::from(other.x) - i64::from(self.x))
            .abs()
            .max((i64::from(other.y) - i64::from(self.y)).abs())
    }

    /// Convert to float coordinates.
    #[inline]
    pub fn to_f64(&self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// `self + v` clamped to the `i32` range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lattice_geom::core::math::*;
    /// let p = pt3(i32::MAX - 1, 0, i32::MIN);
    /// assert_eq!(p.saturating_add(vec3(5, 5, -5)), pt3(i32::MAX, 5, i32::MIN));
    /// ```
    #[inline]
    pub fn saturating_add(&self, v: Vector3<i32>) -> Self {
        Point3::new(
            self.x.saturating_add(v.x),
            self.y.saturating_add(v.y),
            self.z.saturating_add(v.z),
        )
    }

    /// `self - v` clamped to the `i32` range.
    #[inline]
    pub fn saturating_sub(&self, v: Vector3<i32>) -> Self {
        Point3::new(
            self.x.saturating_sub(v.x),
            self.y.saturating_sub(v.y),
            self.z.saturating_sub(v.z),
        )
    }
}

impl Point3<f64> {
    /// Snap to the lattice using round half up on every component.
    #[inline]
    pub fn round_to_lattice(&self) -> Point3<i32> {
        Point3::new(
            round_half_up(self.x),
            round_half_up(self.y),
            round_half_up(self.z),
        )
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: f64) -> bool {
        use crate::core::traits::FuzzyEq;
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
    }
}

impl<T> Vector3<T>
where
    T: Scalar,
{
    /// Create a new vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    /// Zero vector.
    #[inline]
    pub fn zero() -> Self {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector3::new(
            scale_factor * self.x,
            scale_factor * self.y,
            scale_factor * self.z,
        )
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Perpendicular dot product in the xy plane (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Quarter turn to the left in the xy plane. The direction of "left" depends on the
    /// handedness of `cs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lattice_geom::core::math::*;
    /// let v = Vector3i::new(1, 0, 0);
    /// assert_eq!(v.turn_left(CoordinateSystem::RightHanded), Vector3i::new(0, 1, 0));
    /// assert_eq!(v.turn_left(CoordinateSystem::LeftHanded), Vector3i::new(0, -1, 0));
    /// ```
    pub fn turn_left(&self, cs: CoordinateSystem) -> Self {
        if cs.is_left_handed() {
            Vector3::new(self.y, -self.x, self.z)
        } else {
            Vector3::new(-self.y, self.x, self.z)
        }
    }

    /// Quarter turn to the right in the xy plane.
    pub fn turn_right(&self, cs: CoordinateSystem) -> Self {
        if cs.is_left_handed() {
            Vector3::new(-self.y, self.x, self.z)
        } else {
            Vector3::new(self.y, -self.x, self.z)
        }
    }
}

impl<T> Vector3<T>
where
    T: Real,
{
    /// Length of the vector.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize the vector (length = 1).
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Signed angle in radians from `self` to `other` in the xy plane. Positive is counter
    /// clockwise in a right handed system and clockwise in a left handed one.
    pub fn signed_angle(&self, other: Self, cs: CoordinateSystem) -> T {
        let angle = self.perp_dot(other).atan2(self.x * other.x + self.y * other.y);
        if cs.is_left_handed() {
            -angle
        } else {
            angle
        }
    }
}

impl Vector3<i32> {
    /// Convert to float components.
    #[inline]
    pub fn to_f64(&self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl Vector3<f64> {
    /// Snap to the lattice using round half up on every component.
    #[inline]
    pub fn round_to_lattice(&self) -> Vector3<i32> {
        Vector3::new(
            round_half_up(self.x),
            round_half_up(self.y),
            round_half_up(self.z),
        )
    }
}

/// Shorthand for [Point3::new].
#[inline(always)]
pub fn pt3<T>(x: T, y: T, z: T) -> Point3<T>
where
    T: Scalar,
{
    Point3::new(x, y, z)
}

/// Shorthand for [Vector3::new].
#[inline(always)]
pub fn vec3<T>(x: T, y: T, z: T) -> Vector3<T>
where
    T: Scalar,
{
    Vector3::new(x, y, z)
}

macro_rules! ImplBinaryOp {
    ($lhs:ident, $rhs:ident, $out:ident, $op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Scalar> ops::$op_trait<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;
            fn $op_func(self, rhs: $rhs<T>) -> Self::Output {
                $out::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Scalar> ops::$op_trait<&$rhs<T>> for $lhs<T> {
            type Output = $out<T>;
            fn $op_func(self, rhs: &$rhs<T>) -> Self::Output {
                $out::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<'a, 'b, T: Scalar> ops::$op_trait<&'b $rhs<T>> for &'a $lhs<T> {
            type Output = $out<T>;
            fn $op_func(self, _rhs: &'b $rhs<T>) -> Self::Output {
                $out::new(self.x $op _rhs.x, self.y $op _rhs.y, self.z $op _rhs.z)
            }
        }

        impl<T: Scalar> ops::$op_trait<$rhs<T>> for &$lhs<T> {
            type Output = $out<T>;
            fn $op_func(self, rhs: $rhs<T>) -> Self::Output {
                $out::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

ImplBinaryOp!(Vector3, Vector3, Vector3, Add, add, +);
ImplBinaryOp!(Vector3, Vector3, Vector3, Sub, sub, -);
ImplBinaryOp!(Point3, Vector3, Point3, Add, add, +);
ImplBinaryOp!(Point3, Vector3, Point3, Sub, sub, -);
ImplBinaryOp!(Point3, Point3, Vector3, Sub, sub, -);

macro_rules! ImplUnaryOp {
    ($ty:ident, $op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Scalar> ops::$op_trait for $ty<T> {
            type Output = $ty<T>;
            fn $op_func(self) -> Self::Output {
                $ty::new($op self.x, $op self.y, $op self.z)
            }
        }

        impl<T: Scalar> ops::$op_trait for &$ty<T> {
            type Output = $ty<T>;
            fn $op_func(self) -> Self::Output {
                $ty::new($op self.x, $op self.y, $op self.z)
            }
        }
    };
}

ImplUnaryOp!(Vector3, Neg, neg, -);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert_eq!(($v1 $op $v2), $expected);
            assert_eq!((&$v1 $op $v2), $expected);
            assert_eq!(($v1 $op &$v2), $expected);
            assert_eq!((&$v1 $op &$v2), $expected);
        };
    }

    #[test]
    fn ops() {
        let v1 = vec3(4, 5, 6);
        let v2 = vec3(1, 2, 3);
        test_binary_op!(v1, v2, +, vec3(5, 7, 9));
        test_binary_op!(v1, v2, -, vec3(3, 3, 3));
        assert_eq!(-v1, vec3(-4, -5, -6));

        let p = pt3(10, 20, 30);
        test_binary_op!(p, v2, +, pt3(11, 22, 33));
        test_binary_op!(p, v2, -, pt3(9, 18, 27));
        let q = pt3(4, 5, 6);
        test_binary_op!(p, q, -, vec3(6, 15, 24));
    }

    #[test]
    fn distances_ignore_z() {
        let p = pt3(-10, 2, 5);
        let q = pt3(4, 8, -100);
        assert_eq!(p.distance_squared(&q), 232);
        assert_eq!(p.distance_l1(&q), 20);
        assert_eq!(p.distance_linf(&q), 14);
    }

    #[test]
    fn signed_angle_follows_handedness() {
        let a = vec3(1.0, 0.0, 0.0);
        let b = vec3(0.0, 1.0, 0.0);
        let rh = a.signed_angle(b, CoordinateSystem::RightHanded);
        let lh = a.signed_angle(b, CoordinateSystem::LeftHanded);
        assert!((rh - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((lh + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn turns_are_inverse() {
        let v = vec3(3, -7, 2);
        for cs in [CoordinateSystem::RightHanded, CoordinateSystem::LeftHanded] {
            assert_eq!(v.turn_left(cs).turn_right(cs), v);
            assert_eq!(v.turn_left(cs).turn_left(cs), vec3(-3, 7, 2));
        }
    }

    #[test]
    fn rounding_to_lattice() {
        let p = pt3(1.5, -1.5, 2.49);
        assert_eq!(p.round_to_lattice(), pt3(2, -1, 2));
        assert_eq!(pt3(3, 4, 5).to_f64(), pt3(3.0, 4.0, 5.0));
    }
}
