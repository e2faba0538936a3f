/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Round to the nearest integer with ties going towards positive infinity (`floor(v + 0.5)`).
/// Values outside of the `i32` range saturate, `NaN` maps to 0.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(-2.51), -3);
/// assert_eq!(round_half_up(1e20), i32::MAX);
/// ```
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Sign of the position of `(px, py)` relative to the directed line through `(x1, y1)` and
/// `(x2, y2)`: `1` on the left, `-1` on the right, `0` when collinear.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// assert_eq!(side_of_line(0, 0, 10, 0, 3, 4), 1);
/// assert_eq!(side_of_line(0, 0, 10, 0, 3, -4), -1);
/// assert_eq!(side_of_line(0, 0, 10, 0, 30, 0), 0);
/// ```
#[inline]
pub fn side_of_line(x1: i32, y1: i32, x2: i32, y2: i32, px: i32, py: i32) -> i32 {
    let cross = (i64::from(x2) - i64::from(x1)) * (i64::from(py) - i64::from(y1))
        - (i64::from(y2) - i64::from(y1)) * (i64::from(px) - i64::from(x1));
    cross.signum() as i32
}

/// Squared distance from `(px, py)` to the infinite line through `(x1, y1)` and `(x2, y2)`.
/// Falls back to the point distance when the line is degenerate.
pub fn dist_squared_line_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    let x21 = x2 - x1;
    let y21 = y2 - y1;
    let den = x21 * x21 + y21 * y21;
    if den == 0.0 {
        let (dx, dy) = (px - x1, py - y1);
        return dx * dx + dy * dy;
    }
    let s = ((y1 - py) * x21 - (x1 - px) * y21) / den;
    s * s * den.abs()
}

/// Squared distance from `(px, py)` to the segment from `(x1, y1)` to `(x2, y2)`.
pub fn dist_squared_segment_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    let x21 = x2 - x1;
    let y21 = y2 - y1;
    let den = x21 * x21 + y21 * y21;
    let xp1 = px - x1;
    let yp1 = py - y1;
    if den == 0.0 {
        return xp1 * xp1 + yp1 * yp1;
    }
    let ratio = (xp1 * x21 + yp1 * y21) / den;
    if ratio <= 0.0 {
        return xp1 * xp1 + yp1 * yp1;
    }
    if ratio >= 1.0 {
        let (dx, dy) = (px - x2, py - y2);
        return dx * dx + dy * dy;
    }
    let factor = (xp1 * y21 - yp1 * x21) / den;
    factor * factor * den.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn line_and_segment_distances() {
        // point beyond the segment end: line distance is perpendicular, segment distance is
        // to the end point
        assert!(dist_squared_line_point(0.0, 0.0, 4.0, 0.0, 6.0, 3.0).fuzzy_eq(9.0));
        assert!(dist_squared_segment_point(0.0, 0.0, 4.0, 0.0, 6.0, 3.0).fuzzy_eq(13.0));
        assert!(dist_squared_segment_point(0.0, 0.0, 4.0, 0.0, 2.0, -2.0).fuzzy_eq(4.0));
        assert!(dist_squared_segment_point(1.0, 1.0, 1.0, 1.0, 4.0, 5.0).fuzzy_eq(25.0));
    }

    #[test]
    fn side_does_not_overflow() {
        assert_eq!(side_of_line(i32::MIN, 0, i32::MAX, 0, 0, i32::MAX), 1);
    }
}
