#![allow(dead_code)]
use lattice_geom::shape::{AlignedBox, MultiShape, Path, Sphere};

/// Closed path mixing a line, a quadratic curve and a cubic curve:
/// `M(0,0) L(2,2) Q(3,0 → 4,3) C(5,-1 6,5 → 7,-5) Z`.
pub fn scenario_path() -> Path {
    let mut path = Path::new();
    path.move_to(0, 0, 0);
    path.line_to(2, 2, 0).unwrap();
    path.quad_to(3, 0, 0, 4, 3, 0).unwrap();
    path.curve_to(5, -1, 0, 6, 5, 0, 7, -5, 0).unwrap();
    path.close_path().unwrap();
    path
}

/// Box at (5, 8) sized 2 x 1 followed by a sphere of radius 2 at (-5, 18).
pub fn scenario_multi() -> MultiShape {
    let mut multi = MultiShape::new();
    multi.add(AlignedBox::from_min_size(5, 8, 0, 2, 1, 0));
    multi.add(Sphere::new(-5, 18, 0, 2));
    multi
}

/// Drop the z coordinate of every point.
pub fn xy<I>(points: I) -> Vec<(i32, i32)>
where
    I: IntoIterator<Item = lattice_geom::Point3i>,
{
    points.into_iter().map(|p| (p.x, p.y)).collect()
}
