mod test_utils;

use lattice_geom::core::math::{pt3, vec3};
use lattice_geom::core::Control;
use lattice_geom::shape::*;
use test_utils::scenario_multi;

#[test]
fn point_containment_over_the_union() {
    let multi = scenario_multi();
    assert!(multi.contains_point(pt3(-4, 19, 0)));
    assert!(multi.contains_point(pt3(6, 8, 0)));
    assert!(!multi.contains_point(pt3(-6, 8, 0)));
    assert!(!multi.contains_point(pt3(4, 17, 0)));

    assert_eq!(
        multi.first_shape_containing(pt3(-4, 19, 0)),
        Some(&Shape::from(Sphere::new(-5, 18, 0, 2)))
    );
}

#[test]
fn box_containment_needs_a_single_child() {
    let multi = scenario_multi();
    assert!(multi.contains_box(&AlignedBox::from_min_size(5, 8, 0, 1, 1, 0)));
    assert!(!multi.contains_box(&AlignedBox::from_min_size(4, 8, 0, 1, 1, 0)));
    assert!(multi.contains_box(&AlignedBox::from_min_size(-6, 17, 0, 1, 1, 0)));
    assert!(!multi.contains_box(&AlignedBox::from_min_size(-20, 14, 0, 1, 1, 0)));
}

#[test]
fn closest_point_among_children() {
    let multi = scenario_multi();
    let cases = [
        ((-10, 2), (-6, 16)),
        ((-10, 14), (-6, 16)),
        ((-10, 25), (-6, 20)),
        ((-1, 25), (-4, 20)),
        ((1, 2), (5, 8)),
        ((12, 2), (7, 8)),
    ];
    for ((x, y), (ex, ey)) in cases {
        assert_eq!(
            multi.closest_point_to(pt3(x, y, 0)),
            pt3(ex, ey, 0),
            "closest to ({x}, {y})"
        );
    }
    // inside a child
    assert_eq!(multi.closest_point_to(pt3(6, 8, 0)), pt3(6, 8, 0));
}

#[test]
fn farthest_point_among_children() {
    let multi = scenario_multi();
    assert_eq!(multi.farthest_point_to(pt3(-10, 2, 0)), pt3(-4, 20, 0));
    assert_eq!(multi.farthest_point_to(pt3(1, 2, 0)), pt3(-6, 20, 0));
    assert_eq!(multi.farthest_point_to(pt3(12, 2, 0)), pt3(-7, 19, 0));
    assert_eq!(multi.farthest_point_to(pt3(-10, 14, 0)), pt3(7, 8, 0));
}

#[test]
fn intersection_queries() {
    let multi = scenario_multi();
    let both = Segment::new(-10, 20, 0, 10, 5, 0);
    let hits = multi.shapes_intersecting(ShapeRef::from(&both));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0], &Shape::from(AlignedBox::from_min_size(5, 8, 0, 2, 1, 0)));
    assert!(multi.intersects(&both));

    let wide = AlignedBox::from_corners(-20, 0, 0, 20, 10, 0);
    let hits = multi.shapes_intersecting(ShapeRef::from(&wide));
    assert_eq!(hits.len(), 1);

    let touching = Sphere::new(-5, 14, 0, 2);
    assert_eq!(
        multi.first_shape_intersecting(ShapeRef::from(&touching)),
        multi.get(1)
    );
    assert!(!multi.intersects(&Sphere::new(-5, 13, 0, 2)));
}

#[test]
fn visitor_can_stop_early() {
    let multi = scenario_multi();
    let query = Segment::new(-10, 20, 0, 10, 5, 0);
    let mut visited = Vec::new();
    let result = multi.visit_shapes_intersecting(ShapeRef::from(&query), &mut |i, _| {
        visited.push(i);
        Control::Break(i)
    });
    assert!(matches!(result, Control::Break(0)));
    assert_eq!(visited, vec![0]);
}

#[test]
fn mutations_refresh_the_caches() {
    let mut multi = scenario_multi();
    let generation = multi.generation();
    assert!(multi.contains_point(pt3(6, 8, 0)));

    multi.translate(vec3(100, 0, 0));
    assert_ne!(multi.generation(), generation);
    assert!(!multi.contains_point(pt3(6, 8, 0)));
    assert!(multi.contains_point(pt3(106, 8, 0)));
    assert_eq!(multi.bounding_box().min().x, 93);

    let generation = multi.generation();
    if let Some(Shape::Sphere(s)) = multi.get_mut(1) {
        s.set_radius(4);
    }
    assert_ne!(multi.generation(), generation);
    assert_eq!(multi.bounding_box().min().x, 91);

    multi.insert(0, Segment::new(0, 0, 0, 1, 1, 0));
    assert!(multi.contains_point(pt3(1, 1, 0)));
    assert_eq!(multi.len(), 3);

    multi.clear();
    assert!(multi.is_empty());
    assert!(!multi.contains_point(pt3(106, 8, 0)));
}

#[test]
fn nested_multi_shapes_are_rejected() {
    let inner = scenario_multi();
    let err = Shape::try_from(ShapeRef::from(&inner)).unwrap_err();
    assert!(err.is_illegal_state());

    let outer = MultiShape::from_iter(inner.iter().cloned());
    assert_eq!(outer, inner);
    assert!(outer.contains_shape(&inner));
}
