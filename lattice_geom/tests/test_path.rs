mod test_utils;

use lattice_geom::core::errors::ShapeError;
use lattice_geom::core::math::{pt3, AffineTransform3D};
use lattice_geom::shape::*;
use lattice_geom::{path_closed, path_open};
use test_utils::scenario_path;

#[test]
fn winding_rule_changes_the_area() {
    let mut path = scenario_path();
    assert!(path.contains_point(pt3(5, 0, 0)));
    let generation = path.generation();
    path.set_winding_rule(WindingRule::EvenOdd);
    assert_ne!(path.generation(), generation);
    assert!(!path.contains_point(pt3(5, 0, 0)));
    assert!(!path.contains_point(pt3(6, -2, 0)));

    // setting the same rule again is not a mutation
    let generation = path.generation();
    path.set_winding_rule(WindingRule::EvenOdd);
    assert_eq!(path.generation(), generation);
}

#[test]
fn scenario_box_containment_and_intersection() {
    let path = scenario_path();
    let touching = AlignedBox::from_min_size(3, 0, 0, 1, 1, 0);
    let inside = AlignedBox::from_min_size(4, -1, 0, 1, 1, 0);
    let outside = AlignedBox::from_min_size(-5, -5, 0, 1, 1, 0);

    assert!(!path.contains_box(&touching));
    assert!(path.contains_box(&inside));
    assert!(!path.contains_box(&outside));

    assert!(path.intersects(&touching));
    assert!(path.intersects(&inside));
    assert!(!path.intersects(&outside));
    assert!(!path.intersects(&AlignedBox::from_min_size(20, 20, 0, 2, 2, 0)));
}

#[test]
fn scenario_sphere_and_segment_queries() {
    let path = scenario_path();
    assert!(path.intersects(&Sphere::new(4, -1, 0, 1)));
    assert!(!path.intersects(&Sphere::new(-5, -5, 0, 2)));
    assert!(path.contains_shape(&Sphere::new(4, -1, 0, 1)));
    assert!(path.contains_shape(&Sphere::new(5, -2, 0, 1)));

    assert!(!path.intersects(&Segment::new(-5, 1, 0, -1, 1, 0)));
    assert!(path.intersects(&Segment::new(-5, 1, 0, 10, 1, 0)));
    assert!(path.intersects(&Segment::new(4, -1, 0, 5, -1, 0)));
}

#[test]
fn points_on_the_closing_edge_are_contained() {
    let path = scenario_path();
    for p in [pt3(1, -1, 0), pt3(5, -4, 0)] {
        assert_eq!(path.closest_point_to(p), p);
        assert_eq!(path.distance_squared(p), 0);
        assert!(path.contains_point(p));
    }
    assert!(!path.contains_point(pt3(0, -1, 0)));
}

#[test]
fn points_on_a_horizontal_spike_are_contained() {
    let spike = path_closed![(0, 0, 0), (6, 6, 0), (12, 6, 0), (4, 6, 0)];
    for p in [pt3(9, 6, 0), pt3(12, 6, 0), pt3(5, 6, 0)] {
        assert!(spike.contains_point(p));
        assert_eq!(spike.distance_squared(p), 0);
    }
    assert!(!spike.contains_point(pt3(13, 6, 0)));
    assert_eq!(spike.closest_point_to(pt3(13, 6, 0)), pt3(12, 6, 0));
}

#[test]
fn degenerate_boxes_inside_a_square() {
    let square = path_closed![(0, 0, 0), (10, 0, 0), (10, 10, 0), (0, 10, 0)];
    let flat = AlignedBox::from_corners(2, 5, 0, 8, 5, 0);
    let point = AlignedBox::from_corners(5, 5, 0, 5, 5, 0);
    assert!(square.contains_box(&flat));
    assert!(square.intersects(&flat));
    assert!(flat.intersects(&square));
    assert!(square.intersects(&point));
    assert!(square.intersects(&Segment::new(2, 5, 0, 8, 5, 0)));
    assert!(!square.intersects(&AlignedBox::from_corners(20, 5, 0, 23, 5, 0)));

    // an open outline has no area to hit
    let open = path_open![(0, 0, 0), (10, 0, 0), (10, 10, 0), (0, 10, 0)];
    assert!(!open.intersects(&flat));
}

#[test]
fn scenario_bounds() {
    let path = scenario_path();
    let drawable = path.drawable_bounding_box().unwrap();
    assert_eq!(drawable.min(), pt3(0, -5, 0));
    assert_eq!(drawable.max(), pt3(7, 3, 0));
    assert_eq!(path.bounding_box(), drawable);

    let ctrl = path.bounding_box_with_ctrl_points().unwrap();
    assert_eq!((ctrl.min().x, ctrl.min().y), (0, -5));
    assert_eq!((ctrl.max().x, ctrl.max().y), (7, 5));
    assert!(path.contains_control_point(pt3(6, 5, 0)));
    assert!(!path.contains_control_point(pt3(6, 4, 0)));
}

#[test]
fn open_paths_have_no_area() {
    let open = path_open![(0, 0, 0), (6, 0, 0), (6, 6, 0)];
    let closed = path_closed![(0, 0, 0), (6, 0, 0), (6, 6, 0)];
    assert!(!open.contains_point(pt3(4, 2, 0)));
    assert!(open.contains_point(pt3(6, 6, 0)));
    assert!(closed.contains_point(pt3(4, 2, 0)));

    let inner = AlignedBox::from_min_size(3, 1, 0, 1, 1, 0);
    assert!(!open.intersects(&inner));
    assert!(closed.intersects(&inner));
    // box containment closes the last part
    assert!(open.contains_box(&inner));
    assert!(closed.contains_box(&inner));

    assert_eq!(open.closest_point_to(pt3(4, 2, 0)), pt3(4, 2, 0));
    assert_eq!(open.closest_point_to(pt3(-3, 1, 0)), pt3(0, 0, 0));
    assert_eq!(open.farthest_point_to(pt3(0, 1, 0)), pt3(6, 6, 0));
}

#[test]
fn sequencing_errors_leave_the_path_untouched() {
    let mut path = Path::new();
    assert_eq!(
        path.close_path(),
        Err(ShapeError::MissingMoveTo {
            operation: "close_path"
        })
    );
    assert!(path.remove_last().unwrap_err().is_illegal_state());
    assert!(path.set_last_point(1, 1, 0).is_err());
    assert!(path.is_empty());
    assert_eq!(path.generation(), 0);
}

#[test]
fn empty_path_queries() {
    let path = Path::new();
    assert!(path.bounding_box().is_empty());
    assert_eq!(path.drawable_bounding_box(), None);
    assert!(!path.contains_point(pt3(0, 0, 0)));
    assert!(!path.contains_box(&AlignedBox::from_min_size(0, 0, 0, 1, 1, 0)));
    assert_eq!(path.point_iter().count(), 0);
    assert_eq!(path.path_iter().count(), 0);
}

#[test]
fn transform_and_copy_between_paths() {
    let source = path_closed![(0, 0, 0), (2, 1, 0), (0, 2, 0)];
    let mut scaled = source.clone();
    scaled.transform(&AffineTransform3D::scaling(1.5, 1.5, 1.0));
    assert!(scaled.contains_control_point(pt3(3, 2, 0)));
    assert!(source.contains_control_point(pt3(2, 1, 0)));

    let mut copy = Path::with_winding_rule(WindingRule::EvenOdd);
    copy.set_from(source.path_iter()).unwrap();
    assert_eq!(copy, source);
    assert_eq!(copy.winding_rule(), WindingRule::NonZero);

    let mut doubled = source.clone();
    doubled.add_iter(source.path_iter()).unwrap();
    assert_eq!(doubled.element_count(), 2 * source.element_count());
    assert!(doubled.is_multi_parts());
}
