use glam::Vec2;

use crate::color::Color;
use crate::graph::Rejection;
use crate::node::Node;
use crate::placement::PlacementValidator;

fn validator() -> PlacementValidator {
    PlacementValidator::new(Vec2::new(800.0, 600.0), Vec2::new(40.0, 40.0))
}

fn node_at(x: f32, y: f32) -> Node {
    Node::new(Vec2::new(x, y), Color::default())
}

#[test]
fn valid_region_is_inset_by_half_footprint() {
    let validator = validator();
    let rect = validator.valid_rect();

    assert_eq!(rect.min, Vec2::new(-380.0, -280.0));
    assert_eq!(rect.max, Vec2::new(380.0, 280.0));
    assert_eq!(validator.canvas().size(), Vec2::new(800.0, 600.0));
}

#[test]
fn bounds_check() {
    let validator = validator();
    let nodes: Vec<Node> = Vec::new();

    assert!(validator.is_valid_position(Vec2::ZERO, None, &nodes));
    assert!(validator.is_valid_position(Vec2::new(-380.0, -280.0), None, &nodes));
    assert!(validator.is_valid_position(Vec2::new(379.5, 279.5), None, &nodes));

    assert_eq!(
        validator.check(Vec2::new(380.0, 0.0), None, &nodes),
        Err(Rejection::OutOfBounds)
    );
    assert_eq!(
        validator.check(Vec2::new(0.0, -281.0), None, &nodes),
        Err(Rejection::OutOfBounds)
    );
    assert_eq!(
        validator.check(Vec2::new(f32::NAN, 0.0), None, &nodes),
        Err(Rejection::OutOfBounds)
    );
}

#[test]
fn overlap_is_axis_aligned_footprint_test() {
    let validator = validator();
    let nodes = vec![node_at(0.0, 0.0)];

    assert_eq!(
        validator.check(Vec2::new(5.0, 5.0), None, &nodes),
        Err(Rejection::Overlap)
    );
    assert_eq!(
        validator.check(Vec2::new(39.0, 39.0), None, &nodes),
        Err(Rejection::Overlap)
    );
    // touching edges do not overlap
    assert!(validator.is_valid_position(Vec2::new(40.0, 0.0), None, &nodes));
    assert!(validator.is_valid_position(Vec2::new(0.0, -40.0), None, &nodes));
    // a corner offset beyond the full width on one axis is enough, no radius involved
    assert!(validator.is_valid_position(Vec2::new(41.0, 10.0), None, &nodes));
}

#[test]
fn excluded_node_does_not_collide_with_itself() {
    let validator = validator();
    let nodes = vec![node_at(0.0, 0.0), node_at(100.0, 0.0)];
    let moving = nodes[0].id();

    assert!(validator.is_valid_position(Vec2::new(10.0, 0.0), Some(moving), &nodes));
    assert_eq!(
        validator.check(Vec2::new(70.0, 0.0), Some(moving), &nodes),
        Err(Rejection::Overlap)
    );
}

#[test]
fn footprint_contains_covers_full_node() {
    let validator = validator();
    let center = Vec2::new(100.0, 50.0);

    assert!(validator.footprint_contains(center, Vec2::new(120.0, 70.0)));
    assert!(validator.footprint_contains(center, Vec2::new(80.0, 30.0)));
    assert!(!validator.footprint_contains(center, Vec2::new(121.0, 50.0)));
}
