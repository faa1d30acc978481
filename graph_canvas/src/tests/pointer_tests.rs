use glam::Vec2;

use crate::interaction::{HitTarget, Interaction, PointerGesture};
use crate::pointer::{PointerInput, PointerRouter};
use crate::tests::{add_node, test_interaction};

fn down(x: f32, y: f32, time: f64) -> PointerInput {
    PointerInput::Down {
        pos: Vec2::new(x, y),
        time,
    }
}

fn moved(x: f32, y: f32, time: f64) -> PointerInput {
    PointerInput::Move {
        pos: Vec2::new(x, y),
        time,
    }
}

fn up(x: f32, y: f32, time: f64) -> PointerInput {
    PointerInput::Up {
        pos: Vec2::new(x, y),
        time,
    }
}

fn click(router: &mut PointerRouter, interaction: &mut Interaction, x: f32, y: f32, time: f64) {
    router.dispatch(down(x, y, time), interaction);
    router.dispatch(up(x, y, time), interaction);
}

#[test]
fn hit_test_order() -> anyhow::Result<()> {
    let mut interaction = test_interaction();
    let a = add_node(&mut interaction, -100.0, 0.0);
    let b = add_node(&mut interaction, 100.0, 0.0);
    let mut router = PointerRouter::new(0.0);
    click(&mut router, &mut interaction, -100.0, 0.0, 1.0);
    click(&mut router, &mut interaction, 100.0, 0.0, 1.2);
    let edge_id = interaction.graph().edge_between(a, b).unwrap();

    assert_eq!(
        interaction.hit_test(Vec2::new(-85.0, 0.0)),
        Some(HitTarget::Node(a))
    );
    assert_eq!(
        interaction.hit_test(Vec2::new(0.0, 1.0)),
        Some(HitTarget::Edge(edge_id))
    );
    assert_eq!(
        interaction.hit_test(Vec2::new(0.0, 100.0)),
        Some(HitTarget::Canvas)
    );
    assert_eq!(interaction.hit_test(Vec2::new(0.0, 350.0)), None);

    Ok(())
}

#[test]
fn tap_on_empty_canvas_creates_node() -> anyhow::Result<()> {
    let mut interaction = test_interaction();
    let mut router = PointerRouter::new(0.0);

    click(&mut router, &mut interaction, 50.0, 60.0, 0.0);

    assert_eq!(interaction.graph().node_count(), 1);
    assert_eq!(interaction.graph().nodes()[0].pos(), Vec2::new(50.0, 60.0));
    interaction.validate()?;

    Ok(())
}

#[test]
fn tap_outside_canvas_does_nothing() {
    let mut interaction = test_interaction();
    let mut router = PointerRouter::new(0.0);

    click(&mut router, &mut interaction, 500.0, 0.0, 0.0);

    assert_eq!(interaction.graph().node_count(), 0);
}

#[test]
fn tap_near_canvas_border_is_rejected_by_placement() {
    let mut interaction = test_interaction();
    let mut router = PointerRouter::new(0.0);

    // on the canvas but the footprint would stick out
    click(&mut router, &mut interaction, 390.0, 0.0, 0.0);

    assert_eq!(interaction.graph().node_count(), 0);
}

#[test]
fn press_and_release_on_node_routes_down_then_click() {
    let mut interaction = test_interaction();
    let a = add_node(&mut interaction, 0.0, 0.0);
    let mut router = PointerRouter::new(0.0);

    assert_eq!(
        router.route(down(5.0, 5.0, 1.0), &interaction),
        Some(PointerGesture::NodePointerDown { node_id: a })
    );
    assert_eq!(
        router.route(up(6.0, 4.0, 1.1), &interaction),
        Some(PointerGesture::NodeClick {
            node_id: a,
            time: 1.1
        })
    );
    assert_eq!(router.route(up(6.0, 4.0, 1.2), &interaction), None);
}

#[test]
fn release_over_other_target_is_not_a_click() {
    let mut interaction = test_interaction();
    let a = add_node(&mut interaction, 0.0, 0.0);
    let mut router = PointerRouter::new(0.0);

    router.dispatch(down(0.0, 0.0, 1.0), &mut interaction);
    assert!(interaction.gesture(a).unwrap().is_pointer_down());
    assert_eq!(router.route(up(200.0, 0.0, 1.1), &interaction), None);

    router.dispatch(down(200.0, 0.0, 2.0), &mut interaction);
    assert_eq!(router.route(up(0.0, 0.0, 2.1), &interaction), None);
    assert_eq!(interaction.graph().node_count(), 1);
}

#[test]
fn dragging_a_node_moves_it_and_swallows_the_click() -> anyhow::Result<()> {
    let mut interaction = test_interaction();
    let a = add_node(&mut interaction, 0.0, 0.0);
    let mut router = PointerRouter::new(0.0);

    router.dispatch(down(0.0, 0.0, 1.0), &mut interaction);
    router.dispatch(moved(30.0, 10.0, 1.05), &mut interaction);
    assert!(router.is_dragging());
    router.dispatch(moved(60.0, 20.0, 1.1), &mut interaction);
    router.dispatch(up(60.0, 20.0, 1.15), &mut interaction);

    assert!(!router.is_dragging());
    assert_eq!(interaction.graph().node(a).unwrap().pos(), Vec2::new(60.0, 20.0));
    assert_eq!(interaction.selected(), None);
    interaction.validate()?;

    Ok(())
}

#[test]
fn blocked_drag_still_clicks() -> anyhow::Result<()> {
    let mut interaction = test_interaction();
    let a = add_node(&mut interaction, 0.0, 0.0);
    add_node(&mut interaction, 45.0, 0.0);
    let mut router = PointerRouter::new(0.0);

    // the drag step would overlap the neighbour, so the node never moves
    router.dispatch(down(10.0, 0.0, 1.0), &mut interaction);
    router.dispatch(moved(12.0, 0.0, 1.05), &mut interaction);
    router.dispatch(up(12.0, 0.0, 1.1), &mut interaction);

    assert_eq!(interaction.graph().node(a).unwrap().pos(), Vec2::ZERO);
    assert_eq!(interaction.selected(), Some(a));
    interaction.validate()?;

    Ok(())
}

#[test]
fn small_moves_below_threshold_are_not_drags() {
    let mut interaction = test_interaction();
    let a = add_node(&mut interaction, 0.0, 0.0);
    let mut router = PointerRouter::new(5.0);

    router.dispatch(down(0.0, 0.0, 1.0), &mut interaction);
    assert_eq!(router.route(moved(3.0, 0.0, 1.01), &interaction), None);
    assert!(!router.is_dragging());
    assert_eq!(
        router.route(moved(10.0, 0.0, 1.02), &interaction),
        Some(PointerGesture::NodeDrag {
            node_id: a,
            screen: Vec2::new(10.0, 0.0)
        })
    );
    // once dragging, every move is forwarded
    assert!(router.route(moved(11.0, 0.0, 1.03), &interaction).is_some());
}

#[test]
fn moving_over_canvas_or_edge_never_drags() {
    let mut interaction = test_interaction();
    let mut router = PointerRouter::new(0.0);

    router.dispatch(down(100.0, 100.0, 0.0), &mut interaction);
    assert_eq!(router.route(moved(150.0, 100.0, 0.1), &interaction), None);
    assert!(!router.is_dragging());
    assert_eq!(router.route(moved(10.0, 0.0, 0.2), &interaction), None);
}

#[test]
fn full_session_through_router() -> anyhow::Result<()> {
    let mut interaction = test_interaction();
    let mut router = PointerRouter::new(0.0);

    click(&mut router, &mut interaction, -100.0, 0.0, 0.0);
    click(&mut router, &mut interaction, 100.0, 0.0, 0.5);
    click(&mut router, &mut interaction, -100.0, 0.0, 1.0);
    click(&mut router, &mut interaction, 100.0, 0.0, 1.2);
    assert_eq!(interaction.graph().edge_count(), 1);

    // clicking the middle of the bar removes it
    click(&mut router, &mut interaction, 0.0, 0.0, 2.0);
    assert_eq!(interaction.graph().edge_count(), 0);
    assert_eq!(interaction.graph().node_count(), 2);

    // the edge is gone, so the same spot now creates a node
    click(&mut router, &mut interaction, 0.0, 0.0, 3.0);
    assert_eq!(interaction.graph().node_count(), 3);
    interaction.validate()?;

    Ok(())
}
