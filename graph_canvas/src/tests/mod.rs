mod placement_tests;
mod pointer_tests;

use glam::Vec2;

use crate::config::CanvasConfig;
use crate::geometry::IdentityMapper;
use crate::graph::Graph;
use crate::interaction::Interaction;
use crate::node::NodeId;

pub(crate) fn test_graph() -> Graph {
    Graph::with_seed(&CanvasConfig::default(), 42)
}

pub(crate) fn test_interaction() -> Interaction {
    let config = CanvasConfig::default();
    Interaction::new(Graph::with_seed(&config, 42), &config, IdentityMapper)
}

/// Creates a node at `(x, y)` through a canvas click and returns its id.
pub(crate) fn add_node(interaction: &mut Interaction, x: f32, y: f32) -> NodeId {
    let pos = Vec2::new(x, y);
    interaction.canvas_click(pos);
    interaction
        .graph()
        .node_at(pos)
        .unwrap_or_else(|| panic!("node expected at {pos}"))
}

/// Pointer-down followed by a click, the way a tap without movement arrives.
pub(crate) fn tap(interaction: &mut Interaction, node_id: NodeId, time: f64) {
    interaction.node_pointer_down(node_id);
    interaction.node_click(node_id, time);
}
