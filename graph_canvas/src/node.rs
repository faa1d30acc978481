use common::id_type;
use common::key_index_vec::KeyIndexKey;
use glam::Vec2;
use hashbrown::HashSet;

use crate::color::Color;
use crate::edge::EdgeId;

id_type!(NodeId);

#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    pub(crate) pos: Vec2,
    pub(crate) color: Color,
    pub(crate) edges: HashSet<EdgeId>,
    /// Time the node was last selected, `None` while unselected.
    pub(crate) selected_at: Option<f64>,
}

impl Node {
    pub(crate) fn new(pos: Vec2, color: Color) -> Self {
        Self {
            id: NodeId::unique(),
            pos,
            color,
            edges: HashSet::new(),
            selected_at: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_selected(&self) -> bool {
        self.selected_at.is_some()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, edge_id: EdgeId) -> bool {
        self.edges.contains(&edge_id)
    }

    pub(crate) fn add_edge(&mut self, edge_id: EdgeId) {
        self.edges.insert(edge_id);
    }

    /// Removing an edge the node does not hold is a no-op.
    pub(crate) fn remove_edge(&mut self, edge_id: EdgeId) -> bool {
        self.edges.remove(&edge_id)
    }
}

impl KeyIndexKey<NodeId> for Node {
    fn key(&self) -> &NodeId {
        &self.id
    }
}
