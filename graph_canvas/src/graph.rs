use anyhow::anyhow;
use common::key_index_vec::KeyIndexVec;
use glam::Vec2;
use hashbrown::HashSet;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::{self, Color};
use crate::config::CanvasConfig;
use crate::edge::{Edge, EdgeId, EdgeSpan};
use crate::event::{CanvasEvent, EventQueue};
use crate::geometry;
use crate::node::{Node, NodeId};
use crate::placement::PlacementValidator;

/// Why a graph operation left the graph untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("position is outside the valid canvas region")]
    OutOfBounds,
    #[error("position overlaps another node")]
    Overlap,
    #[error("an edge cannot connect a node to itself")]
    SelfLoop,
    #[error("the nodes are already connected")]
    DuplicateEdge,
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),
    #[error("edge {0} does not exist")]
    UnknownEdge(EdgeId),
}

/// Owns every live node and edge. Cross references between them are ids only.
#[derive(Debug)]
pub struct Graph {
    nodes: KeyIndexVec<NodeId, Node>,
    edges: KeyIndexVec<EdgeId, Edge>,
    placement: PlacementValidator,
    highlight_period: f32,
    rng: StdRng,
    events: EventQueue,
}

impl Graph {
    pub fn new(config: &CanvasConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Same as [`Graph::new`] with reproducible node colors.
    pub fn with_seed(config: &CanvasConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &CanvasConfig, rng: StdRng) -> Self {
        Self {
            nodes: KeyIndexVec::default(),
            edges: KeyIndexVec::default(),
            placement: PlacementValidator::from_config(config),
            highlight_period: config.highlight_period,
            rng,
            events: EventQueue::default(),
        }
    }

    pub fn placement(&self) -> &PlacementValidator {
        &self.placement
    }

    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.by_key(&node_id)
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.by_key(&edge_id)
    }

    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn contains_edge(&self, edge_id: EdgeId) -> bool {
        self.edges.contains_key(&edge_id)
    }

    pub fn check_position(&self, pos: Vec2, exclude: Option<NodeId>) -> Result<(), Rejection> {
        self.placement.check(pos, exclude, self.nodes.iter())
    }

    pub fn is_valid_position(&self, pos: Vec2, exclude: Option<NodeId>) -> bool {
        self.check_position(pos, exclude).is_ok()
    }

    pub fn create_node(&mut self, pos: Vec2) -> Result<NodeId, Rejection> {
        self.check_position(pos, None)?;

        let color = Color::random(&mut self.rng);
        let node = Node::new(pos, color);
        let node_id = node.id();
        self.nodes.push(node);

        self.events.push(CanvasEvent::NodeCreated {
            node_id,
            pos,
            color,
        });

        Ok(node_id)
    }

    /// Deletes the node and every edge touching it. Unknown ids are ignored.
    pub fn delete_node(&mut self, node_id: NodeId) -> bool {
        let Some(node) = self.nodes.by_key(&node_id) else {
            return false;
        };

        // collected up front, the node's set shrinks as edges go
        let incident: Vec<EdgeId> = node.edges().collect();
        for edge_id in incident {
            self.delete_edge(edge_id);
        }

        let node = self
            .nodes
            .remove_by_key(&node_id)
            .expect("node presence checked above");
        assert!(node.edges.is_empty());

        self.events.push(CanvasEvent::NodeDestroyed { node_id });

        true
    }

    pub fn create_edge(&mut self, first: NodeId, second: NodeId) -> Result<EdgeId, Rejection> {
        if first == second {
            return Err(Rejection::SelfLoop);
        }

        let first_node = self.nodes.by_key(&first).ok_or(Rejection::UnknownNode(first))?;
        let second_node = self
            .nodes
            .by_key(&second)
            .ok_or(Rejection::UnknownNode(second))?;
        if self.has_neighbour(first_node, second) || self.has_neighbour(second_node, first) {
            return Err(Rejection::DuplicateEdge);
        }
        let span = EdgeSpan::between(first_node.pos(), second_node.pos());

        let edge = Edge::new(first, second);
        let edge_id = edge.id();
        self.edges.push(edge);
        self.node_mut(first).add_edge(edge_id);
        self.node_mut(second).add_edge(edge_id);

        self.events.push(CanvasEvent::EdgeCreated {
            edge_id,
            first,
            second,
            span,
        });

        Ok(edge_id)
    }

    /// Detaches the edge from both endpoints and drops it. Unknown ids are ignored.
    pub fn delete_edge(&mut self, edge_id: EdgeId) -> bool {
        let Some(edge) = self.edges.remove_by_key(&edge_id) else {
            return false;
        };

        for node_id in edge.endpoints() {
            if let Some(node) = self.nodes.by_key_mut(&node_id) {
                node.remove_edge(edge_id);
            }
        }

        self.events.push(CanvasEvent::EdgeDestroyed { edge_id });

        true
    }

    pub fn move_node(&mut self, node_id: NodeId, pos: Vec2) -> Result<(), Rejection> {
        if !self.contains_node(node_id) {
            return Err(Rejection::UnknownNode(node_id));
        }
        self.check_position(pos, Some(node_id))?;

        let node = self.node_mut(node_id);
        node.pos = pos;
        let incident: Vec<EdgeId> = node.edges().collect();

        self.events.push(CanvasEvent::NodeMoved { node_id, pos });
        for edge_id in incident {
            let span = self
                .edge_span(edge_id)
                .expect("incident edge must be registered");
            self.events.push(CanvasEvent::EdgeSpanChanged { edge_id, span });
        }

        Ok(())
    }

    pub fn edge_span(&self, edge_id: EdgeId) -> Option<EdgeSpan> {
        let edge = self.edges.by_key(&edge_id)?;
        let first = self.nodes.by_key(&edge.first())?;
        let second = self.nodes.by_key(&edge.second())?;

        Some(EdgeSpan::between(first.pos(), second.pos()))
    }

    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let node = self.nodes.by_key(&a)?;
        node.edges()
            .find(|edge_id| self.edges.by_key(edge_id).is_some_and(|edge| edge.connects(a, b)))
    }

    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_between(a, b).is_some()
    }

    pub fn neighbours(&self, node_id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.by_key(&node_id) else {
            return Vec::new();
        };

        node.edges()
            .filter_map(|edge_id| self.edges.by_key(&edge_id))
            .filter_map(|edge| edge.opposite(node_id))
            .collect()
    }

    pub fn select_node(&mut self, node_id: NodeId, now: f64) -> bool {
        let Some(node) = self.nodes.by_key_mut(&node_id) else {
            return false;
        };
        if node.is_selected() {
            return false;
        }

        node.selected_at = Some(now);
        self.events.push(CanvasEvent::NodeSelected { node_id });

        true
    }

    pub fn deselect_node(&mut self, node_id: NodeId) -> bool {
        let Some(node) = self.nodes.by_key_mut(&node_id) else {
            return false;
        };
        if node.selected_at.take().is_none() {
            return false;
        }

        self.events.push(CanvasEvent::NodeDeselected { node_id });

        true
    }

    pub fn selected_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_selected())
            .map(|node| node.id())
    }

    /// Color the view should paint the node with at time `now`.
    pub fn display_color(&self, node_id: NodeId, now: f64) -> Option<Color> {
        let node = self.nodes.by_key(&node_id)?;
        let color = match node.selected_at {
            Some(selected_at) => color::highlight(
                node.color(),
                (now - selected_at).max(0.0) as f32,
                self.highlight_period,
            ),
            None => node.color(),
        };

        Some(color)
    }

    /// Topmost node whose footprint covers `local`.
    pub fn node_at(&self, local: Vec2) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| self.placement.footprint_contains(node.pos(), local))
            .map(|node| node.id())
    }

    /// Topmost edge whose bar of width `thickness` covers `local`.
    pub fn edge_at(&self, local: Vec2, thickness: f32) -> Option<EdgeId> {
        let half = thickness * 0.5;
        self.edges
            .iter()
            .rev()
            .find(|edge| {
                let (Some(first), Some(second)) =
                    (self.node(edge.first()), self.node(edge.second()))
                else {
                    return false;
                };
                geometry::distance_to_segment(local, first.pos(), second.pos()) <= half
            })
            .map(|edge| edge.id())
    }

    pub fn events(&self) -> &[CanvasEvent] {
        self.events.pending()
    }

    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        self.events.drain()
    }

    /// Checks the structural invariants: consistent adjacency, no duplicate or
    /// self edges, legal placement and at most one selected node.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(self.edges.len());

        for edge in self.edges.iter() {
            if edge.first() == edge.second() {
                return Err(anyhow!("edge {} is a self loop", edge.id()));
            }
            for node_id in edge.endpoints() {
                let node = self
                    .node(node_id)
                    .ok_or_else(|| anyhow!("edge {} references missing node {}", edge.id(), node_id))?;
                if !node.has_edge(edge.id()) {
                    return Err(anyhow!(
                        "node {} does not list incident edge {}",
                        node_id,
                        edge.id()
                    ));
                }
            }

            let pair = (
                edge.first().min(edge.second()),
                edge.first().max(edge.second()),
            );
            if !pairs.insert(pair) {
                return Err(anyhow!("duplicate edge between {} and {}", pair.0, pair.1));
            }
        }

        for node in self.nodes.iter() {
            for edge_id in node.edges() {
                let edge = self
                    .edge(edge_id)
                    .ok_or_else(|| anyhow!("node {} lists missing edge {}", node.id(), edge_id))?;
                if !edge.touches(node.id()) {
                    return Err(anyhow!(
                        "node {} lists edge {} it is not an endpoint of",
                        node.id(),
                        edge_id
                    ));
                }
            }

            if let Err(rejection) = self.check_position(node.pos(), Some(node.id())) {
                return Err(anyhow!("node {} is misplaced: {}", node.id(), rejection));
            }
        }

        if self.selected_nodes().count() > 1 {
            return Err(anyhow!("more than one node is selected"));
        }

        Ok(())
    }

    fn has_neighbour(&self, node: &Node, other: NodeId) -> bool {
        node.edges()
            .filter_map(|edge_id| self.edges.by_key(&edge_id))
            .any(|edge| edge.touches(other))
    }

    fn node_mut(&mut self, node_id: NodeId) -> &mut Node {
        self.nodes
            .by_key_mut(&node_id)
            .unwrap_or_else(|| panic!("node {} must exist", node_id))
    }
}
