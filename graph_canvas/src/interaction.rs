use anyhow::anyhow;
use glam::Vec2;
use hashbrown::HashMap;
use log::{debug, trace};

use crate::config::CanvasConfig;
use crate::edge::EdgeId;
use crate::event::CanvasEvent;
use crate::geometry::CoordinateMapper;
use crate::gesture::{Click, GestureState};
use crate::graph::Graph;
use crate::node::NodeId;

/// Pointer events already routed to the object they hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerGesture {
    CanvasClick { screen: Vec2 },
    NodePointerDown { node_id: NodeId },
    NodeDrag { node_id: NodeId, screen: Vec2 },
    NodeClick { node_id: NodeId, time: f64 },
    EdgeClick { edge_id: EdgeId },
}

/// Object under the pointer, topmost first: nodes, then edges, then the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Node(NodeId),
    Edge(EdgeId),
    Canvas,
}

/// Turns pointer gestures into graph edits and tracks the pending selection.
pub struct Interaction {
    graph: Graph,
    mapper: Box<dyn CoordinateMapper>,
    selected: Option<NodeId>,
    gestures: HashMap<NodeId, GestureState>,
    double_click_window: f64,
    edge_thickness: f32,
}

impl std::fmt::Debug for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interaction")
            .field("graph", &self.graph)
            .field("selected", &self.selected)
            .field("gestures", &self.gestures)
            .field("double_click_window", &self.double_click_window)
            .field("edge_thickness", &self.edge_thickness)
            .finish_non_exhaustive()
    }
}

impl Interaction {
    pub fn new<M>(graph: Graph, config: &CanvasConfig, mapper: M) -> Self
    where
        M: CoordinateMapper + 'static,
    {
        assert!(graph.node_count() == 0, "interaction must start from an empty graph");

        Self {
            graph,
            mapper: Box::new(mapper),
            selected: None,
            gestures: HashMap::new(),
            double_click_window: config.double_click_window,
            edge_thickness: config.edge_thickness,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn gesture(&self, node_id: NodeId) -> Option<&GestureState> {
        self.gestures.get(&node_id)
    }

    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        self.graph.drain_events()
    }

    pub fn screen_to_local(&self, screen: Vec2) -> Vec2 {
        self.mapper.screen_to_local(screen)
    }

    pub fn hit_test(&self, screen: Vec2) -> Option<HitTarget> {
        let local = self.screen_to_local(screen);

        if let Some(node_id) = self.graph.node_at(local) {
            return Some(HitTarget::Node(node_id));
        }
        if let Some(edge_id) = self.graph.edge_at(local, self.edge_thickness) {
            return Some(HitTarget::Edge(edge_id));
        }
        if self.graph.placement().canvas().contains(local) {
            return Some(HitTarget::Canvas);
        }

        None
    }

    pub fn handle(&mut self, gesture: PointerGesture) {
        trace!("{:?}", gesture);

        match gesture {
            PointerGesture::CanvasClick { screen } => self.canvas_click(screen),
            PointerGesture::NodePointerDown { node_id } => self.node_pointer_down(node_id),
            PointerGesture::NodeDrag { node_id, screen } => self.node_drag(node_id, screen),
            PointerGesture::NodeClick { node_id, time } => self.node_click(node_id, time),
            PointerGesture::EdgeClick { edge_id } => self.edge_click(edge_id),
        }

        if common::is_debug() {
            if let Err(err) = self.validate() {
                panic!("Interaction invariants broken after {:?}: {err:#}", gesture);
            }
        }
    }

    pub fn canvas_click(&mut self, screen: Vec2) {
        let local = self.screen_to_local(screen);

        match self.graph.create_node(local) {
            Ok(node_id) => {
                self.gestures.insert(node_id, GestureState::default());
                // a new node always breaks a pending connection
                if let Some(selected) = self.selected {
                    self.deselect(selected);
                }
            }
            Err(rejection) => debug!("Node not created at {local}: {rejection}"),
        }
    }

    pub fn node_pointer_down(&mut self, node_id: NodeId) {
        match self.gestures.get_mut(&node_id) {
            Some(gesture) => gesture.pointer_down(),
            None => debug!("Pointer down on unknown node {node_id}"),
        }
    }

    pub fn node_drag(&mut self, node_id: NodeId, screen: Vec2) {
        let local = self.screen_to_local(screen);

        if let Err(rejection) = self.graph.move_node(node_id, local) {
            debug!("Node {node_id} not moved to {local}: {rejection}");
            return;
        }

        if let Some(gesture) = self.gestures.get_mut(&node_id) {
            gesture.dragged();
        }
        if self.selected == Some(node_id) {
            self.deselect(node_id);
        }
    }

    pub fn node_click(&mut self, node_id: NodeId, now: f64) {
        let Some(gesture) = self.gestures.get(&node_id) else {
            debug!("Click on unknown node {node_id}");
            return;
        };

        let click = gesture.classify_click(now, self.double_click_window);
        trace!("{click} click on node {node_id} at {now}");

        match click {
            Click::Ignored => {}
            Click::Double => self.delete_node(node_id),
            Click::Single => self.toggle_selection(node_id, now),
        }
    }

    pub fn edge_click(&mut self, edge_id: EdgeId) {
        if !self.graph.delete_edge(edge_id) {
            debug!("Click on unknown edge {edge_id}");
        }
    }

    /// Checks the graph invariants and that selection bookkeeping agrees with the graph.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.graph.validate()?;

        let flagged: Vec<NodeId> = self.graph.selected_nodes().collect();
        if flagged.as_slice() != self.selected.as_slice() {
            return Err(anyhow!(
                "selection {:?} disagrees with selected nodes {:?}",
                self.selected,
                flagged
            ));
        }
        if let Some(node_id) = self.gestures.keys().find(|id| !self.graph.contains_node(**id)) {
            return Err(anyhow!("gesture state kept for missing node {node_id}"));
        }
        if self.gestures.len() != self.graph.node_count() {
            return Err(anyhow!("gesture state missing for some nodes"));
        }

        Ok(())
    }

    fn toggle_selection(&mut self, node_id: NodeId, now: f64) {
        match self.selected {
            None => self.select(node_id, now),
            Some(selected) if selected == node_id => self.deselect(node_id),
            Some(selected) => {
                self.record_selection(node_id, now);
                if let Err(rejection) = self.graph.create_edge(selected, node_id) {
                    debug!("Edge {selected} - {node_id} not created: {rejection}");
                }
                self.deselect(selected);
                self.deselect(node_id);
            }
        }
    }

    fn select(&mut self, node_id: NodeId, now: f64) {
        self.record_selection(node_id, now);
        self.graph.select_node(node_id, now);
        self.selected = Some(node_id);
    }

    fn deselect(&mut self, node_id: NodeId) {
        self.graph.deselect_node(node_id);
        if self.selected == Some(node_id) {
            self.selected = None;
        }
    }

    fn record_selection(&mut self, node_id: NodeId, now: f64) {
        if let Some(gesture) = self.gestures.get_mut(&node_id) {
            gesture.record_selection(now);
        }
    }

    fn delete_node(&mut self, node_id: NodeId) {
        if self.selected == Some(node_id) {
            self.selected = None;
        }
        self.gestures.remove(&node_id);
        self.graph.delete_node(node_id);
    }
}
