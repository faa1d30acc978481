use glam::Vec2;
use strum_macros::IntoStaticStr;

use crate::color::Color;
use crate::edge::{EdgeId, EdgeSpan};
use crate::node::NodeId;

/// Notifications for the presentation layer, in the order the changes happened.
#[derive(Clone, Debug, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CanvasEvent {
    NodeCreated {
        node_id: NodeId,
        pos: Vec2,
        color: Color,
    },
    NodeMoved {
        node_id: NodeId,
        pos: Vec2,
    },
    NodeSelected {
        node_id: NodeId,
    },
    NodeDeselected {
        node_id: NodeId,
    },
    NodeDestroyed {
        node_id: NodeId,
    },
    EdgeCreated {
        edge_id: EdgeId,
        first: NodeId,
        second: NodeId,
        span: EdgeSpan,
    },
    EdgeSpanChanged {
        edge_id: EdgeId,
        span: EdgeSpan,
    },
    EdgeDestroyed {
        edge_id: EdgeId,
    },
}

impl CanvasEvent {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            CanvasEvent::NodeCreated { node_id, .. }
            | CanvasEvent::NodeMoved { node_id, .. }
            | CanvasEvent::NodeSelected { node_id }
            | CanvasEvent::NodeDeselected { node_id }
            | CanvasEvent::NodeDestroyed { node_id } => Some(*node_id),
            CanvasEvent::EdgeCreated { .. }
            | CanvasEvent::EdgeSpanChanged { .. }
            | CanvasEvent::EdgeDestroyed { .. } => None,
        }
    }

    pub fn edge_id(&self) -> Option<EdgeId> {
        match self {
            CanvasEvent::EdgeCreated { edge_id, .. }
            | CanvasEvent::EdgeSpanChanged { edge_id, .. }
            | CanvasEvent::EdgeDestroyed { edge_id } => Some(*edge_id),
            CanvasEvent::NodeCreated { .. }
            | CanvasEvent::NodeMoved { .. }
            | CanvasEvent::NodeSelected { .. }
            | CanvasEvent::NodeDeselected { .. }
            | CanvasEvent::NodeDestroyed { .. } => None,
        }
    }

    /// The view has to redraw something it already shows.
    pub fn changes_geometry(&self) -> bool {
        match self {
            CanvasEvent::NodeCreated { .. }
            | CanvasEvent::NodeMoved { .. }
            | CanvasEvent::EdgeCreated { .. }
            | CanvasEvent::EdgeSpanChanged { .. } => true,

            CanvasEvent::NodeSelected { .. }
            | CanvasEvent::NodeDeselected { .. }
            | CanvasEvent::NodeDestroyed { .. }
            | CanvasEvent::EdgeDestroyed { .. } => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<CanvasEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: CanvasEvent) {
        log::trace!("{}: {:?}", event.name(), event);
        self.events.push(event);
    }

    pub fn pending(&self) -> &[CanvasEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
