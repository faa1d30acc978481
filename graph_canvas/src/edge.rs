use common::id_type;
use common::key_index_vec::KeyIndexKey;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::node::NodeId;

id_type!(EdgeId);

/// Placement of the bar drawn between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeSpan {
    pub center: Vec2,
    pub length: f32,
    /// Rotation in radians of the segment from the first to the second endpoint, relative to +X.
    pub angle: f32,
}

impl EdgeSpan {
    pub fn between(first: Vec2, second: Vec2) -> Self {
        let delta = second - first;
        Self {
            center: first + delta * 0.5,
            length: delta.length(),
            angle: delta.y.atan2(delta.x),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    id: EdgeId,
    first: NodeId,
    second: NodeId,
}

impl Edge {
    pub(crate) fn new(first: NodeId, second: NodeId) -> Self {
        assert_ne!(first, second, "edge endpoints must be distinct");

        Self {
            id: EdgeId::unique(),
            first,
            second,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn first(&self) -> NodeId {
        self.first
    }

    pub fn second(&self) -> NodeId {
        self.second
    }

    pub fn endpoints(&self) -> [NodeId; 2] {
        [self.first, self.second]
    }

    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.first == node_id || self.second == node_id
    }

    /// The endpoint across from `node_id`, if `node_id` is an endpoint.
    pub fn opposite(&self, node_id: NodeId) -> Option<NodeId> {
        if self.first == node_id {
            Some(self.second)
        } else if self.second == node_id {
            Some(self.first)
        } else {
            None
        }
    }
}

impl KeyIndexKey<EdgeId> for Edge {
    fn key(&self) -> &EdgeId {
        &self.id
    }
}
