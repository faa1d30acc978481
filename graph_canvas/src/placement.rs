use glam::Vec2;

use crate::config::CanvasConfig;
use crate::geometry::Rect;
use crate::graph::Rejection;
use crate::node::{Node, NodeId};

/// Decides where a node footprint may sit on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementValidator {
    canvas: Rect,
    valid_rect: Rect,
    footprint: Vec2,
}

impl PlacementValidator {
    pub fn new(canvas_size: Vec2, footprint: Vec2) -> Self {
        let canvas = Rect::from_center_size(Vec2::ZERO, canvas_size);
        Self {
            canvas,
            valid_rect: canvas.shrink(footprint * 0.5),
            footprint,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.canvas_size, config.node_size)
    }

    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    /// Region node centers must stay in so the whole footprint is on the canvas.
    pub fn valid_rect(&self) -> Rect {
        self.valid_rect
    }

    pub fn footprint(&self) -> Vec2 {
        self.footprint
    }

    pub fn check<'a>(
        &self,
        candidate: Vec2,
        exclude: Option<NodeId>,
        nodes: impl IntoIterator<Item = &'a Node>,
    ) -> Result<(), Rejection> {
        if !self.valid_rect.contains(candidate) {
            return Err(Rejection::OutOfBounds);
        }

        let overlaps = nodes
            .into_iter()
            .filter(|node| Some(node.id()) != exclude)
            .any(|node| self.overlaps(candidate, node.pos()));
        if overlaps {
            return Err(Rejection::Overlap);
        }

        Ok(())
    }

    pub fn is_valid_position<'a>(
        &self,
        candidate: Vec2,
        exclude: Option<NodeId>,
        nodes: impl IntoIterator<Item = &'a Node>,
    ) -> bool {
        self.check(candidate, exclude, nodes).is_ok()
    }

    /// Footprints centered at `a` and `b` intersect.
    pub fn overlaps(&self, a: Vec2, b: Vec2) -> bool {
        let delta = (a - b).abs();
        delta.x < self.footprint.x && delta.y < self.footprint.y
    }

    /// Footprint centered at `center` covers `point`.
    pub fn footprint_contains(&self, center: Vec2, point: Vec2) -> bool {
        let delta = (point - center).abs();
        let half = self.footprint * 0.5;
        delta.x <= half.x && delta.y <= half.y
    }
}
