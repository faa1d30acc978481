use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::interaction::{HitTarget, Interaction, PointerGesture};

/// Raw pointer input in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerInput {
    Down { pos: Vec2, time: f64 },
    Move { pos: Vec2, time: f64 },
    Up { pos: Vec2, time: f64 },
}

impl PointerInput {
    pub fn pos(&self) -> Vec2 {
        match self {
            PointerInput::Down { pos, .. }
            | PointerInput::Move { pos, .. }
            | PointerInput::Up { pos, .. } => *pos,
        }
    }

    pub fn time(&self) -> f64 {
        match self {
            PointerInput::Down { time, .. }
            | PointerInput::Move { time, .. }
            | PointerInput::Up { time, .. } => *time,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Press {
    target: Option<HitTarget>,
    origin: Vec2,
    dragging: bool,
}

/// Delivers raw pointer input to the node, edge or canvas under the pointer.
///
/// The pressed object receives pointer-down and drags; a release over the
/// pressed object becomes a click on it.
#[derive(Clone, Debug)]
pub struct PointerRouter {
    drag_threshold: f32,
    press: Option<Press>,
}

impl PointerRouter {
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            drag_threshold,
            press: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    pub fn route(&mut self, input: PointerInput, interaction: &Interaction) -> Option<PointerGesture> {
        match input {
            PointerInput::Down { pos, .. } => {
                let target = interaction.hit_test(pos);
                self.press = Some(Press {
                    target,
                    origin: pos,
                    dragging: false,
                });

                match target {
                    Some(HitTarget::Node(node_id)) => {
                        Some(PointerGesture::NodePointerDown { node_id })
                    }
                    _ => None,
                }
            }
            PointerInput::Move { pos, .. } => {
                let press = self.press.as_mut()?;
                let Some(HitTarget::Node(node_id)) = press.target else {
                    return None;
                };

                if !press.dragging && pos.distance(press.origin) <= self.drag_threshold {
                    return None;
                }
                press.dragging = true;

                Some(PointerGesture::NodeDrag {
                    node_id,
                    screen: pos,
                })
            }
            PointerInput::Up { pos, time } => {
                // a drag that ends over the pressed node still clicks it, the node's
                // gesture state decides whether that click counts
                let press = self.press.take()?;
                let target = interaction.hit_test(pos);
                if target != press.target {
                    return None;
                }

                match target? {
                    HitTarget::Node(node_id) => Some(PointerGesture::NodeClick { node_id, time }),
                    HitTarget::Edge(edge_id) => Some(PointerGesture::EdgeClick { edge_id }),
                    HitTarget::Canvas => Some(PointerGesture::CanvasClick { screen: pos }),
                }
            }
        }
    }

    /// Routes `input` and applies the resulting gesture.
    pub fn dispatch(&mut self, input: PointerInput, interaction: &mut Interaction) {
        if let Some(gesture) = self.route(input, interaction) {
            interaction.handle(gesture);
        }
    }
}
