pub mod color;
pub mod config;
pub mod edge;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod graph;
pub mod interaction;
pub mod node;
pub mod placement;
pub mod pointer;
pub mod session;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::CanvasConfig;
    pub use crate::edge::{Edge, EdgeId, EdgeSpan};
    pub use crate::event::CanvasEvent;
    pub use crate::geometry::{CanvasTransform, CoordinateMapper, IdentityMapper, Rect};
    pub use crate::graph::{Graph, Rejection};
    pub use crate::interaction::{HitTarget, Interaction, PointerGesture};
    pub use crate::node::{Node, NodeId};
    pub use crate::pointer::{PointerInput, PointerRouter};
    pub use crate::session::{Session, SessionSummary};
}
