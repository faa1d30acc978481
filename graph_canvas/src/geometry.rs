use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, min-inclusive and max-exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Shrinks the rectangle by `amount` on every side. Collapses to the center
    /// when the rectangle is smaller than `2 * amount` on an axis.
    pub fn shrink(&self, amount: Vec2) -> Self {
        let center = self.center();
        let min = (self.min + amount).min(center);
        let max = (self.max - amount).max(center);
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

/// Converts raw pointer coordinates into canvas-local coordinates.
pub trait CoordinateMapper {
    fn screen_to_local(&self, screen: Vec2) -> Vec2;
}

/// Treats screen coordinates as already canvas-local.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityMapper;

impl CoordinateMapper for IdentityMapper {
    fn screen_to_local(&self, screen: Vec2) -> Vec2 {
        screen
    }
}

/// Screen pixels (origin top-left, Y down) to canvas-local space
/// (origin at the canvas center, Y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of the canvas center.
    pub origin: Vec2,
    /// Screen pixels per local unit.
    pub scale: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CanvasTransform {
    pub fn new(origin: Vec2, scale: f32) -> Self {
        assert!(scale.is_finite() && scale > 0.0, "scale must be positive");
        Self { origin, scale }
    }

    /// Canvas of `canvas_size` local units drawn at `scale` with its top-left corner at `top_left`.
    pub fn from_screen_rect(top_left: Vec2, canvas_size: Vec2, scale: f32) -> Self {
        Self::new(top_left + canvas_size * scale * 0.5, scale)
    }

    pub fn local_to_screen(&self, local: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + local.x * self.scale,
            self.origin.y - local.y * self.scale,
        )
    }
}

impl CoordinateMapper for CanvasTransform {
    fn screen_to_local(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x - self.origin.x) / self.scale,
            (self.origin.y - screen.y) / self.scale,
        )
    }
}

/// Distance from `point` to the segment `a..b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
