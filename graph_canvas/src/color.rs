use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0.0..=1.0),
            g: rng.random_range(0.0..=1.0),
            b: rng.random_range(0.0..=1.0),
        }
    }

    pub fn inverted(&self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// Bounces `t` between 0 and `length`: rises for `length`, falls for `length`.
pub fn pingpong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }

    let cycle = t.rem_euclid(length * 2.0);
    length - (cycle - length).abs()
}

/// Color of a selected node `elapsed` seconds after selection.
pub fn highlight(main: Color, elapsed: f32, period: f32) -> Color {
    main.lerp(main.inverted(), pingpong(elapsed, period))
}
