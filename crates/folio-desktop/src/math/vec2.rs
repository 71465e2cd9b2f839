//! 2D vector type for window positions and pointer offsets

use serde::{Deserialize, Serialize};

/// 2D point or offset in page pixels
///
/// Serializes as `{ "x": .., "y": .. }`, the shape the presentation layer
/// passes for positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Origin
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Clamp each axis into `[min, max]`.
    ///
    /// When an axis range is inverted the lower bound wins, so a viewport
    /// smaller than a panel pins the panel to the top-left edge.
    #[inline]
    pub fn clamp(self, min: Vec2, max: Vec2) -> Self {
        Self::new(self.x.min(max.x).max(min.x), self.y.min(max.y).max(min.y))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}
