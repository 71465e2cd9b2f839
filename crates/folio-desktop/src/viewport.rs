//! Browser viewport dimensions and drag constraints

use crate::math::{FrameStyle, Size, Vec2};

/// Visible page area
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_size: Size::new(screen_width, screen_height),
        }
    }

    /// Keep a dragged panel on screen and below the menu bar.
    ///
    /// The panel's left edge stays within `[0, width - panel width]` and its
    /// top edge within `[menu_bar_height, height - panel height]`.
    pub fn constrain(&self, position: Vec2, style: &FrameStyle, menu_bar_height: f32) -> Vec2 {
        let min = Vec2::new(0.0, menu_bar_height);
        let max = self.screen_size.as_vec2() - style.panel_size.as_vec2();
        position.clamp(min, max)
    }
}
