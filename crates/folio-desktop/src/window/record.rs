//! Open window record

use serde::{Deserialize, Serialize};
use crate::math::{FrameStyle, Rect, Vec2};
use super::{WindowId, WindowKind};

/// One open panel on the desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    /// Unique among open records
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Content selector
    pub kind: WindowKind,
    /// Title bar icon
    pub icon: String,
    /// Top-left corner in page pixels
    pub position: Vec2,
    /// Stacking priority (higher = on top)
    pub stack_order: u64,
}

impl WindowRecord {
    /// Panel frame
    #[inline]
    pub fn rect(&self, style: &FrameStyle) -> Rect {
        Rect::from_pos_size(self.position, style.panel_size)
    }

    /// Title bar strip (drag handle)
    pub fn title_bar_rect(&self, style: &FrameStyle) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            style.panel_size.width,
            style.title_bar_height,
        )
    }

    /// Close control, first of the controls on the left of the title bar
    pub fn close_button_rect(&self, style: &FrameStyle) -> Rect {
        let x = self.position.x + style.button_margin;
        let y = self.position.y + (style.title_bar_height - style.button_size) / 2.0;
        Rect::new(x, y, style.button_size, style.button_size)
    }
}
