//! Frame style constants

use serde::{Deserialize, Serialize};
use super::Size;

/// Geometry of a panel's chrome, used for hit testing and drag constraints
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameStyle {
    /// Panel width and minimum height
    pub panel_size: Size,
    pub title_bar_height: f32,
    /// Diameter of the close control
    pub button_size: f32,
    /// Distance from the panel's left edge to the close control
    pub button_margin: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        FRAME_STYLE
    }
}

/// Default frame style matching the UI design
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    panel_size: Size::new(420.0, 320.0),
    title_bar_height: 32.0,
    button_size: 12.0,
    button_margin: 16.0,
};
