//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input should be forwarded to window content
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}
