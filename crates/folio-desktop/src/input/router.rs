//! Input router state machine

use crate::math::Vec2;
use crate::window::WindowId;
use super::DragState;

/// Input router managing drag state
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState { window_id, offset });
    }

    /// End current drag operation
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Drop the drag if it targets `window_id`
    pub fn cancel_for(&mut self, window_id: &str) {
        if self.drag.as_ref().is_some_and(|d| d.window_id == window_id) {
            self.drag = None;
        }
    }
}
