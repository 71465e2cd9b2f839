//! Drag state for title-bar moves

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress window move
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from window origin to cursor
    pub offset: Vec2,
}

impl DragState {
    /// Window position that keeps the grab point under the pointer
    #[inline]
    pub fn target_position(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_position_keeps_grab_offset() {
        let drag = DragState {
            window_id: "about".to_string(),
            offset: Vec2::new(15.5, 25.5),
        };

        let pos = drag.target_position(Vec2::new(300.0, 200.0));
        assert!((pos.x - 284.5).abs() < 0.001);
        assert!((pos.y - 174.5).abs() < 0.001);
    }
}
