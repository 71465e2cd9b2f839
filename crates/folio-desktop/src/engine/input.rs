//! Input handling for pointer events and drag operations

use crate::input::InputResult;
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle pointer down (page coordinates)
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        let (window_id, region) = match self.windows.region_at(pos, &self.config.frame) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::CloseButton => {
                self.close_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => self.handle_title_bar_click(window_id, pos),
            WindowRegion::Content => self.handle_content_click(window_id, pos),
        }
    }

    /// Handle click on title bar - starts window move
    fn handle_title_bar_click(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.focus_window(&window_id);
        if let Some(window) = self.windows.get(&window_id) {
            let offset = pos - window.position;
            self.input.start_window_move(window_id, offset);
        }
        InputResult::Handled
    }

    /// Handle click on content area
    fn handle_content_click(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.focus_window(&window_id);

        let window = match self.windows.get(&window_id) {
            Some(w) => w,
            None => return InputResult::Unhandled,
        };

        if !self.renderers.get(window.kind).interactive {
            return InputResult::Handled;
        }

        let local = pos - window.position;
        InputResult::Forward {
            window_id,
            local_x: local.x,
            local_y: local.y,
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let drag = match self.input.drag_state() {
            Some(state) => state,
            None => return InputResult::Unhandled,
        };

        let target = drag.target_position(Vec2::new(x, y));
        let window_id = drag.window_id.clone();
        let constrained =
            self.viewport
                .constrain(target, &self.config.frame, self.config.menu_bar_height);

        self.move_window(&window_id, constrained.x, constrained.y);
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.input.is_dragging() {
            self.input.end_drag();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }

    /// CSS cursor for the pointer position
    ///
    /// A window being dragged keeps the move cursor even when the pointer
    /// outruns the title bar.
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        if self.input.is_dragging() {
            return WindowRegion::TitleBar.cursor();
        }
        self.windows
            .region_at(Vec2::new(x, y), &self.config.frame)
            .map(|(_, region)| region.cursor())
            .unwrap_or("default")
    }
}
