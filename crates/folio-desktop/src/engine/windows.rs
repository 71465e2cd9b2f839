//! Window lifecycle and operations

use crate::math::Vec2;
use crate::window::{OpenOutcome, WindowDescriptor, WindowKind, WindowRecord};
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window or bring the existing one with that id to the front
    pub fn open_window(&mut self, descriptor: WindowDescriptor) -> OpenOutcome {
        self.windows.open(descriptor)
    }

    /// Open the standard window for a kind (dock and menu entries)
    pub fn open_kind(&mut self, kind: WindowKind) -> OpenOutcome {
        self.open_window(WindowDescriptor::for_kind(kind))
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) -> bool {
        // Drags never outlive their window
        self.input.cancel_for(id);
        self.windows.close(id)
    }

    /// Move a window
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) {
        self.windows.move_window(id, Vec2::new(x, y));
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus(id);
    }

    /// Whether a window with this id is open (dock indicators)
    pub fn is_open(&self, id: &str) -> bool {
        self.windows.contains(id)
    }

    /// Id of the front-most window
    pub fn focused_window(&self) -> Option<&str> {
        self.windows.focused().map(|r| r.id.as_str())
    }

    /// Immutable copy of the open windows for rendering
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        self.windows.snapshot()
    }
}
