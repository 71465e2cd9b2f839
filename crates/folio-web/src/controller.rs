//! WASM exports for the portfolio desktop
//!
//! The presentation layer owns one `DesktopController` for the page session,
//! calls it on every gesture, and re-renders from `get_windows_json()`.

use std::str::FromStr;

use folio_desktop::{
    ContactForm, DesktopConfig, DesktopEngine, OpenOutcome, WindowDescriptor, WindowKind,
    WindowRecord,
};
use log::LevelFilter;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::logging;

/// A record as the presentation layer renders it
#[derive(Serialize)]
struct WindowView<'a> {
    #[serde(flatten)]
    record: &'a WindowRecord,
    focused: bool,
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopController {
    fn from_engine(engine: DesktopEngine) -> Self {
        install_browser_hooks();
        Self { engine }
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_engine(DesktopEngine::new())
    }

    /// Create a controller from a (possibly partial) JSON configuration
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<DesktopController, JsError> {
        let config = DesktopConfig::from_json(config_json)?;
        Ok(Self::from_engine(DesktopEngine::with_config(config)))
    }

    /// Change console verbosity ("error", "warn", "info", "debug", "trace", "off")
    #[wasm_bindgen]
    pub fn set_log_level(level: &str) -> Result<(), JsError> {
        let level = LevelFilter::from_str(level)?;
        log::set_max_level(level);
        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window. Returns true if a new window was created, false if an
    /// existing one was brought to the front.
    #[wasm_bindgen]
    pub fn open_window(
        &mut self,
        id: &str,
        title: &str,
        kind: &str,
        icon: &str,
    ) -> Result<bool, JsError> {
        let kind = WindowKind::from_str(kind)?;
        let outcome = self
            .engine
            .open_window(WindowDescriptor::new(id, title, kind, icon));
        Ok(outcome == OpenOutcome::Created)
    }

    /// Open the standard window for a kind (dock and menu entries)
    #[wasm_bindgen]
    pub fn open_kind(&mut self, kind: &str) -> Result<bool, JsError> {
        let kind = WindowKind::from_str(kind)?;
        Ok(self.engine.open_kind(kind) == OpenOutcome::Created)
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> bool {
        self.engine.close_window(id)
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    /// Move a window
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) {
        self.engine.move_window(id, x, y);
    }

    /// Check whether a window is open (dock indicators)
    #[wasm_bindgen]
    pub fn is_window_open(&self, id: &str) -> bool {
        self.engine.is_open(id)
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<String> {
        self.engine.focused_window().map(str::to_string)
    }

    /// Get all windows as JSON, in the order they were opened
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let focused = self.engine.focused_window();
        let views: Vec<WindowView<'_>> = self
            .engine
            .windows
            .records()
            .iter()
            .map(|record| WindowView {
                record,
                focused: focused == Some(record.id.as_str()),
            })
            .collect();
        serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down; returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move; returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up; returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Check if a window drag is in progress
    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.engine.input.is_dragging()
    }

    /// CSS cursor for hover feedback at a page position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine.cursor_at(x, y).to_string()
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Renderer for a kind as JSON: `{"component": .., "interactive": ..}`
    #[wasm_bindgen]
    pub fn renderer_for(&self, kind: &str) -> Result<String, JsError> {
        let kind = WindowKind::from_str(kind)?;
        Ok(serde_json::to_string(self.engine.renderers.get(kind))?)
    }

    /// Validate contact form fields
    ///
    /// Returns `{"valid": bool, "errors": {"name"?: msg, "email"?: msg, "message"?: msg}}`.
    #[wasm_bindgen]
    pub fn validate_contact(&self, name: &str, email: &str, message: &str) -> String {
        let mut errors = serde_json::Map::new();
        if let Err(failed) = ContactForm::new(name, email, message).validate() {
            for error in failed.errors {
                let key = serde_json::to_value(error.field)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default();
                errors.insert(key, serde_json::Value::from(error.message));
            }
        }

        serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
        })
        .to_string()
    }
}

/// Browser-only setup: panic messages and the console logger
fn install_browser_hooks() {
    #[cfg(all(target_arch = "wasm32", feature = "console_error_panic_hook"))]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    logging::init(logging::default_level());
}
