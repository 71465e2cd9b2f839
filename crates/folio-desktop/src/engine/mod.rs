//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle and operations
//! - `input`: Pointer event handling and drag operations

mod windows;
mod input;

use crate::config::DesktopConfig;
use crate::content::RendererTable;
use crate::input::InputRouter;
use crate::viewport::Viewport;
use crate::window::WindowRegistry;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window registry (open, close, move, focus, stacking)
/// - Input router (title-bar drag state machine)
/// - Viewport (drag constraints)
/// - Renderer table (kind → content component)
///
/// One engine lives for one page session and is owned by whoever drives
/// the presentation layer. Nothing here is global.
#[derive(Clone, Debug)]
pub struct DesktopEngine {
    /// Placement and chrome settings
    pub config: DesktopConfig,
    /// Open windows
    pub windows: WindowRegistry,
    /// Input router
    pub input: InputRouter,
    /// Visible page area
    pub viewport: Viewport,
    /// Content renderers by kind
    pub renderers: RendererTable,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a desktop engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a desktop engine with a custom configuration
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            windows: WindowRegistry::with_cascade(config.cascade_origin, config.cascade_step),
            input: InputRouter::new(),
            viewport: Viewport::default(),
            renderers: RendererTable::new(),
            config,
        }
    }

    /// Initialize the desktop with screen dimensions
    ///
    /// Opens nothing; the desktop starts empty.
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        log::debug!("desktop initialized at {}x{}", width, height);
    }

    /// Resize the viewport
    ///
    /// Existing windows keep their positions; only later drags see the new
    /// bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }
}
