//! Desktop state for the Folio portfolio
//!
//! This crate provides the state behind a desktop-styled portfolio page:
//! - Window registry (open, close, move, focus, stacking order)
//! - Title-bar drag handling with viewport constraints
//! - Kind → content renderer dispatch
//! - Contact form validation
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`, `FrameStyle`)
//! - [`window`]: Window records and the registry that owns them
//! - [`input`]: Drag state machine and input results
//! - [`content`]: Renderer table and the contact form
//! - [`config`]: Placement and chrome settings
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopEngine, WindowDescriptor, WindowKind};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! engine.open_window(WindowDescriptor::new("about", "About Me", WindowKind::About, "👤"));
//! engine.open_kind(WindowKind::Skills);
//! engine.focus_window("about");
//!
//! assert_eq!(engine.focused_window(), Some("about"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Owned State**: The engine is owned by its host; there are no globals
//! 3. **No Failure Paths in Window Operations**: Unknown ids are no-ops

pub mod math;
pub mod window;
pub mod input;
pub mod content;
pub mod config;

mod engine;
mod viewport;

// Re-export core types for convenience
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use window::{
    OpenOutcome, ParseKindError, WindowDescriptor, WindowId, WindowKind, WindowRecord,
    WindowRegion, WindowRegistry,
};
pub use input::{DragState, InputResult, InputRouter};
pub use content::{ContactErrors, ContactField, ContactForm, FieldError, Renderer, RendererTable};
pub use config::{ConfigError, DesktopConfig};

pub use engine::DesktopEngine;
pub use viewport::Viewport;
