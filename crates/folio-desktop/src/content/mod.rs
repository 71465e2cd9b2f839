//! Window content dispatch
//!
//! Each [`WindowKind`] maps to exactly one renderer through an explicit
//! table. The presentation layer mounts the named component; the engine
//! uses `interactive` to decide whether content clicks belong to the
//! content or to the window.

mod contact;

pub use contact::{ContactErrors, ContactField, ContactForm, FieldError, MIN_MESSAGE_LEN};

use enum_map::{enum_map, EnumMap};
use serde::Serialize;
use crate::window::WindowKind;

/// How to render one kind of window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Renderer {
    /// Component the presentation layer mounts
    pub component: &'static str,
    /// Content consumes its own pointer events (form fields)
    pub interactive: bool,
}

/// Kind → renderer mapping
#[derive(Clone, Debug)]
pub struct RendererTable {
    entries: EnumMap<WindowKind, Renderer>,
}

impl Default for RendererTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererTable {
    /// The standard portfolio renderers
    pub fn new() -> Self {
        let static_view = |component| Renderer {
            component,
            interactive: false,
        };

        Self {
            entries: enum_map! {
                WindowKind::About => static_view("AboutWindow"),
                WindowKind::Skills => static_view("SkillsWindow"),
                WindowKind::Experience => static_view("ExperienceWindow"),
                WindowKind::Contact => Renderer {
                    component: "ContactWindow",
                    interactive: true,
                },
                WindowKind::Resume => static_view("ResumeWindow"),
            },
        }
    }

    /// Renderer for a kind
    #[inline]
    pub fn get(&self, kind: WindowKind) -> &Renderer {
        &self.entries[kind]
    }

    /// All entries in kind order
    pub fn iter(&self) -> impl Iterator<Item = (WindowKind, &Renderer)> {
        self.entries.iter()
    }
}
