//! Core geometry types for the desktop
//!
//! Positions are page pixels with the origin at the top-left of the
//! viewport, matching what the presentation layer writes into
//! `left`/`top`.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
