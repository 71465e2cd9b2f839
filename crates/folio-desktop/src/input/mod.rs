//! Input routing module
//!
//! Provides the drag state machine for moving windows by their title bar.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;
