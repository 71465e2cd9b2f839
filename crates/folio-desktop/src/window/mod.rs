//! Window management module
//!
//! Provides the window registry (open, close, move, focus), the records
//! it holds, and hit testing over them.

mod kind;
mod descriptor;
mod record;
mod region;
mod registry;

pub use kind::{ParseKindError, WindowKind};
pub use descriptor::WindowDescriptor;
pub use record::WindowRecord;
pub use region::WindowRegion;
pub use registry::{OpenOutcome, WindowRegistry, DEFAULT_CASCADE_ORIGIN, DEFAULT_CASCADE_STEP};

/// Stable window identifier (e.g. `"about"`)
pub type WindowId = String;
