//! Browser bindings for the Folio portfolio desktop
//!
//! Exposes [`DesktopController`] to JavaScript. The page creates one
//! controller, forwards pointer events and dock clicks to it, and renders
//! windows from the JSON it returns. All state lives in
//! [`folio_desktop::DesktopEngine`]; this crate only translates.
//!
//! Log output goes to the browser console through the `log` facade and can
//! be tuned at runtime with `DesktopController.set_log_level("trace")`.

mod controller;
#[cfg(target_arch = "wasm32")]
mod logging;

pub use controller::DesktopController;
