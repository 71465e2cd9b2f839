//! Window region for hit testing

use serde::Serialize;

/// Part of a panel under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area
    Content,
    /// Close control
    CloseButton,
}

impl WindowRegion {
    /// CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton => "pointer",
        }
    }
}
