//! Window descriptor passed to `open`

use serde::{Deserialize, Serialize};
use super::{WindowId, WindowKind};

/// Describes which window to show
///
/// Dock and menu entries each carry one of these. Opening the same `id`
/// twice refers to the same logical window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    /// Stable identifier, reused across repeated opens
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Content selector
    pub kind: WindowKind,
    /// Title bar icon (emoji)
    pub icon: String,
}

impl WindowDescriptor {
    /// Create a descriptor
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        kind: WindowKind,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            icon: icon.into(),
        }
    }

    /// The descriptor the dock and menu bar use for a kind
    pub fn for_kind(kind: WindowKind) -> Self {
        let (title, icon) = match kind {
            WindowKind::About => ("About Me", "👤"),
            WindowKind::Skills => ("Skills", "⚡"),
            WindowKind::Experience => ("Experience", "💼"),
            WindowKind::Contact => ("Contact", "📧"),
            WindowKind::Resume => ("Resume.pdf", "📄"),
        };
        Self::new(kind.as_str(), title, kind, icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_descriptor_ids_match_kind() {
        for kind in WindowKind::ALL {
            let d = WindowDescriptor::for_kind(kind);
            assert_eq!(d.id, kind.as_str());
            assert_eq!(d.kind, kind);
            assert!(!d.title.is_empty());
        }
    }

    #[test]
    fn test_resume_descriptor() {
        let d = WindowDescriptor::for_kind(WindowKind::Resume);
        assert_eq!(d.title, "Resume.pdf");
        assert_eq!(d.icon, "📄");
    }

    #[test]
    fn test_descriptor_from_json() {
        let json = r#"{"id":"contact","title":"Contact","kind":"contact","icon":"📧"}"#;
        let d: WindowDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d, WindowDescriptor::for_kind(WindowKind::Contact));
    }

    #[test]
    fn test_descriptor_rejects_unknown_kind() {
        let json = r#"{"id":"trash","title":"Trash","kind":"trash","icon":"🗑️"}"#;
        assert!(serde_json::from_str::<WindowDescriptor>(json).is_err());
    }
}
