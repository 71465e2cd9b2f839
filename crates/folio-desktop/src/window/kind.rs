//! Window kinds

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Which content a window shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    About,
    Skills,
    Experience,
    Contact,
    Resume,
}

/// A kind string that names none of the known window kinds
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown window kind: {0:?}")]
pub struct ParseKindError(pub String);

impl WindowKind {
    /// Every kind, in menu order
    pub const ALL: [WindowKind; 5] = [
        WindowKind::About,
        WindowKind::Skills,
        WindowKind::Experience,
        WindowKind::Contact,
        WindowKind::Resume,
    ];

    /// Wire name, as used in descriptors
    pub fn as_str(self) -> &'static str {
        match self {
            WindowKind::About => "about",
            WindowKind::Skills => "skills",
            WindowKind::Experience => "experience",
            WindowKind::Contact => "contact",
            WindowKind::Resume => "resume",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_known() {
        for kind in WindowKind::ALL {
            assert_eq!(kind.as_str().parse::<WindowKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "trash".parse::<WindowKind>().unwrap_err();
        assert_eq!(err, ParseKindError("trash".to_string()));
        assert_eq!(err.to_string(), "unknown window kind: \"trash\"");
    }

    #[test]
    fn test_kind_parse_is_case_sensitive() {
        assert!("About".parse::<WindowKind>().is_err());
    }

    #[test]
    fn test_kind_serde_matches_display() {
        let json = serde_json::to_string(&WindowKind::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
        assert_eq!(WindowKind::Experience.to_string(), "experience");
    }
}
