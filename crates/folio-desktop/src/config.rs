//! Desktop configuration
//!
//! Every field has a default, so a host may pass a partial JSON object
//! (or none at all).

use serde::{Deserialize, Serialize};
use crate::math::{FrameStyle, Vec2, FRAME_STYLE};
use crate::window::{DEFAULT_CASCADE_ORIGIN, DEFAULT_CASCADE_STEP};

/// Errors from loading a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into a configuration
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunables for window placement and chrome geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Position of the first window opened on an empty desktop
    pub cascade_origin: Vec2,
    /// Per-window offset for subsequent windows
    pub cascade_step: f32,
    /// Panel chrome geometry
    pub frame: FrameStyle,
    /// Height of the menu bar; dragged panels stay below it
    pub menu_bar_height: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            cascade_origin: DEFAULT_CASCADE_ORIGIN,
            cascade_step: DEFAULT_CASCADE_STEP,
            frame: FRAME_STYLE,
            menu_bar_height: 28.0,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the layout cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let frame = &self.frame;

        require_finite("cascadeOrigin", &[self.cascade_origin.x, self.cascade_origin.y])?;
        require_finite("cascadeStep", &[self.cascade_step])?;
        require_finite(
            "frame.panelSize",
            &[frame.panel_size.width, frame.panel_size.height],
        )?;
        require_finite("frame.titleBarHeight", &[frame.title_bar_height])?;
        require_finite("frame.buttonSize", &[frame.button_size])?;
        require_finite("frame.buttonMargin", &[frame.button_margin])?;
        require_finite("menuBarHeight", &[self.menu_bar_height])?;

        if self.cascade_step < 0.0 {
            return Err(ConfigError::Invalid {
                field: "cascadeStep",
                reason: "must not be negative",
            });
        }
        if frame.panel_size.is_empty() {
            return Err(ConfigError::Invalid {
                field: "frame.panelSize",
                reason: "width and height must be positive",
            });
        }
        if frame.title_bar_height <= 0.0 || frame.title_bar_height > frame.panel_size.height {
            return Err(ConfigError::Invalid {
                field: "frame.titleBarHeight",
                reason: "must be positive and fit inside the panel",
            });
        }
        if frame.button_size < 0.0 || frame.button_size > frame.title_bar_height {
            return Err(ConfigError::Invalid {
                field: "frame.buttonSize",
                reason: "must not be negative and must fit inside the title bar",
            });
        }
        if frame.button_margin < 0.0
            || frame.button_margin + frame.button_size > frame.panel_size.width
        {
            return Err(ConfigError::Invalid {
                field: "frame.buttonMargin",
                reason: "must not be negative and must keep the button inside the title bar",
            });
        }
        if self.menu_bar_height < 0.0 {
            return Err(ConfigError::Invalid {
                field: "menuBarHeight",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// serde_json maps out-of-range numbers such as `1e39` to infinity
fn require_finite(field: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(DesktopConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = DesktopConfig::from_json("{}").unwrap();
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DesktopConfig::from_json(r#"{"cascadeStep": 45, "menuBarHeight": 32}"#).unwrap();
        assert!((config.cascade_step - 45.0).abs() < 0.001);
        assert!((config.menu_bar_height - 32.0).abs() < 0.001);
        assert_eq!(config.cascade_origin, DEFAULT_CASCADE_ORIGIN);
        assert_eq!(config.frame, FRAME_STYLE);
    }

    #[test]
    fn test_partial_frame_override() {
        let config =
            DesktopConfig::from_json(r#"{"frame": {"panelSize": {"width": 500, "height": 400}}}"#)
                .unwrap();
        assert!((config.frame.panel_size.width - 500.0).abs() < 0.001);
        assert!((config.frame.title_bar_height - FRAME_STYLE.title_bar_height).abs() < 0.001);
    }

    #[test]
    fn test_malformed_json() {
        let err = DesktopConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_negative_step_rejected() {
        let err = DesktopConfig::from_json(r#"{"cascadeStep": -5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cascadeStep", .. }));
        assert_eq!(err.to_string(), "invalid cascadeStep: must not be negative");
    }

    #[test]
    fn test_empty_panel_rejected() {
        let err = DesktopConfig::from_json(r#"{"frame": {"panelSize": {"width": 0, "height": 320}}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "frame.panelSize", .. }));
    }

    fn rejected_field(json: &str) -> &'static str {
        match DesktopConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected invalid config for {}, got {:?}", json, other),
        }
    }

    #[test]
    fn test_out_of_range_numbers_rejected() {
        assert_eq!(
            rejected_field(r#"{"cascadeOrigin": {"x": 1e39, "y": 0}}"#),
            "cascadeOrigin"
        );
        assert_eq!(rejected_field(r#"{"cascadeStep": 1e39}"#), "cascadeStep");
        assert_eq!(
            rejected_field(r#"{"frame": {"panelSize": {"width": 1e39, "height": 1e39}}}"#),
            "frame.panelSize"
        );
        assert_eq!(
            rejected_field(r#"{"frame": {"titleBarHeight": 1e39}}"#),
            "frame.titleBarHeight"
        );
        assert_eq!(rejected_field(r#"{"frame": {"buttonSize": 1e39}}"#), "frame.buttonSize");
        assert_eq!(
            rejected_field(r#"{"frame": {"buttonMargin": -1e39}}"#),
            "frame.buttonMargin"
        );
        assert_eq!(rejected_field(r#"{"menuBarHeight": 1e39}"#), "menuBarHeight");
    }

    #[test]
    fn test_negative_button_geometry_rejected() {
        assert_eq!(rejected_field(r#"{"frame": {"buttonSize": -50}}"#), "frame.buttonSize");
        assert_eq!(
            rejected_field(r#"{"frame": {"buttonMargin": -1000}}"#),
            "frame.buttonMargin"
        );
        assert_eq!(
            rejected_field(r#"{"frame": {"buttonSize": -50, "buttonMargin": -1000}}"#),
            "frame.buttonSize"
        );
    }

    #[test]
    fn test_close_button_must_stay_in_title_bar() {
        assert_eq!(rejected_field(r#"{"frame": {"buttonSize": 40}}"#), "frame.buttonSize");
        assert_eq!(
            rejected_field(r#"{"frame": {"buttonMargin": 415}}"#),
            "frame.buttonMargin"
        );
        assert!(DesktopConfig::from_json(r#"{"frame": {"buttonMargin": 0, "buttonSize": 0}}"#).is_ok());
    }

    #[test]
    fn test_negative_menu_bar_rejected() {
        assert_eq!(rejected_field(r#"{"menuBarHeight": -1}"#), "menuBarHeight");
    }
}
