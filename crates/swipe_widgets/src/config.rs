//! Swipeable configuration
//!
//! Settable in code through the builder methods, or loaded from TOML:
//!
//! ```toml
//! threshold = 10
//! velocity = 0.3
//! animation_time = 200
//!
//! [left_action]
//! name = "delete"
//! caption = "Delete"
//! icon = "trash"
//!
//! [theme]
//! left_background = "#ef4444"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::gesture::Direction;
use crate::theme::SwipeTheme;

/// An action revealed by swiping toward one side
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Identifier delivered with the `action` event
    pub name: String,
    /// Text shown on the placeholder
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ActionSpec {
    pub fn new(name: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caption: caption.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Per-instance swipe configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Minimum horizontal travel (px) before a swipe registers
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Release speed (px/ms) above which a swipe always commits
    #[serde(default = "default_velocity", rename = "velocity")]
    pub velocity_threshold: f32,
    /// Length of the commit and reset animations
    #[serde(default = "default_animation_time", rename = "animation_time")]
    pub animation_duration_ms: u32,
    #[serde(default)]
    pub left_action: Option<ActionSpec>,
    #[serde(default)]
    pub right_action: Option<ActionSpec>,
    #[serde(default)]
    pub theme: SwipeTheme,
}

fn default_threshold() -> f32 {
    10.0
}

fn default_velocity() -> f32 {
    0.3
}

fn default_animation_time() -> u32 {
    200
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            velocity_threshold: default_velocity(),
            animation_duration_ms: default_animation_time(),
            left_action: None,
            right_action: None,
            theme: SwipeTheme::default(),
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: SwipeConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw).map_err(|err| {
            tracing::warn!(path = %path.display(), %err, "rejected swipe config");
            err
        })
    }

    /// Check the values a host may have set directly
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !self.velocity_threshold.is_finite() || self.velocity_threshold < 0.0 {
            return Err(ConfigError::InvalidVelocity(self.velocity_threshold));
        }
        for direction in [Direction::Left, Direction::Right] {
            if let Some(action) = self.action(direction) {
                if action.name.trim().is_empty() {
                    return Err(ConfigError::EmptyActionName {
                        side: direction.as_str(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The action revealed when swiping toward `direction`
    pub fn action(&self, direction: Direction) -> Option<&ActionSpec> {
        match direction {
            Direction::Left => self.left_action.as_ref(),
            Direction::Right => self.right_action.as_ref(),
        }
    }

    /// Whether swiping toward `direction` is enabled at all
    pub fn allows(&self, direction: Direction) -> bool {
        self.action(direction).is_some()
    }

    /// Set the minimum swipe distance
    pub fn threshold(mut self, px: f32) -> Self {
        self.threshold = px;
        self
    }

    /// Set the commit velocity threshold
    pub fn velocity(mut self, px_per_ms: f32) -> Self {
        self.velocity_threshold = px_per_ms;
        self
    }

    /// Set the animation duration
    pub fn animation_time(mut self, ms: u32) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Set the action revealed when swiping left
    pub fn left_action(mut self, action: ActionSpec) -> Self {
        self.left_action = Some(action);
        self
    }

    /// Set the action revealed when swiping right
    pub fn right_action(mut self, action: ActionSpec) -> Self {
        self.right_action = Some(action);
        self
    }

    pub fn theme(mut self, theme: SwipeTheme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwipeConfig::default();
        assert_eq!(config.threshold, 10.0);
        assert_eq!(config.velocity_threshold, 0.3);
        assert_eq!(config.animation_duration_ms, 200);
        assert!(!config.allows(Direction::Left));
        assert!(!config.allows(Direction::Right));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = SwipeConfig::from_toml_str(
            r#"
            threshold = 12
            velocity = 0.5
            animation_time = 150

            [left_action]
            name = "delete"
            caption = "Delete"
            icon = "trash"
            "#,
        )
        .unwrap();

        assert_eq!(config.threshold, 12.0);
        assert_eq!(config.velocity_threshold, 0.5);
        assert_eq!(config.animation_duration_ms, 150);
        let left = config.action(Direction::Left).unwrap();
        assert_eq!(left.name, "delete");
        assert_eq!(left.icon.as_deref(), Some("trash"));
        assert!(config.right_action.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SwipeConfig::from_toml_str("").unwrap();
        assert_eq!(config, SwipeConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let config = SwipeConfig::new().threshold(-1.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))));

        let config = SwipeConfig::new().velocity(f32::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidVelocity(_))));

        let config = SwipeConfig::new().right_action(ActionSpec::new("  ", "Archive"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyActionName { side: "right" })
        ));
    }

    #[test]
    fn test_toml_missing_action_name_is_parse_error() {
        let result = SwipeConfig::from_toml_str("[left_action]\ncaption = \"Delete\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
