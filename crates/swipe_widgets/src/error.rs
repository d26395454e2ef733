//! Widget error types

use swipe_core::CoreError;
use thiserror::Error;

/// Errors raised while configuring a swipeable widget
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Swipe threshold must be a finite, non-negative pixel distance
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(f32),

    /// Velocity threshold must be a finite, non-negative px/ms value
    #[error("Invalid velocity threshold: {0}")]
    InvalidVelocity(f32),

    /// A configured action has no name to dispatch
    #[error("The {side} action has an empty name")]
    EmptyActionName { side: &'static str },

    /// Configuration changes are only accepted while no gesture is active
    #[error("Cannot reconfigure while a gesture is in progress")]
    Busy,

    /// Invalid geometry or color value
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failed to parse a TOML configuration
    #[error("Failed to parse swipe config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to read a configuration file
    #[error("Failed to read swipe config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for widget configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
