//! Core error types

use thiserror::Error;

/// Errors raised while building core values from host input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A color string could not be parsed
    #[error("Invalid color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// A size with negative or non-finite components
    #[error("Invalid size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
