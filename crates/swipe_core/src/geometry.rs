//! Geometry and visual value types
//!
//! Only the pieces a horizontally swiping widget needs: points in client
//! space, element sizes, colors for the styling hooks, and the
//! translate/scale transform applied to rendered elements.

use std::fmt;

use crate::error::{CoreError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Points and Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// A position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`
    pub fn delta_from(&self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height of an element in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a size, rejecting negative or non-finite components
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(CoreError::InvalidSize { width, height })
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(input: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidColor(input.to_string());
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map(|v| v as f32 / 255.0);
        match digits.len() {
            3 => {
                let mut out = [0.0f32; 3];
                for (i, c) in digits.chars().enumerate() {
                    let doubled: String = [c, c].iter().collect();
                    out[i] = channel(&doubled).map_err(|_| invalid())?;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 | 8 => {
                let r = channel(&digits[0..2]).map_err(|_| invalid())?;
                let g = channel(&digits[2..4]).map_err(|_| invalid())?;
                let b = channel(&digits[4..6]).map_err(|_| invalid())?;
                let a = if digits.len() == 8 {
                    channel(&digits[6..8]).map_err(|_| invalid())?
                } else {
                    1.0
                };
                Ok(Self::rgba(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transform
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal transform: translate along x, then scale along x
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub scale_x: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        scale_x: 1.0,
    };

    pub const fn translate_x(x: f32) -> Self {
        Self {
            translate_x: x,
            scale_x: 1.0,
        }
    }

    pub const fn scale_x(scale: f32) -> Self {
        Self {
            translate_x: 0.0,
            scale_x: scale,
        }
    }

    /// Append a horizontal scale after the translation
    pub fn then_scale_x(mut self, scale: f32) -> Self {
        self.scale_x *= scale;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// CSS transform syntax, e.g. `translateX(-120px) scaleX(1.2)`
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.translate_x != 0.0, self.scale_x != 1.0) {
            (false, false) => f.write_str("none"),
            (true, false) => write!(f, "translateX({}px)", self.translate_x),
            (false, true) => write!(f, "scaleX({})", self.scale_x),
            (true, true) => write!(
                f,
                "translateX({}px) scaleX({})",
                self.translate_x, self.scale_x
            ),
        }
    }
}
