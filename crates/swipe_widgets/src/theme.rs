//! Styling hooks for the swipeable widget
//!
//! Five colors, passed straight through to the rendered structure. Nothing
//! in the gesture logic reads them.

use serde::{Deserialize, Serialize};
use swipe_core::Color;

/// Color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SwipeColorToken {
    LeftPlaceholderText,
    RightPlaceholderText,
    LeftPlaceholderBackground,
    RightPlaceholderBackground,
    ContentBackground,
}

impl SwipeColorToken {
    pub fn all() -> [SwipeColorToken; 5] {
        [
            SwipeColorToken::LeftPlaceholderText,
            SwipeColorToken::RightPlaceholderText,
            SwipeColorToken::LeftPlaceholderBackground,
            SwipeColorToken::RightPlaceholderBackground,
            SwipeColorToken::ContentBackground,
        ]
    }
}

/// Theme colors for one swipeable instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeTheme {
    #[serde(with = "hex_color")]
    pub left_text: Color,
    #[serde(with = "hex_color")]
    pub right_text: Color,
    #[serde(with = "hex_color")]
    pub left_background: Color,
    #[serde(with = "hex_color")]
    pub right_background: Color,
    #[serde(with = "hex_color")]
    pub content_background: Color,
}

impl Default for SwipeTheme {
    fn default() -> Self {
        Self {
            left_text: Color::WHITE,
            right_text: Color::WHITE,
            // red-500 / green-500
            left_background: Color::from_hex(0xEF4444),
            right_background: Color::from_hex(0x22C55E),
            content_background: Color::WHITE,
        }
    }
}

impl SwipeTheme {
    pub fn get(&self, token: SwipeColorToken) -> Color {
        match token {
            SwipeColorToken::LeftPlaceholderText => self.left_text,
            SwipeColorToken::RightPlaceholderText => self.right_text,
            SwipeColorToken::LeftPlaceholderBackground => self.left_background,
            SwipeColorToken::RightPlaceholderBackground => self.right_background,
            SwipeColorToken::ContentBackground => self.content_background,
        }
    }

    pub fn set(&mut self, token: SwipeColorToken, color: Color) {
        let slot = match token {
            SwipeColorToken::LeftPlaceholderText => &mut self.left_text,
            SwipeColorToken::RightPlaceholderText => &mut self.right_text,
            SwipeColorToken::LeftPlaceholderBackground => &mut self.left_background,
            SwipeColorToken::RightPlaceholderBackground => &mut self.right_background,
            SwipeColorToken::ContentBackground => &mut self.content_background,
        };
        *slot = color;
    }

    /// Builder-style override of a single token
    pub fn with(mut self, token: SwipeColorToken, color: Color) -> Self {
        self.set(token, color);
        self
    }
}

/// Colors travel through config files as `#rrggbb` / `#rrggbbaa` strings
mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use swipe_core::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, g, b, a] = color.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        let hex = if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        };
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_round_trips_through_set_and_get() {
        let mut theme = SwipeTheme::default();
        for (i, token) in SwipeColorToken::all().into_iter().enumerate() {
            let color = Color::rgb(i as f32 / 10.0, 0.0, 0.0);
            theme.set(token, color);
            assert_eq!(theme.get(token), color);
        }
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme: SwipeTheme = toml::from_str("left_background = \"#000000\"").unwrap();
        assert_eq!(theme.left_background, Color::BLACK);
        assert_eq!(theme.right_background, SwipeTheme::default().right_background);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result: std::result::Result<SwipeTheme, _> =
            toml::from_str("content_background = \"white\"");
        assert!(result.is_err());
    }
}
