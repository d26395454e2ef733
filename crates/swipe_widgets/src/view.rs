//! Rendered structure of a swipeable
//!
//! Placeholders come first so they paint underneath; the content region
//! paints last and wraps the host's child as-is.

use swipe_core::{Color, Transform};

use crate::config::ActionSpec;
use crate::gesture::Direction;

/// A colored action strip behind the content
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderView<'a> {
    pub direction: Direction,
    pub action: &'a ActionSpec,
    pub background: Color,
    pub text_color: Color,
    /// Applied to the strip
    pub strip: Transform,
    /// Applied to the caption and icon block
    pub label: Transform,
}

impl PlaceholderView<'_> {
    pub fn caption(&self) -> &str {
        &self.action.caption
    }

    pub fn icon(&self) -> Option<&str> {
        self.action.icon.as_deref()
    }
}

/// The sliding region holding the host's child
#[derive(Clone, Debug, PartialEq)]
pub struct ContentView<'a, C> {
    pub child: &'a C,
    pub background: Color,
    pub transform: Transform,
}

/// Full rendered structure of one swipeable
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeableView<'a, C> {
    pub left: Option<PlaceholderView<'a>>,
    pub right: Option<PlaceholderView<'a>>,
    pub content: ContentView<'a, C>,
}

impl<'a, C> SwipeableView<'a, C> {
    /// Placeholders in paint order
    pub fn placeholders(&self) -> impl Iterator<Item = &PlaceholderView<'a>> {
        self.left.iter().chain(self.right.iter())
    }
}
