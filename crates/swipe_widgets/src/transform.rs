//! Transform application
//!
//! Turns a signed horizontal offset into the transforms of the widget's
//! elements: the content slides, each placeholder strip slides and widens,
//! and each placeholder label narrows again so its text keeps its shape.

use swipe_core::Transform;

/// Travel (px) after which the placeholder strip starts widening
pub const SCALE_BASE_PX: f32 = 100.0;

/// Values derived from one applied offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub translate_x: f32,
    /// Placeholder strip scale, always `>= 1`
    pub scale_x: f32,
    /// Placeholder label scale, always in `[0, 1]`
    pub text_scale_x: f32,
}

impl TransformState {
    pub const REST: TransformState = TransformState {
        translate_x: 0.0,
        scale_x: 1.0,
        text_scale_x: 1.0,
    };

    /// Derive scales for an already clamped translation
    pub fn from_translate(translate_x: f32) -> Self {
        Self {
            translate_x,
            scale_x: strip_scale(translate_x),
            text_scale_x: label_scale(translate_x),
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::REST
    }
}

/// `max(1, |translate_x| / 100)`
pub fn strip_scale(translate_x: f32) -> f32 {
    (translate_x.abs() / SCALE_BASE_PX).max(1.0)
}

/// `min(1, 100 / |translate_x|)`, 1 at rest
pub fn label_scale(translate_x: f32) -> f32 {
    let travel = translate_x.abs();
    if travel == 0.0 || !travel.is_finite() {
        return 1.0;
    }
    (SCALE_BASE_PX / travel).clamp(0.0, 1.0)
}

/// Allowed translation interval
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetRange {
    pub min: f32,
    pub max: f32,
}

impl OffsetRange {
    /// `[-width, width]`, collapsed to 0 on sides without an action
    pub fn new(width: f32, left_enabled: bool, right_enabled: bool) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        Self {
            min: if left_enabled { -width } else { 0.0 },
            max: if right_enabled { width } else { 0.0 },
        }
    }

    /// Clamp an offset; non-finite input resolves to rest
    pub fn clamp(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(self.min, self.max)
    }
}

/// Transform handles of one placeholder
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaceholderElement {
    /// Colored strip behind the content
    pub strip: Transform,
    /// Caption and icon block inside the strip
    pub label: Transform,
}

/// Element handles owned by one widget instance
///
/// A side without an action has no placeholder element, so nothing is ever
/// written for it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeElements {
    pub content: Transform,
    pub left: Option<PlaceholderElement>,
    pub right: Option<PlaceholderElement>,
}

impl SwipeElements {
    pub fn new(has_left: bool, has_right: bool) -> Self {
        Self {
            content: Transform::IDENTITY,
            left: has_left.then(PlaceholderElement::default),
            right: has_right.then(PlaceholderElement::default),
        }
    }
}

/// Applies offsets to a widget's element handles
#[derive(Clone, Debug)]
pub struct TransformApplier {
    elements: SwipeElements,
    range: OffsetRange,
    state: TransformState,
}

impl TransformApplier {
    pub fn new(width: f32, has_left: bool, has_right: bool) -> Self {
        Self {
            elements: SwipeElements::new(has_left, has_right),
            range: OffsetRange::new(width, has_left, has_right),
            state: TransformState::REST,
        }
    }

    pub fn state(&self) -> TransformState {
        self.state
    }

    pub fn translate_x(&self) -> f32 {
        self.state.translate_x
    }

    pub fn elements(&self) -> &SwipeElements {
        &self.elements
    }

    pub fn range(&self) -> OffsetRange {
        self.range
    }

    /// Clamp `offset`, derive the scales and write every present element
    pub fn apply(&mut self, offset: f32) -> TransformState {
        let translate_x = self.range.clamp(offset);
        self.state = TransformState::from_translate(translate_x);

        let strip = Transform::translate_x(translate_x).then_scale_x(self.state.scale_x);
        let label = Transform::scale_x(self.state.text_scale_x);

        self.elements.content = Transform::translate_x(translate_x);
        for placeholder in [&mut self.elements.left, &mut self.elements.right]
            .into_iter()
            .flatten()
        {
            placeholder.strip = strip;
            placeholder.label = label;
        }

        self.state
    }

    /// New widget width; the current offset is re-clamped and re-applied
    pub fn set_width(&mut self, width: f32) {
        let left = self.elements.left.is_some();
        let right = self.elements.right.is_some();
        self.range = OffsetRange::new(width, left, right);
        self.apply(self.state.translate_x);
    }

    /// Recreate the placeholder handles after the actions changed
    pub fn rebuild(&mut self, width: f32, has_left: bool, has_right: bool) {
        let offset = self.state.translate_x;
        *self = Self::new(width, has_left, has_right);
        self.apply(offset);
    }
}
