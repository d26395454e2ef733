//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};

use swipe_animation::FrameStatus;
use swipe_core::Event;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-wide unique ID
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an input or lifecycle event
    fn handle_event(&mut self, event: &Event);

    /// Advance animations by one display refresh
    fn on_frame(&mut self) -> FrameStatus;
}
