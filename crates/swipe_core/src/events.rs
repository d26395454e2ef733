//! Event dispatch system
//!
//! Touch input flows in from the host as [`Event`]s carrying
//! [`EventData::Touch`]; the widget answers with `action` events delivered
//! through an [`EventDispatcher`] to whoever registered for them.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Event types understood by the swipe widgets
pub mod event_types {
    use super::EventType;

    pub const TOUCH_START: EventType = 1;
    pub const TOUCH_MOVE: EventType = 2;
    pub const TOUCH_END: EventType = 3;
    /// Touch sequence interrupted by the host (e.g. system gesture)
    pub const TOUCH_CANCEL: EventType = 4;
    pub const RESIZE: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;

    /// A swipe committed and its action fired
    pub const ACTION: EventType = 100;
}

/// One entry of a touch event's changed-touches list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Pointer identifier assigned by the host
    pub id: i32,
    pub client_x: f32,
    pub client_y: f32,
}

impl TouchPoint {
    pub fn new(id: i32, client_x: f32, client_y: f32) -> Self {
        Self {
            id,
            client_x,
            client_y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    /// Milliseconds on the host's monotonic clock
    pub timestamp: f64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Touch {
        changed_touches: SmallVec<[TouchPoint; 2]>,
    },
    Action {
        name: String,
    },
    Resize {
        width: f32,
        height: f32,
    },
    None,
}

impl Event {
    /// Build a touch event from the host's changed touches
    pub fn touch(
        event_type: EventType,
        target: u64,
        changed_touches: impl IntoIterator<Item = TouchPoint>,
        timestamp: f64,
    ) -> Self {
        Self {
            event_type,
            target,
            data: EventData::Touch {
                changed_touches: changed_touches.into_iter().collect(),
            },
            timestamp,
            propagation_stopped: false,
        }
    }

    /// Build a single-finger touch event at `(x, y)`
    pub fn single_touch(event_type: EventType, target: u64, x: f32, y: f32, timestamp: f64) -> Self {
        Self::touch(event_type, target, [TouchPoint::new(0, x, y)], timestamp)
    }

    /// Build the `action` notification for a committed swipe
    pub fn action(target: u64, name: impl Into<String>) -> Self {
        Self {
            event_type: event_types::ACTION,
            target,
            data: EventData::Action { name: name.into() },
            timestamp: 0.0,
            propagation_stopped: false,
        }
    }

    pub fn resize(target: u64, width: f32, height: f32) -> Self {
        Self {
            event_type: event_types::RESIZE,
            target,
            data: EventData::Resize { width, height },
            timestamp: 0.0,
            propagation_stopped: false,
        }
    }

    /// First changed touch, the only one single-touch widgets look at
    pub fn primary_touch(&self) -> Option<&TouchPoint> {
        match &self.data {
            EventData::Touch { changed_touches } => changed_touches.first(),
            _ => None,
        }
    }

    pub fn action_name(&self) -> Option<&str> {
        match &self.data {
            EventData::Action { name } => Some(name),
            _ => None,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

new_key_type! {
    /// Handle returned when registering a listener, used to remove it again
    pub struct ListenerId;
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: SlotMap<ListenerId, EventHandler>,
    routes: FxHashMap<(u64, EventType), SmallVec<[ListenerId; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            routes: FxHashMap::default(),
        }
    }

    /// Register an event handler for a widget and event type
    pub fn register<F>(&mut self, widget_id: u64, event_type: EventType, handler: F) -> ListenerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let id = self.handlers.insert(Box::new(handler));
        self.routes
            .entry((widget_id, event_type))
            .or_default()
            .push(id);
        id
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        if self.handlers.remove(id).is_none() {
            return false;
        }
        self.routes.retain(|_, ids| {
            ids.retain(|listener| *listener != id);
            !ids.is_empty()
        });
        true
    }

    /// Dispatch an event to all registered handlers, returning how many ran
    pub fn dispatch(&self, event: &mut Event) -> usize {
        let mut delivered = 0;
        if let Some(ids) = self.routes.get(&(event.target, event.event_type)) {
            for id in ids {
                if event.propagation_stopped {
                    break;
                }
                if let Some(handler) = self.handlers.get(*id) {
                    handler(event);
                    delivered += 1;
                }
            }
        }
        tracing::trace!(
            event_type = event.event_type,
            target = event.target,
            delivered,
            "dispatched event"
        );
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.handlers.len())
            .finish()
    }
}
