//! Swipe Core
//!
//! Foundational primitives shared by the swipe widget crates:
//!
//! - **Geometry**: points, sizes, colors and the horizontal transforms the
//!   widget applies to its elements
//! - **Event Dispatch**: touch input events coming from the host and the
//!   `action` notification going out to listeners
//!
//! # Example
//!
//! ```rust
//! use swipe_core::events::{event_types, Event, EventDispatcher};
//! use std::sync::{Arc, Mutex};
//!
//! let mut dispatcher = EventDispatcher::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! dispatcher.register(7, event_types::ACTION, move |event| {
//!     if let Some(name) = event.action_name() {
//!         sink.lock().unwrap().push(name.to_string());
//!     }
//! });
//!
//! let mut event = Event::action(7, "delete");
//! dispatcher.dispatch(&mut event);
//! assert_eq!(*seen.lock().unwrap(), vec!["delete".to_string()]);
//! ```

pub mod error;
pub mod events;
pub mod geometry;

pub use error::{CoreError, Result};
pub use events::{Event, EventData, EventDispatcher, EventType, ListenerId, TouchPoint};
pub use geometry::{Color, Point, Size, Transform};
