//! Swipe Widget Library
//!
//! A swipeable container: drag its content sideways past a threshold to
//! reveal a colored action placeholder, release to either commit the action
//! or snap back.
//!
//! - [`gesture`]: touch tracking state machine and release decision
//! - [`transform`]: offsets to element transforms
//! - [`dispatch`]: the `action` notification
//! - [`swipeable`]: the widget tying them together
//! - [`headless`]: JSON-driven scenarios for tests and diagnostics

pub mod config;
pub mod dispatch;
pub mod error;
pub mod gesture;
pub mod headless;
pub mod swipeable;
pub mod theme;
pub mod transform;
pub mod view;
pub mod widget;

pub use config::{ActionSpec, SwipeConfig};
pub use dispatch::ActionDispatcher;
pub use error::{ConfigError, Result};
pub use gesture::{Direction, GesturePhase, GestureTracker, Release, ReleaseDecision};
pub use swipeable::{InputSubscription, Swipeable};
pub use theme::{SwipeColorToken, SwipeTheme};
pub use transform::{SwipeElements, TransformApplier, TransformState};
pub use view::SwipeableView;
pub use widget::{Widget, WidgetId};
