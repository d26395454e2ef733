//! Swipeable container widget
//!
//! Wraps arbitrary host content. Swiping the content left or right past the
//! threshold reveals the action placeholder for that side; releasing either
//! commits (content slides fully out and the action fires) or snaps back.
//!
//! # Example
//!
//! ```rust
//! use swipe_animation::HeadlessClock;
//! use swipe_core::{Point, Size};
//! use swipe_widgets::{ActionSpec, SwipeConfig, Swipeable};
//!
//! let config = SwipeConfig::new().left_action(ActionSpec::new("delete", "Delete"));
//! let mut row = Swipeable::new(config, "Inbox item").unwrap();
//! row.mount(Size::new(300.0, 60.0)).unwrap();
//!
//! row.touch_start(Point::new(0.0, 0.0), 0.0);
//! row.touch_move(Point::new(-150.0, 0.0));
//! row.touch_end(Point::new(-150.0, 0.0), 100.0);
//!
//! row.run_animation(&mut HeadlessClock::new());
//! assert_eq!(row.transform().translate_x, -300.0);
//! ```

use swipe_animation::{CancelToken, FrameClock, FrameLoop, FrameStatus, LoopOutcome};
use swipe_core::events::{event_types, EventData, ListenerId};
use swipe_core::{Event, Point, Size};

use crate::config::{ActionSpec, SwipeConfig};
use crate::dispatch::ActionDispatcher;
use crate::error::{ConfigError, Result};
use crate::gesture::{Direction, GestureContext, GesturePhase, GestureTracker, Release};
use crate::theme::SwipeTheme;
use crate::transform::{SwipeElements, TransformApplier, TransformState};
use crate::view::{ContentView, PlaceholderView, SwipeableView};
use crate::widget::{Widget, WidgetId};

/// Touch input subscription held while the widget is mounted
///
/// Dropping it (unmount, or dropping the widget) cancels the token shared
/// with any running frame loop.
#[derive(Debug)]
pub struct InputSubscription {
    widget: WidgetId,
    cancel: CancelToken,
}

impl InputSubscription {
    fn acquire(widget: WidgetId) -> Self {
        tracing::debug!(widget = widget.raw(), "input subscription acquired");
        Self {
            widget,
            cancel: CancelToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
        tracing::debug!(widget = self.widget.raw(), "input subscription released");
    }
}

/// A container whose content can be swiped to trigger an action
pub struct Swipeable<C = ()> {
    id: WidgetId,
    config: SwipeConfig,
    size: Size,
    tracker: GestureTracker,
    applier: TransformApplier,
    dispatcher: ActionDispatcher,
    subscription: Option<InputSubscription>,
    content: C,
}

impl<C> Swipeable<C> {
    /// Create an unmounted swipeable around `content`
    pub fn new(config: SwipeConfig, content: C) -> Result<Self> {
        config.validate()?;
        let id = WidgetId::next();
        let applier = TransformApplier::new(
            0.0,
            config.allows(Direction::Left),
            config.allows(Direction::Right),
        );

        Ok(Self {
            id,
            config,
            size: Size::ZERO,
            tracker: GestureTracker::new(),
            applier,
            dispatcher: ActionDispatcher::new(id),
            subscription: None,
            content,
        })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn phase(&self) -> &GesturePhase {
        self.tracker.phase()
    }

    pub fn transform(&self) -> TransformState {
        self.applier.state()
    }

    pub fn elements(&self) -> &SwipeElements {
        self.applier.elements()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Attach to the host at `size` and start accepting touch input
    pub fn mount(&mut self, size: Size) -> Result<()> {
        self.resize(size)?;
        if self.subscription.is_none() {
            self.subscription = Some(InputSubscription::acquire(self.id));
            tracing::debug!(
                widget = self.id.raw(),
                width = size.width,
                height = size.height,
                "swipeable mounted"
            );
        }
        Ok(())
    }

    /// Detach from the host
    ///
    /// A running animation stops. Content that was only part-way open (no
    /// commit had completed) returns to rest; a finished commit stays out.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            drop(subscription);
            if !self.tracker.is_idle() {
                self.tracker.clear();
                self.applier.apply(0.0);
            }
            tracing::debug!(widget = self.id.raw(), "swipeable unmounted");
        }
    }

    /// Token a host can hand to teardown code to stop a running frame loop
    pub fn cancel_handle(&self) -> Option<CancelToken> {
        self.subscription.as_ref().map(InputSubscription::cancel_token)
    }

    /// Host layout changed. A running commit heads for the new edge.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        let size = Size::try_new(size.width, size.height)?;
        self.size = size;
        self.applier.set_width(size.width);
        self.tracker.retarget_commit(
            self.applier.translate_x(),
            size.width,
            self.config.animation_duration_ms,
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Listeners
    // ─────────────────────────────────────────────────────────────────────

    /// Listen for the `action` event fired by committed swipes
    pub fn on_action<F>(&mut self, handler: F) -> ListenerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.dispatcher.on_action(handler)
    }

    pub fn remove_action_listener(&mut self, id: ListenerId) -> bool {
        self.dispatcher.remove_listener(id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Touch input
    // ─────────────────────────────────────────────────────────────────────

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            size: self.size,
            threshold: self.config.threshold,
            velocity_threshold: self.config.velocity_threshold,
            duration_ms: self.config.animation_duration_ms,
            left_enabled: self.config.allows(Direction::Left),
            right_enabled: self.config.allows(Direction::Right),
        }
    }

    pub fn touch_start(&mut self, point: Point, time_ms: f64) -> bool {
        self.is_mounted() && self.tracker.touch_start(point, time_ms)
    }

    /// Returns the applied transform when the move moved the content
    pub fn touch_move(&mut self, point: Point) -> Option<TransformState> {
        if !self.is_mounted() {
            return None;
        }
        let ctx = self.gesture_context();
        let offset = self.tracker.touch_move(point, &ctx)?;
        Some(self.applier.apply(offset))
    }

    pub fn touch_end(&mut self, point: Point, time_ms: f64) -> Option<Release> {
        if !self.is_mounted() {
            return None;
        }
        let ctx = self.gesture_context();
        self.tracker
            .touch_end(point, time_ms, self.applier.translate_x(), &ctx)
    }

    pub fn touch_cancel(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let ctx = self.gesture_context();
        self.tracker.touch_cancel(self.applier.translate_x(), &ctx)
    }

    /// Slide committed content back into place
    pub fn restore(&mut self) -> bool {
        self.is_mounted()
            && self
                .tracker
                .restore(self.applier.translate_x(), self.config.animation_duration_ms)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────

    /// Whether the host should keep delivering frames
    pub fn needs_frame(&self) -> bool {
        self.is_mounted() && self.tracker.is_animating()
    }

    /// Advance the commit or reset animation by one frame
    pub fn step_frame(&mut self) -> FrameStatus {
        if !self.is_mounted() {
            return FrameStatus::Done;
        }
        let Some(update) = self.tracker.advance_frame() else {
            return FrameStatus::Done;
        };

        self.applier.apply(update.offset);
        if let Some(direction) = update.committed {
            self.dispatcher.dispatch(direction, &self.config);
        }

        if update.finished {
            FrameStatus::Done
        } else {
            FrameStatus::Continue
        }
    }

    /// Drive the running animation to completion on `clock`
    pub fn run_animation<K: FrameClock + ?Sized>(&mut self, clock: &mut K) -> Option<LoopOutcome> {
        if !self.needs_frame() {
            return None;
        }
        let cancel = self.cancel_handle()?;
        Some(FrameLoop::new(clock, cancel).run(|| self.step_frame()))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dynamic configuration
    // ─────────────────────────────────────────────────────────────────────

    fn reconfigure(&mut self, change: impl FnOnce(&mut SwipeConfig)) -> Result<()> {
        if !self.tracker.is_idle() {
            return Err(ConfigError::Busy);
        }
        let mut next = self.config.clone();
        change(&mut next);
        next.validate()?;

        self.config = next;
        self.applier.rebuild(
            self.size.width,
            self.config.allows(Direction::Left),
            self.config.allows(Direction::Right),
        );
        Ok(())
    }

    pub fn set_left_action(&mut self, action: Option<ActionSpec>) -> Result<()> {
        self.reconfigure(|config| config.left_action = action)
    }

    pub fn set_right_action(&mut self, action: Option<ActionSpec>) -> Result<()> {
        self.reconfigure(|config| config.right_action = action)
    }

    pub fn set_threshold(&mut self, px: f32) -> Result<()> {
        self.reconfigure(|config| config.threshold = px)
    }

    pub fn set_velocity_threshold(&mut self, px_per_ms: f32) -> Result<()> {
        self.reconfigure(|config| config.velocity_threshold = px_per_ms)
    }

    pub fn set_animation_duration(&mut self, ms: u32) -> Result<()> {
        self.reconfigure(|config| config.animation_duration_ms = ms)
    }

    /// Theme colors do not affect gestures and can change at any time
    pub fn set_theme(&mut self, theme: SwipeTheme) {
        self.config.theme = theme;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Current rendered structure
    pub fn render(&self) -> SwipeableView<'_, C> {
        let theme = &self.config.theme;
        let elements = self.applier.elements();

        let left = self
            .config
            .left_action
            .as_ref()
            .zip(elements.left)
            .map(|(action, element)| PlaceholderView {
                direction: Direction::Left,
                action,
                background: theme.left_background,
                text_color: theme.left_text,
                strip: element.strip,
                label: element.label,
            });
        let right = self
            .config
            .right_action
            .as_ref()
            .zip(elements.right)
            .map(|(action, element)| PlaceholderView {
                direction: Direction::Right,
                action,
                background: theme.right_background,
                text_color: theme.right_text,
                strip: element.strip,
                label: element.label,
            });

        SwipeableView {
            left,
            right,
            content: ContentView {
                child: &self.content,
                background: theme.content_background,
                transform: elements.content,
            },
        }
    }
}

impl<C> Widget for Swipeable<C> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, event: &Event) {
        let touch = event.primary_touch().map(|t| t.position());
        match (event.event_type, touch) {
            (event_types::TOUCH_START, Some(point)) => {
                self.touch_start(point, event.timestamp);
            }
            (event_types::TOUCH_MOVE, Some(point)) => {
                self.touch_move(point);
            }
            (event_types::TOUCH_END, Some(point)) => {
                self.touch_end(point, event.timestamp);
            }
            // Without a position the gesture cannot be judged; end it uncommitted
            (event_types::TOUCH_MOVE | event_types::TOUCH_END, None)
            | (event_types::TOUCH_CANCEL, _) => {
                self.touch_cancel();
            }
            (event_types::RESIZE, _) => {
                if let EventData::Resize { width, height } = event.data {
                    if let Err(err) = self.resize(Size::new(width, height)) {
                        tracing::warn!(%err, "ignored resize");
                    }
                }
            }
            (event_types::MOUNT, _) => {
                if let Err(err) = self.mount(self.size) {
                    tracing::warn!(%err, "mount failed");
                }
            }
            (event_types::UNMOUNT, _) => self.unmount(),
            _ => {}
        }
    }

    fn on_frame(&mut self) -> FrameStatus {
        self.step_frame()
    }
}

impl<C> std::fmt::Debug for Swipeable<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swipeable")
            .field("id", &self.id)
            .field("phase", &self.tracker.phase().name())
            .field("translate_x", &self.applier.translate_x())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
