//! Swipe gesture tracking
//!
//! The tracker is a small explicit state machine:
//!
//! ```text
//! Idle --touch start--> Tracking --touch end--> Committing --done--> Idle
//!                                            \-> Resetting  --done--> Idle
//! ```
//!
//! While tracking, moves are ignored until the drag is clearly a horizontal
//! swipe past the threshold toward a side that has an action. From then on
//! every move reports the raw horizontal offset. Releasing either commits
//! (fast enough, or past half the width) or snaps back. Both animations are
//! fixed-step [`PixelStepper`]s advanced once per frame.

use swipe_animation::PixelStepper;
use swipe_core::{Point, Size};

/// Elapsed time floor used when computing release velocity
pub const MIN_ELAPSED_MS: f64 = 1.0;

/// Side a swipe heads toward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Content moves toward negative x
    Left,
    /// Content moves toward positive x
    Right,
}

impl Direction {
    /// `Left` for negative offsets, `Right` otherwise
    pub fn from_offset(offset: f32) -> Self {
        if offset < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Where and when the active touch sequence began
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchOrigin {
    pub point: Point,
    pub time_ms: f64,
}

/// Gesture state. Exactly one holds at any time.
#[derive(Clone, Debug, PartialEq)]
pub enum GesturePhase {
    Idle,
    Tracking {
        origin: TouchOrigin,
        /// Whether the swipe gate has opened and offsets are being applied
        transforming: bool,
    },
    Committing {
        direction: Direction,
        stepper: PixelStepper,
    },
    Resetting {
        direction: Direction,
        stepper: PixelStepper,
    },
}

impl GesturePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::Tracking { .. } => "tracking",
            GesturePhase::Committing { .. } => "committing",
            GesturePhase::Resetting { .. } => "resetting",
        }
    }
}

/// Inputs the tracker needs from the widget for each decision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureContext {
    /// Current widget size
    pub size: Size,
    pub threshold: f32,
    pub velocity_threshold: f32,
    pub duration_ms: u32,
    pub left_enabled: bool,
    pub right_enabled: bool,
}

impl GestureContext {
    pub fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left_enabled,
            Direction::Right => self.right_enabled,
        }
    }
}

/// What the tracker decided when the finger lifted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Commit,
    Reset,
}

/// Summary of a touch release that had an active transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub decision: ReleaseDecision,
    pub direction: Direction,
    /// Horizontal displacement from the touch origin
    pub diff_x: f32,
    /// Release speed in px/ms
    pub velocity: f32,
}

/// One animation frame's worth of output
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
    /// Offset to apply this frame
    pub offset: f32,
    /// The animation reached its target and the tracker is idle again
    pub finished: bool,
    /// Set on the final frame of a commit
    pub committed: Option<Direction>,
}

/// Touch gesture state machine for one swipeable widget
#[derive(Clone, Debug)]
pub struct GestureTracker {
    phase: GesturePhase,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::Committing { .. } | GesturePhase::Resetting { .. }
        )
    }

    /// Whether the current touch sequence is moving the content
    pub fn is_transforming(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::Tracking {
                transforming: true,
                ..
            }
        )
    }

    /// Begin tracking a touch
    ///
    /// Ignored while animating or while the content is already following a
    /// finger. A tracked touch that never opened the swipe is replaced, so a
    /// lost touch end cannot leave a stale origin behind.
    pub fn touch_start(&mut self, point: Point, time_ms: f64) -> bool {
        match self.phase {
            GesturePhase::Idle => {}
            GesturePhase::Tracking {
                transforming: false,
                ..
            } => tracing::debug!("stale touch origin replaced"),
            _ => {
                tracing::trace!(phase = self.phase.name(), "touch start ignored");
                return false;
            }
        }
        if !point.x.is_finite() || !point.y.is_finite() {
            return false;
        }

        self.phase = GesturePhase::Tracking {
            origin: TouchOrigin { point, time_ms },
            transforming: false,
        };
        tracing::debug!(x = point.x, y = point.y, time_ms, "swipe tracking started");
        true
    }

    /// Process a move, returning the horizontal offset to apply if any
    pub fn touch_move(&mut self, point: Point, ctx: &GestureContext) -> Option<f32> {
        let GesturePhase::Tracking {
            origin,
            transforming,
        } = &mut self.phase
        else {
            return None;
        };

        let (diff_x, diff_y) = point.delta_from(origin.point);
        if !diff_x.is_finite() || !diff_y.is_finite() {
            return None;
        }

        if !*transforming {
            if !Self::opens_swipe(diff_x, diff_y, ctx) {
                return None;
            }
            *transforming = true;
            tracing::debug!(
                diff_x,
                diff_y,
                direction = Direction::from_offset(diff_x).as_str(),
                "swipe transform started"
            );
        }

        Some(diff_x)
    }

    /// Gate for the first applied offset of a touch sequence
    pub fn opens_swipe(diff_x: f32, diff_y: f32, ctx: &GestureContext) -> bool {
        let horizontal = diff_y == 0.0 || diff_x.abs() / diff_y.abs() >= 1.0;
        horizontal
            && diff_y.abs() <= ctx.size.height
            && diff_x.abs() > ctx.threshold
            && ctx.allows(Direction::from_offset(diff_x))
    }

    /// Finish the touch sequence and choose between commit and reset
    ///
    /// `current_offset` is the offset last applied to the content; the
    /// animation starts from there.
    pub fn touch_end(
        &mut self,
        point: Point,
        time_ms: f64,
        current_offset: f32,
        ctx: &GestureContext,
    ) -> Option<Release> {
        let GesturePhase::Tracking {
            origin,
            transforming,
        } = self.phase
        else {
            return None;
        };

        if !transforming {
            self.phase = GesturePhase::Idle;
            tracing::trace!("touch ended without a swipe");
            return None;
        }

        let (mut diff_x, _) = point.delta_from(origin.point);
        if !diff_x.is_finite() {
            diff_x = current_offset;
        }
        let elapsed_ms = (time_ms - origin.time_ms).max(MIN_ELAPSED_MS);
        let velocity = (f64::from(diff_x.abs()) / elapsed_ms) as f32;
        let direction = Direction::from_offset(diff_x);

        let fast = velocity > ctx.velocity_threshold;
        let far = diff_x.abs() > ctx.size.width / 2.0;
        let decision = if (fast || far) && ctx.allows(direction) {
            ReleaseDecision::Commit
        } else {
            ReleaseDecision::Reset
        };

        let duration = ctx.duration_ms as f32;
        self.phase = match decision {
            ReleaseDecision::Commit => GesturePhase::Committing {
                direction,
                stepper: PixelStepper::new(
                    current_offset,
                    direction.sign() * ctx.size.width,
                    duration,
                ),
            },
            ReleaseDecision::Reset => GesturePhase::Resetting {
                direction,
                stepper: PixelStepper::new(current_offset, 0.0, duration),
            },
        };

        tracing::debug!(
            diff_x,
            velocity,
            elapsed_ms,
            direction = direction.as_str(),
            phase = self.phase.name(),
            "swipe released"
        );

        Some(Release {
            decision,
            direction,
            diff_x,
            velocity,
        })
    }

    /// Abort the touch sequence. An applied transform snaps back.
    pub fn touch_cancel(&mut self, current_offset: f32, ctx: &GestureContext) -> bool {
        let GesturePhase::Tracking { transforming, .. } = self.phase else {
            return false;
        };

        if transforming {
            self.start_reset(current_offset, ctx.duration_ms);
        } else {
            self.phase = GesturePhase::Idle;
        }
        tracing::debug!(phase = self.phase.name(), "swipe cancelled");
        true
    }

    /// Animate a resting offset back to zero, e.g. to undo a committed swipe
    pub fn restore(&mut self, current_offset: f32, duration_ms: u32) -> bool {
        if !self.is_idle() || current_offset == 0.0 || !current_offset.is_finite() {
            return false;
        }
        self.start_reset(current_offset, duration_ms);
        tracing::debug!(from = current_offset, "restoring swipe offset");
        true
    }

    fn start_reset(&mut self, current_offset: f32, duration_ms: u32) {
        self.phase = GesturePhase::Resetting {
            direction: Direction::from_offset(current_offset),
            stepper: PixelStepper::new(current_offset, 0.0, duration_ms as f32),
        };
    }

    /// Advance the running animation by one frame
    pub fn advance_frame(&mut self) -> Option<FrameUpdate> {
        let (step, committed) = match &mut self.phase {
            GesturePhase::Committing { direction, stepper } => (stepper.tick(), Some(*direction)),
            GesturePhase::Resetting { stepper, .. } => (stepper.tick(), None),
            _ => return None,
        };

        let finished = step.is_finished();
        tracing::trace!(offset = step.value(), finished, phase = self.phase.name(), "swipe frame");

        if finished {
            self.phase = GesturePhase::Idle;
        }

        Some(FrameUpdate {
            offset: step.value(),
            finished,
            committed: if finished { committed } else { None },
        })
    }

    /// Point a running commit at the edge of a widget now `width` wide
    ///
    /// The new stepper starts from `current_offset`, which the caller has
    /// already re-clamped to the new width.
    pub fn retarget_commit(&mut self, current_offset: f32, width: f32, duration_ms: u32) -> bool {
        let GesturePhase::Committing { direction, stepper } = &mut self.phase else {
            return false;
        };
        let target = direction.sign() * width;
        if stepper.target() == target {
            return false;
        }

        *stepper = PixelStepper::new(current_offset, target, duration_ms as f32);
        tracing::debug!(from = current_offset, target, "commit retargeted after resize");
        true
    }

    /// Drop any gesture or animation in progress
    pub fn clear(&mut self) {
        if !self.is_idle() {
            tracing::debug!(phase = self.phase.name(), "swipe state cleared");
        }
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> GestureContext {
        GestureContext {
            size: Size::new(300.0, 60.0),
            threshold: 10.0,
            velocity_threshold: 0.3,
            duration_ms: 200,
            left_enabled: true,
            right_enabled: true,
        }
    }

    fn tracking(tracker: &mut GestureTracker) {
        assert!(tracker.touch_start(Point::ZERO, 0.0));
    }

    #[test]
    fn test_move_below_threshold_is_ignored() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);

        assert_eq!(tracker.touch_move(Point::new(-10.0, 0.0), &ctx()), None);
        assert!(!tracker.is_transforming());

        assert_eq!(tracker.touch_move(Point::new(-11.0, 0.0), &ctx()), Some(-11.0));
        assert!(tracker.is_transforming());
    }

    #[test]
    fn test_vertical_drag_never_opens() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);

        // more vertical than horizontal
        assert_eq!(tracker.touch_move(Point::new(30.0, 31.0), &ctx()), None);
        // diagonal counts as horizontal, but taller than the widget
        assert_eq!(tracker.touch_move(Point::new(70.0, 61.0), &ctx()), None);
        // exact diagonal within the height
        assert_eq!(tracker.touch_move(Point::new(40.0, 40.0), &ctx()), Some(40.0));
    }

    #[test]
    fn test_once_open_moves_are_not_gated() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);

        assert_eq!(tracker.touch_move(Point::new(-50.0, 0.0), &ctx()), Some(-50.0));
        assert_eq!(tracker.touch_move(Point::new(-2.0, 200.0), &ctx()), Some(-2.0));
        assert_eq!(tracker.touch_move(Point::new(5.0, 0.0), &ctx()), Some(5.0));
    }

    #[test]
    fn test_disabled_side_never_opens() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        let ctx = GestureContext {
            right_enabled: false,
            ..ctx()
        };

        assert_eq!(tracker.touch_move(Point::new(120.0, 0.0), &ctx), None);
        assert_eq!(tracker.touch_move(Point::new(-120.0, 0.0), &ctx), Some(-120.0));
    }

    #[test]
    fn test_end_without_transform_is_noop() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.touch_end(Point::ZERO, 10.0, 0.0, &ctx()), None);

        tracking(&mut tracker);
        tracker.touch_move(Point::new(5.0, 0.0), &ctx());
        assert_eq!(tracker.touch_end(Point::new(5.0, 0.0), 10.0, 0.0, &ctx()), None);
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_fast_short_swipe_commits() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-40.0, 0.0), &ctx());

        // 40px in 50ms = 0.8 px/ms
        let release = tracker
            .touch_end(Point::new(-40.0, 0.0), 50.0, -40.0, &ctx())
            .unwrap();
        assert_eq!(release.decision, ReleaseDecision::Commit);
        assert_eq!(release.direction, Direction::Left);
        assert!(matches!(tracker.phase(), GesturePhase::Committing { .. }));
    }

    #[test]
    fn test_slow_far_swipe_commits() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(160.0, 0.0), &ctx());

        // 160px in 2s = 0.08 px/ms, but past half of 300
        let release = tracker
            .touch_end(Point::new(160.0, 0.0), 2000.0, 160.0, &ctx())
            .unwrap();
        assert_eq!(release.decision, ReleaseDecision::Commit);
        assert_eq!(release.direction, Direction::Right);
    }

    #[test]
    fn test_slow_short_swipe_resets() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-20.0, 0.0), &ctx());

        let release = tracker
            .touch_end(Point::new(-20.0, 0.0), 500.0, -20.0, &ctx())
            .unwrap();
        assert_eq!(release.decision, ReleaseDecision::Reset);
        assert!((release.velocity - 0.04).abs() < 1e-6);

        let mut last = None;
        while let Some(update) = tracker.advance_frame() {
            assert!(update.committed.is_none());
            last = Some(update);
        }
        assert_eq!(last.map(|u| u.offset), Some(0.0));
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_zero_elapsed_time_is_finite() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-20.0, 0.0), &ctx());

        let release = tracker
            .touch_end(Point::new(-20.0, 0.0), 0.0, -20.0, &ctx())
            .unwrap();
        assert!(release.velocity.is_finite());
        assert_eq!(release.velocity, 20.0);
    }

    #[test]
    fn test_commit_reports_direction_once_on_last_frame() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-150.0, 0.0), &ctx());
        tracker.touch_end(Point::new(-150.0, 0.0), 100.0, -150.0, &ctx());

        let updates: Vec<FrameUpdate> = std::iter::from_fn(|| tracker.advance_frame()).collect();
        let commits: Vec<_> = updates.iter().filter_map(|u| u.committed).collect();

        assert_eq!(commits, vec![Direction::Left]);
        assert_eq!(updates.last().map(|u| u.offset), Some(-300.0));
        assert!(updates.last().is_some_and(|u| u.finished));
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_touch_start_ignored_while_animating() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-20.0, 0.0), &ctx());
        tracker.touch_end(Point::new(-20.0, 0.0), 500.0, -20.0, &ctx());

        assert!(tracker.is_animating());
        assert!(!tracker.touch_start(Point::new(5.0, 5.0), 600.0));
        assert!(matches!(tracker.phase(), GesturePhase::Resetting { .. }));
    }

    #[test]
    fn test_touch_start_replaces_unopened_tracking() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        assert!(tracker.touch_start(Point::new(200.0, 0.0), 1_000.0));

        assert_eq!(
            tracker.touch_move(Point::new(100.0, 0.0), &ctx()),
            Some(-100.0)
        );
        let release = tracker
            .touch_end(Point::new(100.0, 0.0), 1_100.0, -100.0, &ctx())
            .unwrap();
        assert_eq!(release.direction, Direction::Left);
        assert_eq!(release.decision, ReleaseDecision::Commit);
    }

    #[test]
    fn test_touch_start_ignored_while_transforming() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-50.0, 0.0), &ctx());

        assert!(!tracker.touch_start(Point::new(200.0, 0.0), 50.0));
        assert!(tracker.is_transforming());
    }

    #[test]
    fn test_retarget_commit_follows_new_width() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-150.0, 0.0), &ctx());
        tracker.touch_end(Point::new(-150.0, 0.0), 100.0, -150.0, &ctx());
        tracker.advance_frame();

        assert!(tracker.retarget_commit(-162.5, 400.0, 200));
        assert!(!tracker.retarget_commit(-162.5, 400.0, 200));

        let updates: Vec<_> = std::iter::from_fn(|| tracker.advance_frame()).collect();
        let last = updates.last().unwrap();
        assert_eq!(last.offset, -400.0);
        assert_eq!(last.committed, Some(Direction::Left));
        assert!(updates[..updates.len() - 1].iter().all(|u| u.committed.is_none()));
    }

    #[test]
    fn test_retarget_ignored_unless_committing() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.retarget_commit(0.0, 400.0, 200));
        tracking(&mut tracker);
        assert!(!tracker.retarget_commit(0.0, 400.0, 200));
    }

    #[test]
    fn test_cancel_snaps_back() {
        let mut tracker = GestureTracker::new();
        tracking(&mut tracker);
        tracker.touch_move(Point::new(-200.0, 0.0), &ctx());

        assert!(tracker.touch_cancel(-200.0, &ctx()));
        assert!(matches!(tracker.phase(), GesturePhase::Resetting { .. }));

        let last = std::iter::from_fn(|| tracker.advance_frame()).last();
        assert_eq!(last.map(|u| (u.offset, u.committed)), Some((0.0, None)));
    }

    #[test]
    fn test_restore_only_from_idle_with_offset() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.restore(0.0, 200));
        assert!(tracker.restore(-300.0, 200));
        assert!(!tracker.restore(-300.0, 200));
        assert_eq!(
            tracker.phase().name(),
            "resetting",
            "restore should animate back to zero"
        );
    }
}
