//! Frame loop
//!
//! Animations advance once per display refresh. The host owns the refresh
//! primitive (vsync callback, timer, test harness) and exposes it as a
//! [`FrameClock`]; [`FrameLoop`] turns it into an explicit loop that yields
//! back to the clock between frames and stops as soon as its
//! [`CancelToken`] fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag checked before every frame
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Source of display refresh ticks
pub trait FrameClock {
    /// Wait for the next refresh. Returns false once the host stops
    /// producing frames.
    fn next_frame(&mut self) -> bool;

    /// Nominal time between frames
    fn frame_interval_ms(&self) -> f32 {
        1000.0 / 60.0
    }
}

/// Clock for tests and headless hosts: every frame is available immediately
#[derive(Clone, Debug, Default)]
pub struct HeadlessClock {
    frames: u64,
    limit: Option<u64>,
}

impl HeadlessClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop producing frames after `limit` ticks
    pub fn with_limit(limit: u64) -> Self {
        Self {
            frames: 0,
            limit: Some(limit),
        }
    }

    /// Number of frames handed out so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Elapsed time implied by the frames handed out so far
    pub fn elapsed_ms(&self) -> f64 {
        self.frames as f64 * f64::from(self.frame_interval_ms())
    }
}

impl FrameClock for HeadlessClock {
    fn next_frame(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.frames >= limit) {
            return false;
        }
        self.frames += 1;
        true
    }
}

/// What a frame callback wants next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Done,
}

/// How a frame loop ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The callback reported it was done
    Completed { frames: u32 },
    /// The cancel token fired before the callback finished
    Cancelled { frames: u32 },
    /// The clock stopped producing frames
    ClockStopped { frames: u32 },
}

impl LoopOutcome {
    pub fn frames(&self) -> u32 {
        match self {
            LoopOutcome::Completed { frames }
            | LoopOutcome::Cancelled { frames }
            | LoopOutcome::ClockStopped { frames } => *frames,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, LoopOutcome::Completed { .. })
    }
}

/// Explicit per-frame loop bound to a clock and a cancel token
pub struct FrameLoop<'a, C: FrameClock + ?Sized> {
    clock: &'a mut C,
    cancel: CancelToken,
}

impl<'a, C: FrameClock + ?Sized> FrameLoop<'a, C> {
    pub fn new(clock: &'a mut C, cancel: CancelToken) -> Self {
        Self { clock, cancel }
    }

    /// Run `frame` once per refresh until it reports [`FrameStatus::Done`]
    pub fn run<F>(self, mut frame: F) -> LoopOutcome
    where
        F: FnMut() -> FrameStatus,
    {
        let mut frames = 0u32;
        loop {
            if self.cancel.is_cancelled() {
                tracing::debug!(frames, "frame loop cancelled");
                return LoopOutcome::Cancelled { frames };
            }
            if !self.clock.next_frame() {
                tracing::debug!(frames, "frame clock stopped");
                return LoopOutcome::ClockStopped { frames };
            }
            // The clock yielded; teardown may have happened in between
            if self.cancel.is_cancelled() {
                tracing::debug!(frames, "frame loop cancelled");
                return LoopOutcome::Cancelled { frames };
            }

            frames = frames.saturating_add(1);
            if frame() == FrameStatus::Done {
                return LoopOutcome::Completed { frames };
            }
        }
    }
}
