//! Fixed-step animations
//!
//! A [`PixelStepper`] advances a value toward its target by the same number
//! of pixels every frame. The step is chosen once, when the animation starts,
//! so that the full distance is covered in `duration_ms` at 60 fps.

/// Frames per millisecond at the assumed 60 Hz refresh rate
pub const FRAMES_PER_MS: f32 = 0.06;

/// Outcome of advancing a stepper by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Still travelling; carries the value for this frame
    Running(f32),
    /// Landed exactly on the target
    Finished(f32),
}

impl Step {
    pub fn value(&self) -> f32 {
        match self {
            Step::Running(v) | Step::Finished(v) => *v,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Step::Finished(_))
    }
}

/// Moves a value toward a target in equal per-frame increments
#[derive(Clone, Debug, PartialEq)]
pub struct PixelStepper {
    value: f32,
    target: f32,
    step: f32,
}

impl PixelStepper {
    /// Create a stepper from `from` to `to` lasting `duration_ms`
    ///
    /// A zero (or non-finite) duration lands on the target on the first frame.
    pub fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            value: from,
            target: to,
            step: Self::pixel_per_frame(to - from, duration_ms),
        }
    }

    /// Per-frame step: `|distance| / (duration_ms * 0.06)`
    pub fn pixel_per_frame(distance: f32, duration_ms: f32) -> f32 {
        let distance = distance.abs();
        let frames = duration_ms * FRAMES_PER_MS;
        if !distance.is_finite() {
            0.0
        } else if frames.is_finite() && frames > 0.0 {
            distance / frames
        } else {
            distance
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn step_size(&self) -> f32 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.value == self.target
    }

    /// Advance one frame, clamping so the value never passes the target
    pub fn tick(&mut self) -> Step {
        if self.is_finished() {
            return Step::Finished(self.value);
        }

        let next = if self.target > self.value {
            (self.value + self.step).min(self.target)
        } else {
            (self.value - self.step).max(self.target)
        };

        // A step below the float resolution at this magnitude would stall
        self.value = if next == self.value { self.target } else { next };

        if self.is_finished() {
            Step::Finished(self.value)
        } else {
            Step::Running(self.value)
        }
    }
}
