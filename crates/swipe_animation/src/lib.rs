//! Swipe Animation System
//!
//! Frame-driven animations for swipe gestures.
//!
//! # Features
//!
//! - **Pixel Steppers**: move a value toward a target in fixed per-frame
//!   steps, sized so the whole distance takes a given duration at 60 fps
//! - **Frame Loops**: an explicit loop over the host's refresh primitive that
//!   yields once per frame and stops on completion or cancellation

pub mod frame;
pub mod stepper;

pub use frame::{CancelToken, FrameClock, FrameLoop, FrameStatus, HeadlessClock, LoopOutcome};
pub use stepper::{PixelStepper, Step, FRAMES_PER_MS};
