//! Drives pixel steppers through the frame loop the way a widget does

use swipe_animation::{CancelToken, FrameLoop, FrameStatus, HeadlessClock, LoopOutcome, PixelStepper};

#[test]
fn commit_animation_covers_distance_in_duration() {
    let mut clock = HeadlessClock::new();
    let mut stepper = PixelStepper::new(-150.0, -300.0, 200.0);
    let mut trail = Vec::new();

    let outcome = FrameLoop::new(&mut clock, CancelToken::new()).run(|| {
        let step = stepper.tick();
        trail.push(step.value());
        if step.is_finished() {
            FrameStatus::Done
        } else {
            FrameStatus::Continue
        }
    });

    assert!(outcome.is_completed());
    // 200ms at 60fps
    assert_eq!(outcome.frames(), 12);
    assert_eq!(trail.last().copied(), Some(-300.0));
    assert!(trail.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn reset_animation_stops_when_cancelled_mid_flight() {
    let mut clock = HeadlessClock::new();
    let token = CancelToken::new();
    let teardown = token.clone();
    let mut stepper = PixelStepper::new(-80.0, 0.0, 200.0);

    let outcome = FrameLoop::new(&mut clock, token).run(|| {
        let step = stepper.tick();
        if step.value() > -40.0 {
            teardown.cancel();
        }
        if step.is_finished() {
            FrameStatus::Done
        } else {
            FrameStatus::Continue
        }
    });

    assert!(matches!(outcome, LoopOutcome::Cancelled { .. }));
    assert!(stepper.value() < 0.0);
}
