//! Headless scenarios for swipe interactions.
//!
//! A scenario is a JSON document describing the widget size, its
//! configuration and a list of steps. Touch steps feed the widget, frame
//! steps advance its animation on a [`HeadlessClock`], and assertion steps
//! check the outcome. Failures are collected into the report rather than
//! aborting, so one run shows every broken expectation.
//!
//! ```json
//! {
//!   "config": { "left_action": { "name": "delete" } },
//!   "steps": [
//!     { "type": "touch_start", "x": 0, "y": 0, "t": 0 },
//!     { "type": "touch_move", "x": -150, "y": 0 },
//!     { "type": "touch_end", "x": -150, "y": 0, "t": 100 },
//!     { "type": "settle" },
//!     { "type": "assert_translate", "value": -300 },
//!     { "type": "assert_actions", "names": ["delete"] }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::Deserialize;
use swipe_animation::{FrameClock, FrameStatus, HeadlessClock};
use swipe_core::{Point, Size};

use crate::config::SwipeConfig;
use crate::swipeable::Swipeable;

/// Upper bound on frames a `settle` step may consume
pub const SETTLE_FRAME_LIMIT: u32 = 10_000;

/// Tolerance for `assert_translate`
const TRANSLATE_EPSILON: f32 = 1e-3;

/// Sequence of headless swipe steps.
#[derive(Debug, Clone, Deserialize)]
pub struct SwipeScenario {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default)]
    pub config: SwipeConfig,
    pub steps: Vec<ScenarioStep>,
}

fn default_width() -> f32 {
    300.0
}

fn default_height() -> f32 {
    60.0
}

impl SwipeScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// One scenario step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    TouchStart {
        x: f32,
        y: f32,
        #[serde(default)]
        t: f64,
    },
    TouchMove {
        x: f32,
        y: f32,
    },
    TouchEnd {
        x: f32,
        y: f32,
        #[serde(default)]
        t: f64,
    },
    TouchCancel,
    /// Advance at most `count` animation frames
    Frames {
        count: u32,
    },
    /// Run the animation until it stops
    Settle,
    Unmount,
    AssertTranslate {
        value: f32,
    },
    AssertPhase {
        phase: String,
    },
    AssertActions {
        names: Vec<String>,
    },
}

/// Final state and collected failures of a scenario run.
#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    pub frames: u64,
    pub translate_x: f32,
    pub actions: Vec<String>,
    pub failures: Vec<String>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse and execute scenario JSON.
pub fn run_scenario(input: &str) -> Result<ScenarioReport> {
    let scenario = SwipeScenario::from_json(input)?;
    run_loaded_scenario(&scenario)
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(scenario: &SwipeScenario) -> Result<ScenarioReport> {
    let mut widget = Swipeable::new(scenario.config.clone(), ())
        .context("invalid scenario config")?;
    widget
        .mount(Size::new(scenario.width, scenario.height))
        .context("invalid scenario size")?;

    let actions = Arc::new(Mutex::new(Vec::new()));
    let sink = actions.clone();
    widget.on_action(move |event| {
        if let (Some(name), Ok(mut names)) = (event.action_name(), sink.lock()) {
            names.push(name.to_string());
        }
    });

    let mut clock = HeadlessClock::new();
    let mut failures = Vec::new();

    for (index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::TouchStart { x, y, t } => {
                widget.touch_start(Point::new(*x, *y), *t);
            }
            ScenarioStep::TouchMove { x, y } => {
                widget.touch_move(Point::new(*x, *y));
            }
            ScenarioStep::TouchEnd { x, y, t } => {
                widget.touch_end(Point::new(*x, *y), *t);
            }
            ScenarioStep::TouchCancel => {
                widget.touch_cancel();
            }
            ScenarioStep::Frames { count } => {
                for _ in 0..*count {
                    if !widget.needs_frame() || !clock.next_frame() {
                        break;
                    }
                    widget.step_frame();
                }
            }
            ScenarioStep::Settle => {
                let mut frames = 0;
                while widget.needs_frame() && clock.next_frame() {
                    frames += 1;
                    if widget.step_frame() == FrameStatus::Done {
                        break;
                    }
                    if frames >= SETTLE_FRAME_LIMIT {
                        failures.push(format!("step {index}: animation did not settle"));
                        break;
                    }
                }
            }
            ScenarioStep::Unmount => widget.unmount(),
            ScenarioStep::AssertTranslate { value } => {
                let actual = widget.transform().translate_x;
                if (actual - value).abs() > TRANSLATE_EPSILON {
                    failures.push(format!(
                        "step {index}: expected translate_x {value}, got {actual}"
                    ));
                }
            }
            ScenarioStep::AssertPhase { phase } => {
                let actual = widget.phase().name();
                if actual != phase.as_str() {
                    failures.push(format!(
                        "step {index}: expected phase {phase}, got {actual}"
                    ));
                }
            }
            ScenarioStep::AssertActions { names } => {
                let seen = actions.lock().map(|names| names.to_vec()).unwrap_or_default();
                if &seen != names {
                    failures.push(format!(
                        "step {index}: expected actions {names:?}, got {seen:?}"
                    ));
                }
            }
        }
    }

    let actions = actions.lock().map(|names| names.to_vec()).unwrap_or_default();
    for failure in &failures {
        tracing::warn!(%failure, "scenario expectation failed");
    }

    Ok(ScenarioReport {
        frames: clock.frames(),
        translate_x: widget.transform().translate_x,
        actions,
        failures,
    })
}
