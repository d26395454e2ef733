//! Headless scenario fixtures
//!
//! Every `tests/scenarios/*.json` file is a self-checking swipe session.

use std::path::{Path, PathBuf};

use swipe_widgets::headless::{run_loaded_scenario, run_scenario, SwipeScenario};
use swipe_widgets::SwipeConfig;

fn scenario_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("scenarios")
}

fn run_fixture(name: &str) -> swipe_widgets::headless::ScenarioReport {
    let path = scenario_dir().join(name);
    let scenario = SwipeScenario::from_path(&path).unwrap();
    run_loaded_scenario(&scenario).unwrap()
}

#[test]
fn all_fixtures_pass() {
    let mut ran = 0;
    for entry in std::fs::read_dir(scenario_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let scenario = SwipeScenario::from_path(&path).unwrap();
        let report = run_loaded_scenario(&scenario).unwrap();
        assert!(report.passed(), "{}: {:?}", path.display(), report.failures);
        ran += 1;
    }
    assert!(ran >= 5);
}

#[test]
fn commit_left_fixture_reports_final_state() {
    let report = run_fixture("commit_left.json");
    assert_eq!(report.translate_x, -300.0);
    assert_eq!(report.actions, vec!["delete"]);
    // 150px over 200 * 0.06 frames = 12.5 px per frame
    assert_eq!(report.frames, 12);
}

#[test]
fn unmounted_widget_stops_consuming_frames() {
    let report = run_fixture("unmount_mid_commit.json");
    assert_eq!(report.frames, 2);
    assert!(report.actions.is_empty());
    // the commit never finished, so the content is back at rest
    assert_eq!(report.translate_x, 0.0);
}

#[test]
fn zero_duration_commits_on_first_frame() {
    let report = run_scenario(
        r#"{
            "config": { "animation_time": 0, "right_action": { "name": "archive" } },
            "steps": [
                { "type": "touch_start", "x": 0, "y": 0, "t": 0 },
                { "type": "touch_move", "x": 40, "y": 0 },
                { "type": "touch_end", "x": 40, "y": 0, "t": 10 },
                { "type": "frames", "count": 1 },
                { "type": "assert_translate", "value": 300 },
                { "type": "assert_phase", "phase": "idle" },
                { "type": "assert_actions", "names": ["archive"] }
            ]
        }"#,
    )
    .unwrap();
    assert!(report.passed(), "{:?}", report.failures);
}

#[test]
fn scenario_config_matches_toml_config() {
    let scenario = SwipeScenario::from_json(
        r#"{
            "config": { "threshold": 16, "velocity": 0.5, "animation_time": 300 },
            "steps": []
        }"#,
    )
    .unwrap();

    let toml = SwipeConfig::from_toml_str(
        r#"
        threshold = 16
        velocity = 0.5
        animation_time = 300
        "#,
    )
    .unwrap();

    assert_eq!(scenario.config.threshold, toml.threshold);
    assert_eq!(scenario.config.velocity_threshold, toml.velocity_threshold);
    assert_eq!(scenario.config.animation_duration_ms, toml.animation_duration_ms);
    assert_eq!(scenario.width, 300.0);
}

#[test]
fn missing_fixture_is_an_error() {
    let result = SwipeScenario::from_path(&scenario_dir().join("does_not_exist.json"));
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.json"));
}
