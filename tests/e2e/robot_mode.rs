//! Robot-mode end-to-end tests.

use std::time::Duration;

use glowctl::error::NO_DEVICE_MESSAGE;
use serde_json::{Value, json};

use crate::common::cli::CliRunner;
use crate::common::fixtures::{FakeLitra, Reply};
use crate::common::init_test_logging;

#[test]
fn robot_quick_start_outputs_json() {
    init_test_logging();
    let result = CliRunner::new().run(&["--robot"]);
    result.assert_success();

    let json = result.json();
    assert_eq!(json["tool"], "glowctl");
    assert!(json.get("control").is_some());
    assert!(json.get("output_modes").is_some());
}

#[test]
fn robot_status_reports_device() {
    init_test_logging();
    let fake = FakeLitra::connected();
    let result = CliRunner::new().with_litra(fake.path_str()).run_robot(&["status"]);

    result
        .assert_success()
        .assert_json_field("/connected", &Value::Bool(true))
        .assert_json_field("/device/name", &json!("Litra Glow"))
        .assert_json_field("/device/serial", &json!("2231FE901234"))
        .assert_json_field("/device/is_on", &Value::Bool(true))
        .assert_json_field("/device/brightness", &json!(60))
        .assert_json_field("/device/temperature", &json!(4500));
}

#[test]
fn robot_status_without_device_lists_troubleshooting() {
    let fake = FakeLitra::builder()
        .devices(Reply::fail(1, "No devices found"))
        .install();
    let result = CliRunner::new().with_litra(fake.path_str()).run_robot(&["status"]);

    result
        .assert_exit_code(1)
        .assert_json_field("/connected", &Value::Bool(false))
        .assert_json_field("/error", &json!(NO_DEVICE_MESSAGE))
        .assert_json_array_len("/troubleshooting", 3);
}

#[test]
fn robot_status_with_bad_path_emits_failure_notification() {
    let result = CliRunner::new()
        .with_litra("/nonexistent/glowctl-test/litra")
        .run_robot(&["status"]);

    result
        .assert_exit_code(1)
        .assert_stderr_contains("Failed to get device status")
        .assert_json_field(
            "/error",
            &json!("Litra CLI not found or not executable at: /nonexistent/glowctl-test/litra"),
        );
}

#[test]
fn robot_toggle_outcome() {
    let fake = FakeLitra::connected();
    let result = CliRunner::new().with_litra(fake.path_str()).run_robot(&["toggle"]);

    result
        .assert_success()
        .assert_json_field("/success", &Value::Bool(true))
        .assert_json_field("/notification/style", &json!("success"))
        .assert_json_field("/notification/title", &json!("Light toggled"));
    assert_eq!(fake.invocations(), vec!["toggle --device-type glow"]);
}

#[test]
fn robot_temperature_failure_exits_nonzero() {
    let fake = FakeLitra::builder()
        .actions(Reply::fail(1, "No device found"))
        .install();
    let result = CliRunner::new()
        .with_litra(fake.path_str())
        .run_robot(&["temperature", "4000"]);

    result.assert_exit_code(1);
    assert!(result.stderr.contains(NO_DEVICE_MESSAGE), "{}", result.stderr);
}

#[test]
fn robot_brightness_presets_mark_current() {
    let fake = FakeLitra::connected();
    let result = CliRunner::new().with_litra(fake.path_str()).run_robot(&["brightness"]);

    result
        .assert_success()
        .assert_json_field("/kind", &json!("brightness"))
        .assert_json_field("/current", &json!(60))
        .assert_json_array_len("/presets", 10)
        .assert_json_field("/presets/5/current", &Value::Bool(true))
        .assert_json_field("/presets/5/title", &json!("60% - Medium High"))
        .assert_json_field("/presets/4/current", &Value::Bool(false));
    assert_eq!(fake.invocations(), vec!["devices --json"]);
}

#[test]
fn robot_temperature_presets_without_device() {
    let fake = FakeLitra::builder().devices(Reply::ok("[]")).install();
    let result = CliRunner::new().with_litra(fake.path_str()).run_robot(&["temperature"]);

    result
        .assert_success()
        .assert_json_field("/current", &Value::Null)
        .assert_json_array_len("/presets", 39)
        .assert_json_field("/presets/0/value", &json!(2700));
}

#[test]
fn robot_check_reports_connection() {
    let fake = FakeLitra::connected();
    CliRunner::new()
        .with_litra(fake.path_str())
        .run_robot(&["check"])
        .assert_success()
        .assert_json_field("/connected", &Value::Bool(true));

    let absent = FakeLitra::builder().devices(Reply::ok("[]")).install();
    CliRunner::new()
        .with_litra(absent.path_str())
        .run_robot(&["check"])
        .assert_exit_code(1)
        .assert_json_field("/connected", &Value::Bool(false));
}

#[test]
fn robot_timeout_flag_bounds_hung_tool() {
    let fake = FakeLitra::builder().actions(Reply::hang(30)).install();
    let result = CliRunner::new()
        .with_litra(fake.path_str())
        .run_robot(&["--timeout", "1", "toggle"]);

    result
        .assert_exit_code(1)
        .assert_duration_under(Duration::from_secs(15));
    assert!(result.stderr.contains("within 1s"), "{}", result.stderr);
}

#[test]
fn robot_error_includes_suggestion() {
    let result = CliRunner::new().run_robot(&["--config", "/nonexistent/glowctl.toml", "status"]);

    result.assert_exit_code(1);
    let json = result.stderr_json();
    assert_eq!(json["error"], true);
    assert_eq!(json["recoverable"], true);
    assert!(json["suggestion"].is_string());
    assert!(
        json["message"]
            .as_str()
            .unwrap_or_default()
            .contains("/nonexistent/glowctl.toml")
    );
}

#[test]
fn compact_json_is_single_line() {
    let result = CliRunner::new().run(&["version", "--format", "json-compact"]);
    result.assert_success();
    assert_eq!(result.stdout.trim().lines().count(), 1);
    assert!(result.json()["version"].is_string());
}

#[test]
fn format_env_var_selects_json() {
    let result = CliRunner::new()
        .with_env("GLOWCTL_FORMAT", "json")
        .run(&["config", "--path", "--config", "/tmp/glowctl.toml"]);
    result
        .assert_success()
        .assert_json_field("/path", &json!("/tmp/glowctl.toml"));
}

#[test]
fn robot_config_shows_resolved_settings() {
    let fake = FakeLitra::connected();
    let result = CliRunner::new()
        .with_litra(fake.path_str())
        .run_robot(&["config", "--timeout", "5"]);

    result
        .assert_success()
        .assert_json_field("/settings/litra_path", &json!(fake.path_str()))
        .assert_json_field("/settings/litra_path_source", &json!("command_line"))
        .assert_json_field("/settings/timeout_secs", &json!(5))
        .assert_json_field("/executable", &Value::Bool(true));
}
