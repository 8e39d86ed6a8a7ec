//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a throwaway config file and verify
//! outputs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const SMALL_MODEL: &str = "[model]\nsamples = 300\ntrees = 6\ncorpus_seed = 1\n";

const REQUEST: &str = r#"{
    "mood": "tired",
    "tasks": [
        {"name": "Report", "duration": 30, "difficulty": 2, "urgency": 3, "type": "work"},
        {"name": "Laundry", "duration": 20, "difficulty": 1, "urgency": 2, "type": "chores"}
    ]
}"#;

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), SMALL_MODEL).unwrap();
        std::fs::write(dir.path().join("request.json"), REQUEST).unwrap();
        Self { dir }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(config: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_moodplan"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_plan_json() {
    let sandbox = Sandbox::new();
    let request = sandbox.file("request.json");
    let (stdout, stderr, code) = run_cli(&sandbox.config(), &["plan", request.to_str().unwrap(), "--json"]);
    assert_eq!(code, 0, "plan failed: {stderr}");

    let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let blocks = response["tasks"].as_array().unwrap();
    assert_eq!(blocks[0]["label"], "Laundry");
    assert_eq!(blocks[0]["start_minute"], 0);
    assert_eq!(blocks[0]["end_minute"], 20);
    assert_eq!(blocks[1]["label"], "Report");
    assert_eq!(blocks[1]["start_minute"], 20);
    assert_eq!(blocks[1]["end_minute"], 50);
    assert_eq!(response["mood_advice"], "Start low-effort tasks.");
}

#[test]
fn test_plan_mood_override_and_table() {
    let sandbox = Sandbox::new();
    let request = sandbox.file("request.json");
    let (stdout, stderr, code) = run_cli(
        &sandbox.config(),
        &["plan", request.to_str().unwrap(), "--mood", "overwhelmed", "--start", "08:00"],
    );
    assert_eq!(code, 0, "plan failed: {stderr}");
    assert!(stdout.contains("08:00-08:08  Calming Break"), "got: {stdout}");
    assert!(stdout.contains("Advice: Simplify your plan."));
}

#[test]
fn test_plan_from_stdin() {
    let sandbox = Sandbox::new();
    let mut child = Command::new(env!("CARGO_BIN_EXE_moodplan"))
        .arg("--config")
        .arg(sandbox.config())
        .args(["plan", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"tasks": [], "mood": "nonsense"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["tasks"].as_array().unwrap().len(), 0);
    assert_eq!(response["mood_advice"], "Balanced sequence.");
}

#[test]
fn test_plan_rejects_invalid_task() {
    let sandbox = Sandbox::new();
    let bad = sandbox.file("bad.json");
    std::fs::write(
        &bad,
        r#"{"mood": "ok", "tasks": [{"name": "x", "duration": 0, "difficulty": 2, "type": "work"}]}"#,
    )
    .unwrap();
    let (_, stderr, code) = run_cli(&sandbox.config(), &["plan", bad.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("non-positive duration"), "got: {stderr}");
}

#[test]
fn test_plan_rejects_duration_over_one_day() {
    let sandbox = Sandbox::new();
    let bad = sandbox.file("long.json");
    std::fs::write(
        &bad,
        r#"{"mood": "tired", "tasks": [
            {"name": "a", "duration": 3000000000, "difficulty": 2, "type": "work"},
            {"name": "b", "duration": 3000000000, "difficulty": 2, "type": "work"}
        ]}"#,
    )
    .unwrap();
    let (_, stderr, code) = run_cli(&sandbox.config(), &["plan", bad.to_str().unwrap()]);
    assert_eq!(code, 1, "got: {stderr}");
    assert!(stderr.contains("more than the 1440 minute limit"), "got: {stderr}");
}

#[test]
fn test_plan_rejects_missing_field() {
    let sandbox = Sandbox::new();
    let bad = sandbox.file("shape.json");
    std::fs::write(&bad, r#"{"tasks": [{"name": "x", "difficulty": 2, "type": "work"}]}"#).unwrap();
    let (_, stderr, code) = run_cli(&sandbox.config(), &["plan", bad.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_moods_json() {
    let sandbox = Sandbox::new();
    let (stdout, _, code) = run_cli(&sandbox.config(), &["moods", "--json"]);
    assert_eq!(code, 0);
    let moods: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let moods = moods.as_array().unwrap();
    assert_eq!(moods.len(), 7);
    assert_eq!(moods[0]["mood"], "tired");
    assert_eq!(moods[0]["base_break_interval"], 35);
}

#[test]
fn test_config_set_get_reset() {
    let sandbox = Sandbox::new();
    let config = sandbox.config();

    let (stdout, _, code) = run_cli(&config, &["config", "get", "model.trees"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "6");

    let (_, _, code) = run_cli(&config, &["config", "set", "timeline.break_minutes", "15"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&config, &["config", "get", "timeline.break_minutes"]);
    assert_eq!(stdout.trim(), "15");

    let (_, stderr, code) = run_cli(&config, &["config", "get", "model.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));

    let (_, _, code) = run_cli(&config, &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&config, &["config", "get", "model.trees"]);
    assert_eq!(stdout.trim(), "80");
}
