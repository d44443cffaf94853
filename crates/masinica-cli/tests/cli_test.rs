//! Tests that drive the masinica binary end to end

use chrono::{Duration, Local};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

struct Env {
    home: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            home: tempdir().unwrap(),
        }
    }

    fn data_dir(&self) -> std::path::PathBuf {
        self.home.path().join("data")
    }

    fn run(&self, args: &[&str]) -> Output {
        let config_home = self.home.path().join("config");
        Command::new(env!("CARGO_BIN_EXE_masinica"))
            .args(args)
            .arg("--data-dir")
            .arg(self.data_dir())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", &config_home)
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run masinica")
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.extend(["--format", "json"]);
        let output = self.run(&full);
        assert!(output.status.success(), "{}", stderr(&output));
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn days_from_today(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn test_duplicate_vehicle_is_rejected() {
    let env = Env::new();
    assert!(env.run(&["vehicle", "add", "X"]).status.success());

    let output = env.run(&["vehicle", "add", "X"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));

    assert_eq!(env.json(&["vehicle", "list"]), serde_json::json!(["X"]));
}

#[test]
fn test_event_lifecycle() {
    let env = Env::new();
    assert!(env.run(&["vehicle", "add", "B01ABC"]).status.success());
    let ten_days = days_from_today(10);
    assert!(env
        .run(&["event", "add", "B01ABC", "ITP", ten_days.as_str()])
        .status
        .success());

    let listed = env.json(&["event", "list", "B01ABC"]);
    assert_eq!(listed[0]["label"], "ITP");
    assert_eq!(listed[0]["remaining_days"], 10);
    assert_eq!(listed[0]["urgency"], "warning");

    let twenty_days = days_from_today(20);
    assert!(env
        .run(&["event", "update", "B01ABC", "ITP", twenty_days.as_str()])
        .status
        .success());
    let shown = env.json(&["event", "show", "B01ABC", "ITP"]);
    assert_eq!(shown["urgency"], "normal");

    assert!(Path::new(&env.data_dir().join("storage.json")).exists());
}

#[test]
fn test_unknown_label_is_rejected() {
    let env = Env::new();
    assert!(env.run(&["vehicle", "add", "X"]).status.success());
    let output = env.run(&["event", "add", "X", "OIL", "2030-01-01"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown event type"));
}

#[test]
fn test_open_redirects_to_parent() {
    let env = Env::new();
    assert!(env.run(&["vehicle", "add", "X"]).status.success());

    let output = env.run(&["open", "/vehicle/X/RCA", "--format", "json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("showing /vehicle/X"));
    let statuses: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(statuses, serde_json::json!([]));
}

#[test]
fn test_open_redirect_is_reported_once() {
    let env = Env::new();
    assert!(env.run(&["vehicle", "add", "X"]).status.success());

    let output = env.run(&["open", "/vehicle/X/RCA"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stderr(&output).matches("/vehicle/X/RCA").count(), 1);
}

#[test]
fn test_json_confirms_mutations() {
    let env = Env::new();
    assert_eq!(
        env.json(&["vehicle", "add", " X "]),
        serde_json::json!({ "plate": "X" })
    );
    assert_eq!(
        env.json(&["vehicle", "rename", "X", "Y"]),
        serde_json::json!({ "from": "X", "plate": "Y" })
    );

    let date = days_from_today(30);
    env.json(&["event", "add", "Y", "RCA", date.as_str()]);
    assert_eq!(
        env.json(&["event", "delete", "Y", "RCA"]),
        serde_json::json!({ "vehicle": "Y", "label": "RCA", "deleted": true })
    );
    assert_eq!(
        env.json(&["vehicle", "delete", " Y "]),
        serde_json::json!({ "plate": "Y", "deleted": true })
    );
    assert_eq!(env.json(&["vehicle", "list"]), serde_json::json!([]));
}

#[test]
fn test_upcoming_window_with_no_matches() {
    let env = Env::new();
    assert!(env.run(&["vehicle", "add", "X"]).status.success());
    let date = days_from_today(40);
    assert!(env
        .run(&["event", "add", "X", "RCA", date.as_str()])
        .status
        .success());

    let output = env.run(&["upcoming", "--within", "5"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No events expire within 5 days."));
    assert!(!stdout.contains("No events added yet."));
}
