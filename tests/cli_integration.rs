use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const LOG: &str = r#"{"timestamp":"2025-03-01T09:00:00Z","reported_status":"On Task","session_goal":"Write report","notes":"stuck on a bug"}
{"timestamp":"2025-03-01T09:30:00Z","reported_status":"Email"}
{"timestamp":"2025-03-01T14:00:00Z","reported_status":"Short Break","session_goal":"Write report"}
{"timestamp":"2025-03-02T10:15:00Z","reported_status":"On Task","session_goal":"Review","notes":"Good Progress today"}
"#;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Run the binary with HOME pointed at `home` so no user config leaks in
fn run_focusstats(
    home: &Path,
    args: &[&str],
    envs: &[(&str, &Path)],
) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_focusstats").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("focusstats.exe");
        } else {
            path.push("focusstats");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("FOCUS_TIME_LOG")
        .env_remove("RUST_LOG");
    for (k, v) in envs {
        cmd.env(k, v);
    }
    let output = cmd.output().expect("run focusstats");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn log_in(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("focus_log.jsonl");
    write_file(&path, content);
    path
}

#[test]
fn report_prints_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, stderr) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--no-charts"],
        &[],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("FOCUS TIME - DATA ANALYSIS"));
    assert!(stdout.contains("Total Check-ins: 4"));
    assert!(stdout.contains("Date Range: 2025-03-01 to 2025-03-02"));
    assert!(stdout.contains("Days Tracked: 2"));
    assert!(stdout.contains("On-Task Rate: 50.0%"));
    assert!(stdout.contains("Distraction Rate: 25.0%"));
    assert!(stdout.contains("Break Rate: 25.0%"));
    assert!(stdout.contains("09:00 |      2    |  50.0%"));
    assert!(stdout.contains("1. Write report\n   Check-ins: 2, On-Task: 50.0%"));
    assert!(stdout.contains("Skipping visualizations"));
    assert!(stdout.contains("Analysis complete!"));
    assert!(stderr.contains("Loading data from:"));
}

#[test]
fn empty_log_reports_no_checkins() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), "\n\n");

    let (ok, stdout, _) = run_focusstats(dir.path(), &["--log", log.to_str().unwrap()], &[]);
    assert!(ok);
    assert!(stdout.contains("Total Check-ins: 0"));
    assert!(stdout.contains("No check-ins recorded yet!"));
    assert!(!stdout.contains("STATUS DISTRIBUTION"));
}

#[test]
fn missing_log_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.jsonl");

    let (ok, stdout, stderr) =
        run_focusstats(dir.path(), &["--log", missing.to_str().unwrap()], &[]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Log file not found at:"));
}

#[test]
fn directory_as_log_fails() {
    let dir = tempfile::tempdir().unwrap();

    let (ok, stdout, stderr) =
        run_focusstats(dir.path(), &["--log", dir.path().to_str().unwrap()], &[]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Log file not found at:"));
}

#[test]
fn json_search_applies_timezone() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--json", "--timezone", "Asia/Tokyo", "notes", "bug"],
        &[],
    );
    assert!(ok);
    let json: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["matches"][0]["timestamp"], "2025-03-01T18:00:00+09:00");
}

#[test]
fn malformed_lines_are_skipped_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("{LOG}not json\n{{\"timestamp\":\"yesterday\",\"reported_status\":\"On Task\"}}\n");
    let log = log_in(dir.path(), &content);

    let (ok, stdout, stderr) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--no-charts"],
        &[],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Total Check-ins: 4"));
    assert!(stderr.contains("Skipping invalid line 5"));
    assert!(stderr.contains("Skipping invalid line 6"));
}

#[test]
fn notes_search_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, stderr) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "notes", "BUG"],
        &[],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("ENTRIES WITH KEYWORDS: BUG"));
    assert!(stdout.contains("2025-03-01 09:00:00+00:00: On Task"));
    assert!(stdout.contains("  Goal: Write report"));
    assert!(stdout.contains("  Note: stuck on a bug"));
    assert!(!stdout.contains("Good Progress today"));
}

#[test]
fn notes_defaults_to_progress_and_stuck() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) =
        run_focusstats(dir.path(), &["--log", log.to_str().unwrap(), "search"], &[]);
    assert!(ok);
    assert!(stdout.contains("ENTRIES WITH KEYWORDS: progress, stuck"));
    assert!(stdout.contains("stuck on a bug"));
    assert!(stdout.contains("Good Progress today"));
}

#[test]
fn notes_without_hits_says_so() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "notes", "zebra"],
        &[],
    );
    assert!(ok);
    assert!(stdout.contains("No matches found."));
}

#[test]
fn json_report_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, stderr) =
        run_focusstats(dir.path(), &["--log", log.to_str().unwrap(), "--json"], &[]);
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["total_checkins"], 4);
    assert_eq!(json["days_tracked"], 2);
    assert_eq!(json["focus_metrics"]["on_task_rate"], 50.0);
    assert_eq!(json["goals"][0]["goal"], "Write report");
}

#[test]
fn json_search_lists_all_matches() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--json", "notes", "progress"],
        &[],
    );
    assert!(ok);
    let json: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["match_count"], 1);
    assert_eq!(json["matches"][0]["session_goal"], "Review");
}

#[test]
fn env_var_selects_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) = run_focusstats(
        dir.path(),
        &["--no-charts"],
        &[("FOCUS_TIME_LOG", log.as_path())],
    );
    assert!(ok);
    assert!(stdout.contains("Total Check-ins: 4"));
}

#[test]
fn timezone_shifts_hour_buckets() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--no-charts", "--timezone", "Asia/Tokyo"],
        &[],
    );
    assert!(ok);
    assert!(stdout.contains("18:00 |      2    |  50.0%"));
}

#[test]
fn invalid_timezone_fails() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, _, stderr) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--timezone", "Mars/Base"],
        &[],
    );
    assert!(!ok);
    assert!(stderr.contains("Invalid timezone: Mars/Base"));
}

#[test]
fn table_style_renders_boxes() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);

    let (ok, stdout, _) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--no-charts", "--style", "table", "--no-color"],
        &[],
    );
    assert!(ok);
    assert!(stdout.contains("Status Distribution"));
    assert!(stdout.contains("Write report"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn config_file_supplies_log_and_markers() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);
    let config = dir.path().join("focusstats.toml");
    write_file(
        &config,
        &format!(
            "log_path = {:?}\nno_charts = true\n\n[markers]\ndistraction = [\"Email\", \"Break\"]\n",
            log.to_str().unwrap()
        ),
    );

    let (ok, stdout, stderr) =
        run_focusstats(dir.path(), &["--config", config.to_str().unwrap()], &[]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Distraction Rate: 50.0%"));
    assert!(stdout.contains("Skipping visualizations"));
}

#[test]
fn broken_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    write_file(&config, "style = 42\n");

    let (ok, _, stderr) = run_focusstats(dir.path(), &["--config", config.to_str().unwrap()], &[]);
    assert!(!ok);
    assert!(stderr.contains("Failed to load config"));
}

#[cfg(feature = "charts")]
#[test]
fn chart_output_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let log = log_in(dir.path(), LOG);
    let chart = dir.path().join("charts.json");

    let (ok, stdout, stderr) = run_focusstats(
        dir.path(),
        &["--log", log.to_str().unwrap(), "--chart-output", chart.to_str().unwrap()],
        &[],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Visualization saved to:"));
    let json: Value = serde_json::from_str(&fs::read_to_string(&chart).unwrap()).unwrap();
    assert_eq!(json["status_distribution"].as_array().unwrap().len(), 3);
}
