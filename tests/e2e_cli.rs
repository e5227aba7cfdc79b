//! E2E tests for the `wordmaster` binary.
//!
//! Run with:
//!   cargo test --test e2e_cli -- --nocapture

mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use common::{SAMPLE, init_logging};
use tracing::{debug, info};

fn wordmaster() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wordmaster"))
}

/// Run with `input` on stdin.
fn run_stdin(args: &[&str], input: &str) -> Output {
    let mut child = wordmaster()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn wordmaster");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for wordmaster");
    debug!(
        status = ?output.status,
        stderr = %String::from_utf8_lossy(&output.stderr),
        "wordmaster finished"
    );
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn run_json(args: &[&str], input: &str) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_stdin(&full, input);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).expect("Failed to parse JSON output")
}

#[test]
fn e2e_basic_stats_from_stdin() {
    init_logging();
    let output = run_stdin(&[], "The cat sat. The dog ran far away quickly today in the sun.");
    assert!(output.status.success());
    let out = stdout(&output);
    info!("{out}");
    assert!(out.contains("Words:          13"));
    assert!(out.contains("Sentences:      2"));
    assert!(out.contains("Reading time:   1m"));
}

#[test]
fn e2e_json_sample() {
    init_logging();
    let json = run_json(&[], SAMPLE);
    let stats = &json["stats"];
    assert_eq!(stats["wordCount"], 90);
    assert_eq!(stats["sentenceCount"], 6);
    assert_eq!(stats["paragraphCount"], 4);
    assert_eq!(stats["readabilityScore"], 90);
    assert!(json.get("text").is_none());
}

#[test]
fn e2e_file_argument() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.txt");
    let output = wordmaster()
        .args(["--json"])
        .arg(&path)
        .output()
        .expect("Failed to execute wordmaster");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["stats"]["wordCount"], 90);
}

#[test]
fn e2e_format_recomputes() {
    let json = run_json(&["--format"], "  hello   world.how are you  ");
    assert_eq!(json["text"], "Hello world. How are you");
    assert_eq!(json["stats"]["charsWithSpaces"], 24);
    assert_eq!(json["stats"]["sentenceCount"], 2);
}

#[test]
fn e2e_summarize() {
    let json = run_json(&["--summarize"], SAMPLE);
    assert_eq!(
        json["text"],
        "Welcome to WordMaster Pro. This tool helps you stay within limits and improve your writing."
    );
    assert_eq!(json["stats"]["sentenceCount"], 2);
}

#[test]
fn e2e_summarize_short_is_a_note() {
    let output = run_stdin(&["--summarize"], "Short. Text.");
    assert!(output.status.success());
    assert!(stderr(&output).contains("already short"));
    assert!(stdout(&output).contains("Short. Text."));
}

#[test]
fn e2e_grammar() {
    let json = run_json(&["--grammar"], "It was great!!!  Really.");
    assert_eq!(
        json["grammar"],
        serde_json::json!([
            "Remove double spaces",
            "Avoid multiple exclamation marks",
            "Consider using active voice"
        ])
    );

    let output = run_stdin(&["--grammar"], "ok");
    assert!(stdout(&output).contains("No major grammar issues found"));
}

#[test]
fn e2e_blank_text_is_not_summarized_or_checked() {
    let output = run_stdin(&["--summarize"], "  \n\n ");
    assert!(output.status.success());
    assert!(stderr(&output).contains("Note: no text"));
    assert!(!stderr(&output).contains("already short"));

    let output = run_stdin(&["--grammar"], " \t ");
    assert!(output.status.success());
    assert!(stderr(&output).contains("Note: no text"));
    assert!(!stdout(&output).contains("No major grammar issues found"));

    let json = run_json(&["--grammar"], "");
    assert!(json.get("grammar").is_none());
}

#[test]
fn e2e_invalid_goal_falls_back() {
    let output = run_stdin(&["--goal", "abc"], "one two three");
    assert!(output.status.success());
    assert!(stderr(&output).contains("invalid word goal"));
    assert!(stdout(&output).contains("3/1000 words"));
}

#[test]
fn e2e_goal_and_meters_json() {
    let json = run_json(&["--goal", "4", "--meters"], "one two three");
    assert_eq!(json["goal"]["goal"], 4);
    assert_eq!(json["goal"]["percent"], 75.0);
    let needed: Vec<_> = json["videoTargets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["needed"].as_u64().unwrap())
        .collect();
    assert_eq!(needed, vec![38, 75, 150]);
}

#[test]
fn e2e_platform_guidelines() {
    let output = run_stdin(&["--platform", "instagram"], "");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Instagram Guidelines"));
    assert!(out.contains("Bio: 150 characters"));
}

#[test]
fn e2e_report_flag() {
    let output = run_stdin(&["--report"], "Hello there.");
    let out = stdout(&output);
    assert!(out.starts_with("WORDMASTER PRO ANALYSIS\nGenerated: "));
    assert!(out.contains("Readability Score: 100/100"));
}

#[test]
fn e2e_export_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("out.txt");
    let save = dir.path().join("saved.json");

    let output = wordmaster()
        .arg("--export")
        .arg(&export)
        .arg("--save")
        .arg(&save)
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.txt"))
        .output()
        .expect("Failed to execute wordmaster");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let exported = std::fs::read_to_string(&export).unwrap();
    assert!(exported.starts_with("WORDMASTER PRO ANALYSIS"));
    assert!(exported.ends_with(SAMPLE));

    let saved = wordmaster::SavedText::load(&save).unwrap();
    assert_eq!(saved.word_count, 90);
    assert_eq!(saved.text, SAMPLE);
}

#[test]
fn e2e_save_blank_is_a_note() {
    let dir = tempfile::tempdir().unwrap();
    let save = dir.path().join("saved.json");
    let output = run_stdin(&["--save", save.to_str().unwrap()], "   ");
    assert!(output.status.success());
    assert!(stderr(&output).contains("Note: no text"));
    assert!(!save.exists());
}

#[test]
fn e2e_verbose_logs_to_stderr() {
    let output = run_stdin(&["--verbose"], "Some text.");
    assert!(stderr(&output).contains("[debug] computed stats"));
}

#[test]
fn e2e_usage_errors() {
    let output = wordmaster().arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown option: --bogus"));

    let output = wordmaster().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("wordmaster - text statistics"));
}

#[test]
fn e2e_missing_file() {
    let output = wordmaster().arg("/definitely/not/here.txt").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("I/O error"));
}
