use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn tonemap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tonemap").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TONEMAP_CONFIG");
    cmd
}

#[test]
fn test_analyze_inline_text_as_json() {
    let dir = TempDir::new().unwrap();
    let output = tonemap(&dir)
        .args([
            "analyze",
            "This is bad. It was a terrible failure. Nothing worked. We are very disappointed overall.",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sentiment"], "Negative");
    assert_eq!(value["summary"], "This is bad. We are very disappointed overall.");
    assert_eq!(value["suggestions"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_analyze_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let output = tonemap(&dir)
        .args(["analyze", "--plain"])
        .write_stdin("Great job! The team did excellent work and finished on time.")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[+] Positive"));
    assert!(stdout.contains("1. Share this positive feedback with relevant stakeholders"));
}

#[test]
fn test_blank_input_is_rejected_with_notice() {
    let dir = TempDir::new().unwrap();
    let output = tonemap(&dir)
        .args(["analyze", "   ", "--format", "json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Please enter some text to analyze first!"));
}

#[test]
fn test_init_then_configured_lexicon_and_format() {
    let dir = TempDir::new().unwrap();
    tonemap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".tonemap.toml").exists());

    // A second init without --force must not clobber the file.
    tonemap(&dir).arg("init").assert().failure();

    fs::write(
        dir.path().join(".tonemap.toml"),
        "[lexicon]\nextra_positive = [\"stellar\"]\n\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    let output = tonemap(&dir)
        .args(["analyze", "A stellar quarter."])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Text Analysis Report"));
    assert!(stdout.contains("**Positive**"));
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.md");
    tonemap(&dir)
        .args(["analyze", "--format", "markdown", "--output"])
        .arg(&report)
        .arg("--file")
        .arg(write_input(&dir, "Short note."))
        .assert()
        .success();

    let contents = fs::read_to_string(report).unwrap();
    assert!(contents.contains("> Short note."));
    assert!(contents.contains("**Neutral**"));
}

fn write_input(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, text).unwrap();
    path
}
