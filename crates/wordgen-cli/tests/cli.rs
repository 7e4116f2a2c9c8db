//! End-to-end tests for the `wordgen` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn wordgen() -> Command {
    let mut cmd = Command::cargo_bin("wordgen").unwrap();
    // Keep the caller's environment from leaking into the flags.
    for var in [
        "WORDGEN_CHARSET",
        "WORDGEN_MIN",
        "WORDGEN_MAX",
        "WORDGEN_LINES",
        "WORDGEN_THREADS",
        "WORDGEN_OUTPUT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn help_lists_options() {
    wordgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--charset"))
        .stdout(predicate::str::contains("--threads"));
}

#[test]
fn missing_charset_fails() {
    wordgen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--charset"));
}

#[test]
fn writes_every_word_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordgen()
        .args(["-c", "ab", "-m", "1", "-M", "2", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(read_lines(&out), ["a", "aa", "ab", "b", "ba", "bb"]);
}

#[test]
fn truncates_existing_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");
    fs::write(&out, "stale\nstale\nstale\n").unwrap();

    wordgen()
        .args(["-c", "a", "-m", "1", "-M", "3", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(read_lines(&out), ["a", "aa", "aaa"]);
}

#[test]
fn default_output_is_results_txt() {
    let dir = TempDir::new().unwrap();

    wordgen()
        .current_dir(dir.path())
        .args(["-c", "xy", "-m", "2", "-M", "2"])
        .assert()
        .success();

    let lines = read_lines(&dir.path().join("results.txt"));
    assert_eq!(lines, ["xx", "xy", "yx", "yy"]);
}

#[test]
fn cap_and_threads_from_flags() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("capped.txt");

    wordgen()
        .args(["-c", "abcdefgh", "-m", "1", "-M", "3", "-l", "10", "-t", "8", "-o"])
        .arg(&out)
        .assert()
        .success();

    let lines = read_lines(&out);
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.iter().collect::<HashSet<_>>().len(), 10);
}

#[test]
fn stdout_target() {
    wordgen()
        .args(["-c", "01", "-m", "2", "-M", "2", "-t", "3", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let lines: HashSet<_> = out.lines().collect();
            lines == HashSet::from(["00", "01", "10", "11"]) && out.lines().count() == 4
        }));
}

#[test]
fn env_supplies_arguments() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("env.txt");

    wordgen()
        .env("WORDGEN_CHARSET", "pq")
        .env("WORDGEN_MIN", "1")
        .env("WORDGEN_MAX", "1")
        .env("WORDGEN_OUTPUT", &out)
        .assert()
        .success();

    assert_eq!(read_lines(&out), ["p", "q"]);
}

#[test]
fn verbose_reports_line_count() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordgen()
        .args(["-c", "ab", "-m", "1", "-M", "2", "-v", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated 6 lines."));
}

#[test]
fn verbose_report_survives_quiet_rust_log() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordgen()
        .env("RUST_LOG", "error")
        .args(["-c", "ab", "-m", "1", "-M", "2", "-v", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated 6 lines."));
}

#[test]
fn quiet_run_prints_no_report() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordgen()
        .args(["-c", "ab", "-m", "1", "-M", "2", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated").not());
}

#[test]
fn invalid_lengths_fail_before_touching_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never.txt");

    wordgen()
        .args(["-c", "ab", "-m", "3", "-M", "1", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds max length"));

    assert!(!out.exists());
}

#[test]
fn unopenable_output_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("words.txt");

    wordgen()
        .args(["-c", "ab", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open output file"));
}
