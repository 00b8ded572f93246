//! Integration tests for linestat CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn linestat() -> Command {
    let mut cmd = Command::cargo_bin("linestat").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run with `input` on stdin and return stdout with escape sequences removed.
fn run_visible(args: &[&str], input: &str) -> Vec<String> {
    let output = linestat().args(args).write_stdin(input).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    console::strip_ansi_codes(&stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_help() {
    linestat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("linestat"))
        .stdout(predicate::str::contains("--numstat"))
        .stdout(predicate::str::contains("--no-summary"));
}

#[test]
fn test_cli_version() {
    linestat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("linestat"));
}

#[test]
fn test_table_with_summary() {
    let lines = run_visible(&[], "a.txt 3 1 10 12\nb.txt 0 5 5 0\n");
    assert_eq!(
        lines,
        vec![
            "a.txt 10  +2   (+3  -1)  =12",
            "b.txt 5   -5             0  ",
            "(2)   (1) (-3) (+3) (-6)    ",
        ]
    );
}

#[test]
fn test_cells_end_with_reset() {
    let output = linestat()
        .write_stdin("a.txt 3 1 10 12\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.ends_with("\x1b[0m\n"));
    // six cells, six resets from padding plus one inside the (+a -d) pair
    assert_eq!(stdout.matches("\x1b[0m").count(), 7);
}

#[test]
fn test_single_record_has_no_summary() {
    let lines = run_visible(&[], "x.txt 0 0 4 4\n");
    assert_eq!(lines, vec!["x.txt 4    =4"]);
}

#[test]
fn test_empty_input() {
    linestat()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_summary_flag() {
    let lines = run_visible(&["--no-summary"], "a.txt 3 1 10 12\nb.txt 0 5 5 0\n");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_numstat_order() {
    let lines = run_visible(&["--numstat"], "3\t1\ta.txt 10 12\n");
    assert_eq!(lines, vec!["a.txt 10 +2 (+3 -1) =12"]);
}

#[test]
fn test_summary_widens_columns() {
    let input = "a 6 1 10 15\nb 6 1 10 15\n";
    let lines = run_visible(&[], input);
    assert_eq!(lines.len(), 3);
    let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
    assert!(widths.iter().all(|&w| w == widths[0]));
    assert!(lines[2].contains("(+12)"));
}

#[test]
fn test_malformed_line_fails_without_output() {
    linestat()
        .write_stdin("a.txt 3 1 10 12\nb.txt 0 5\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_non_integer_count_fails() {
    linestat()
        .write_stdin("a.txt 3 one 10 12\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid deletions 'one'"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = linestat()
        .arg("-vv")
        .write_stdin("a.txt 3 1 10 12\nb.txt 0 5 5 0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("computed column widths"));
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 3);
}
