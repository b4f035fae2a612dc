//! End-to-end tests for the `theatre_split` binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn run(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_theatre_split"))
        .args(args)
        .env_remove("THEATRE_LANG")
        .env_remove("THEATRE_SPLIT_MODE")
        .env_remove("THEATRE_SPLIT_UNIT")
        .output()
        .expect("Failed to execute theatre_split");

    assert!(
        output.status.success(),
        "theatre_split failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_tree_output() {
    let out = run(&["--lang", "ja", "あ）"]);
    assert_eq!(out, "# mode=kinsoku chars=2\ngroup \"あ）\"\n");
}

#[test]
fn test_mode_flag_overrides_language() {
    let out = run(&["--lang", "ja", "--mode", "ungrouped", "ab"]);
    assert!(out.starts_with("# mode=ungrouped chars=2\n"));
    assert!(out.contains("char \"a\"\nchar \"b\""));
}

#[test]
fn test_columns_output() {
    let out = run(&["-l", "en", "-f", "columns", "-w", "8", "hello world"]);
    assert_eq!(out, "|hello |\n|world|\n");
}

#[test]
fn test_html_output_uses_font_size() {
    let out = run(&["-l", "zh", "-f", "html", "--font-size", "30px", "x"]);
    assert_eq!(
        out.trim_end(),
        "<span class=\"tt-char\" style=\"height:30px\">x</span>"
    );
}

#[test]
fn test_timeline_output() {
    let out = run(&["-l", "en", "-f", "timeline", "--flyin", "fadein", "--speed", "10", "ab"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].trim_start().starts_with("0ms +400ms \"a\""));
    assert!(lines[1].trim_start().starts_with("10ms +400ms \"b\""));
    assert_eq!(lines[2], "# total=410ms");
}

#[test]
fn test_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_theatre_split"))
        .args(["--lang", "en"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn theatre_split");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"hi\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# mode=latin chars=2\ngroup \"hi\"\n"
    );
}

#[test]
fn test_bad_flag_exits_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_theatre_split"))
        .args(["--mode", "sideways", "x"])
        .output()
        .expect("Failed to execute theatre_split");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown split mode"));
}
