use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use reckon::session::{DIVISION_BY_ZERO_MESSAGE, HISTORY_HEADER, INVALID_EXPRESSION_MESSAGE};

fn reckon(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                                              .env_remove("RUST_LOG")
                                                              .stdin(Stdio::piped())
                                                              .stdout(Stdio::piped())
                                                              .stderr(Stdio::piped())
                                                              .spawn()
                                                              .unwrap_or_else(|e| {
                                                                  panic!("Failed to start reckon: {e}")
                                                              });
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(stdin.as_bytes())
         .expect("write stdin");
    child.wait_with_output().expect("wait for reckon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn one_shot_prints_value() {
    let output = reckon(&["2 + 3 * 4"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "14\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn one_shot_accepts_leading_sign() {
    let output = reckon(&["-5 * 2"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-10\n");
}

#[test]
fn one_shot_rejects_invalid_expression() {
    let output = reckon(&["1 +"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(INVALID_EXPRESSION_MESSAGE));
}

#[test]
fn one_shot_division_by_zero_is_error_by_default() {
    let output = reckon(&["1 / 0"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(DIVISION_BY_ZERO_MESSAGE));
}

#[test]
fn one_shot_ieee_division_prints_infinity() {
    let output = reckon(&["--ieee-division", "1 / 0"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "inf\n");
}

#[test]
fn interactive_session_respects_capacity() {
    let output = reckon(&["--capacity", "1"], "1 + 1\nY\n2 + 2\nN\n");
    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.contains("4\n"));
    assert!(printed.ends_with(&format!("{HISTORY_HEADER}\n2\n")));
}

#[test]
fn interactive_ieee_division_records_infinity() {
    let output = reckon(&["--ieee-division"], "1 / 0\nN\n");
    assert!(output.status.success());
    assert!(stdout(&output).ends_with(&format!("{HISTORY_HEADER}\ninf\n")));
}
