use std::process::Command;

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_deftoml")).args(args)
                                                             .env_remove("RUST_LOG")
                                                             .output()
                                                             .expect("failed to launch deftoml");
    (output.status.success(), String::from_utf8_lossy(&output.stdout).into_owned())
}

#[test]
fn prints_toml_for_valid_file() {
    let (ok, stdout) = run(&["tests/fixtures/scenario.conf"]);
    assert!(ok);
    assert_eq!(stdout, "array = [\"a\", 5, 6]\n");
}

#[test]
fn missing_file_reports_error_and_fails() {
    let (ok, stdout) = run(&["tests/fixtures/does-not-exist.conf"]);
    assert!(!ok);
    assert!(stdout.starts_with("Error: cannot read"), "unexpected output: {stdout}");
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn requires_input_argument() {
    let (ok, stdout) = run(&[]);
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn syntax_error_reports_line_and_fails() {
    let (ok, stdout) = run(&["tests/invalid/unrecognized.conf"]);
    assert!(!ok);
    assert_eq!(stdout, "Error: line 2: unrecognized syntax: foo\n");
}
