// CLI integration tests for the array commands.
use std::process::{Command, Output};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_jsonutils");
    Command::new(exe)
}

fn run(args: &[&str]) -> Output {
    cmd().args(args).output().expect("run jsonutils")
}

fn stdout_text(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("utf8")
}

fn parse_error_line(output: &Output) -> Value {
    let text = String::from_utf8_lossy(&output.stderr);
    let line = text
        .lines()
        .find(|line| line.starts_with("{\"error\""))
        .expect("error json line");
    serde_json::from_str(line).expect("valid json")
}

fn error_kind(output: &Output) -> String {
    parse_error_line(output)["error"]["kind"]
        .as_str()
        .expect("kind")
        .to_string()
}

#[test]
fn new_prints_empty_array() {
    let output = run(&["array", "new"]);
    assert!(output.status.success());
    assert_eq!(stdout_text(&output), "[]");
}

#[test]
fn append_scenarios() {
    let cases: [(&[&str], &str); 5] = [
        (&["--array", "[]", "--value", "hello"], r#"["hello"]"#),
        (&["--array", "[]", "--value", "1", "--type", "number"], "[1]"),
        (&["--array", "[]", "--value", "true", "--type", "bool"], "[true]"),
        (&["--array", "[]", "--value", r#"{"foo":"bar"}"#], r#"[{"foo":"bar"}]"#),
        (&["-a", r#"["x"]"#, "-v", "-5", "-t", "number"], r#"["x",-5]"#),
    ];
    for (flags, expected) in cases {
        let mut args = vec!["array", "append"];
        args.extend_from_slice(flags);
        let output = run(&args);
        assert!(output.status.success(), "{flags:?}: {:?}", output.stderr);
        assert_eq!(stdout_text(&output), expected);
    }
}

#[test]
fn spread_scenario() {
    let output = run(&["array", "spread", "--array", r#"["a"]"#, "--value", r#"["b","c"]"#]);
    assert!(output.status.success());
    assert_eq!(stdout_text(&output), r#"["a","b","c"]"#);
}

#[test]
fn output_feeds_back_into_next_command() {
    let first = run(&["array", "new"]);
    let second = run(&["array", "append", "-a", stdout_text(&first), "-v", "one"]);
    let third = run(&["array", "spread", "-a", stdout_text(&second), "-v", "[2,3]"]);
    assert!(third.status.success());
    let parsed: Value = serde_json::from_str(stdout_text(&third)).expect("json");
    assert_eq!(parsed, serde_json::json!(["one", 2, 3]));
}

#[test]
fn spread_non_array_value_is_invalid_value() {
    let output = run(&["array", "spread", "--array", "[]", "--value", "not-an-array"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(output.stdout.is_empty());
    assert_eq!(error_kind(&output), "InvalidValue");
    let message = parse_error_line(&output)["error"]["message"]
        .as_str()
        .expect("message")
        .to_string();
    assert!(message.contains("It must be a JSON array"));
}

#[test]
fn append_object_array_is_invalid_array() {
    let output = run(&["array", "append", "--array", "{}", "--value", "x"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());
    let err = parse_error_line(&output);
    assert_eq!(err["error"]["kind"], "InvalidArray");
    assert_eq!(err["error"]["input"], "{}");
    assert!(err["error"]["causes"].as_array().is_some_and(|c| !c.is_empty()));
}

#[test]
fn hyphen_leading_array_reaches_array_validation() {
    let cases: [&[&str]; 2] = [
        &["array", "append", "-a", "-5", "-v", "x"],
        &["array", "spread", "--array", "-5", "--value", "[1]"],
    ];
    for args in cases {
        let output = run(args);
        assert_eq!(output.status.code(), Some(5), "{args:?}");
        assert!(output.stdout.is_empty());
        let err = parse_error_line(&output);
        assert_eq!(err["error"]["kind"], "InvalidArray");
        assert_eq!(err["error"]["input"], "-5");
    }
}

#[test]
fn debug_logs_on_piped_stderr_have_no_ansi_escapes() {
    let output = cmd()
        .env("RUST_LOG", "debug")
        .args(["array", "append", "-a", "[]", "-v", "hello"])
        .output()
        .expect("run jsonutils");
    assert!(output.status.success());
    assert_eq!(stdout_text(&output), r#"["hello"]"#);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("appended value"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "{stderr}");
}

#[test]
fn missing_and_empty_flags_exit_with_missing_argument() {
    let cases: [&[&str]; 4] = [
        &["array", "append", "--value", "hei"],
        &["array", "append", "--array", "", "--value", "hei"],
        &["array", "spread", "--array", "[]"],
        &["array", "spread", "--array", "[]", "--value", ""],
    ];
    for args in cases {
        let output = run(args);
        assert_eq!(output.status.code(), Some(3), "{args:?}");
        assert_eq!(error_kind(&output), "MissingArgument");
    }
}

#[test]
fn bad_type_and_failed_conversion_exit_codes() {
    let output = run(&["array", "append", "-a", "[]", "-v", "1", "-t", "float"]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(error_kind(&output), "InvalidTypeHint");

    let output = run(&["array", "append", "-a", "[]", "-v", "abc", "-t", "number"]);
    assert_eq!(output.status.code(), Some(7));
    assert_eq!(error_kind(&output), "TypeConversionFailed");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let output = run(&["array", "pop"]);
    assert_eq!(output.status.code(), Some(2));
    let err = parse_error_line(&output);
    assert_eq!(err["error"]["kind"], "Usage");
    assert!(err["error"]["hint"].as_str().unwrap().contains("jsonutils array --help"));
}

#[test]
fn help_and_version_exit_zero() {
    let help = run(&["--help"]);
    assert!(help.status.success());
    assert!(stdout_text(&help).contains("array"));

    let version = run(&["--version"]);
    assert!(version.status.success());
    assert!(stdout_text(&version).starts_with("jsonutils "));
}

#[test]
fn bare_invocation_shows_help_with_usage_code() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn completion_script_is_generated() {
    let output = run(&["completion", "bash"]);
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("jsonutils"));
}
