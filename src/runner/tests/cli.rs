// Copyright 2023 atframework
// Licensed under the MIT licenses.

use std::process::{Command, Output};

fn run_serbench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_serbench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch serbench")
}

#[test]
fn test_missing_iterations_prints_usage() {
    let output = run_serbench(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Usage: "), "{}", stdout);
    assert!(stdout.ends_with(" iterations\n"), "{}", stdout);
}

#[test]
fn test_malformed_iterations() {
    for arg in ["abc", "-3", "1.5"] {
        let output = run_serbench(&[arg]);
        assert!(!output.status.success(), "{} should be rejected", arg);
        assert!(output.stdout.is_empty(), "{} should not print a report", arg);
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn test_report() {
    let output = run_serbench(&["5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(8, lines.len(), "{}", stdout);
    assert_eq!("performing 5 iterations", lines[0]);
    assert_eq!("", lines[1]);
    assert_eq!("thrift: size = 17017 bytes", lines[2]);
    assert!(lines[3].starts_with("thrift: time = "));
    assert!(lines[3].ends_with(" milliseconds"));
    assert_eq!("", lines[4]);
    assert_eq!("protobuf: size = 11803 bytes", lines[5]);
    assert!(lines[6].starts_with("protobuf: time = "));
    assert!(lines[6].ends_with(" milliseconds"));
    assert_eq!("", lines[7]);

    let millis: u64 = lines[3]
        .trim_start_matches("thrift: time = ")
        .trim_end_matches(" milliseconds")
        .parse()
        .unwrap();
    assert!(millis < 60_000);
}

#[test]
fn test_zero_iterations() {
    let output = run_serbench(&["0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("performing 0 iterations\n"));
    assert!(stdout.contains("thrift: time = "));
    assert!(stdout.contains("protobuf: time = "));
}
