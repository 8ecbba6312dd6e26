use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_train_cars"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start train_cars");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for train_cars")
}

/// Test the full interactive run with a range read from stdin
#[test]
fn test_interactive_range_query() {
    let output = run_with_stdin(&[], "10\n100\n");
    assert!(
        output.status.success(),
        "Run failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All cars:"));
    assert!(stdout.contains("Total passengers: 120"));
    assert!(stdout.contains("Total luggage: 260"));
    assert!(stdout.contains("Enter minimum passenger count:"));

    let sorted = stdout
        .split("Cars sorted by comfort:")
        .nth(1)
        .expect("Missing sorted section");
    let luxury = sorted.find("Luxury car").expect("Missing luxury car");
    let passenger = sorted.find("Passenger car").expect("Missing passenger car");
    assert!(luxury < passenger, "Cars not sorted by comfort");

    let matches = stdout
        .split("Cars with passenger count from 10 to 100:")
        .nth(1)
        .expect("Missing range section");
    assert!(matches.contains("Luxury car: 20 passengers"));
    assert!(matches.contains("Passenger car: 100 passengers"));
    assert!(!matches.contains("Baggage car"));
}

/// Test that range flags skip the prompt
#[test]
fn test_range_from_flags() {
    let output = run_with_stdin(&["--min", "0", "--max", "0", "--no-sort"], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter minimum passenger count:"));
    assert!(!stdout.contains("Cars sorted by comfort:"));

    let matches = stdout
        .split("Cars with passenger count from 0 to 0:")
        .nth(1)
        .expect("Missing range section");
    assert_eq!(matches.trim(), "Baggage car: 0 passengers, 200 luggage units, comfort: 1");
}

/// Test that a non-numeric answer fails with a message
#[test]
fn test_non_numeric_input_fails() {
    let output = run_with_stdin(&[], "abc\n");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("'abc' is not an integer"),
        "Unexpected stderr: {}",
        stderr
    );
}

/// Test that a lone --min is rejected by the argument parser
#[test]
fn test_min_without_max_is_usage_error() {
    let output = run_with_stdin(&["--min", "5"], "");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--max"), "Unexpected stderr: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("All cars:"));
}

/// Test that a negative lower bound is accepted from flags
#[test]
fn test_negative_min_flag() {
    let output = run_with_stdin(&["--min", "-5", "--max", "30"], "");
    assert!(
        output.status.success(),
        "Run failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let matches = stdout
        .split("Cars with passenger count from -5 to 30:")
        .nth(1)
        .expect("Missing range section");
    assert!(matches.contains("Baggage car: 0 passengers"));
    assert!(matches.contains("Luxury car: 20 passengers"));
    assert!(!matches.contains("Passenger car"));
}
