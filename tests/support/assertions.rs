//! Test assertion helpers.
//!
//! Errors print to stderr and hints to stdout, so failure checks look at
//! both streams.

use std::process::Output;

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert that a command exited successfully.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed:\n{}",
        stderr(output)
    );
}

/// Assert that a command exited with a failure status.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, command succeeded with:\n{}",
        stdout(output)
    );
}

/// Assert a failed command printed `error` on stderr and `hint` on stdout.
pub fn assert_failure_with_hint(output: &Output, error: &str, hint: &str) {
    assert_failure(output);
    assert_stderr_contains(output, error);
    assert_stdout_contains(output, hint);
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stdout does NOT contain a string.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}
