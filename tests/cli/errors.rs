//! Tests for error paths and their hints.
//!
//! Commands that would talk to the server run against an unreachable
//! address, so every failure here is deterministic and offline.

use crate::support::*;

#[test]
fn test_backup_requires_login() {
    let t = Test::new();
    t.write_env("A=1\n");

    let output = t.backup();
    assert_failure_with_hint(&output, "not logged in", "envsnap login");
}

#[test]
fn test_backup_requires_init() {
    let t = Test::logged_in();
    t.write_env("A=1\n");

    let output = t.backup();
    assert_failure_with_hint(&output, "not initialized", "envsnap init");
}

#[test]
fn test_backup_refuses_missing_env() {
    let t = Test::init("my-app");

    let output = t.backup();
    assert_failure(&output);
    assert_stderr_contains(&output, "no env values found");
}

#[test]
fn test_backup_refuses_comment_only_env() {
    let t = Test::with_env("my-app", "# nothing real here\n\n");

    let output = t.backup();
    assert_failure(&output);
    assert_stderr_contains(&output, "no env values found");
}

#[test]
fn test_backup_reports_unreachable_server() {
    let t = Test::with_env("my-app", "A=1\n");

    let output = t.backup();
    assert_failure(&output);
    assert_stderr_contains(&output, "request failed");
}

#[test]
fn test_backup_keeps_staged_message_on_failure() {
    // The staged message is only consumed by a successful backup.
    let t = Test::with_env("my-app", "A=1\n");
    assert_success(&t.commit("precious message"));

    let output = t.backup();
    assert_failure(&output);

    assert!(t.project_config().contains("precious message"));
}

#[test]
fn test_pull_requires_login() {
    let t = Test::new();

    let output = t.pull();
    assert_failure(&output);
    assert_stderr_contains(&output, "not logged in");
}

#[test]
fn test_pull_requires_init() {
    let t = Test::logged_in();

    let output = t.pull();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_restore_with_explicit_slug_needs_no_init() {
    // An explicit slug skips the project config and goes straight to the
    // server, which is unreachable here.
    let t = Test::logged_in();

    let output = t
        .cmd()
        .args(["restore", "someone-elses-app"])
        .output()
        .expect("failed to run envsnap restore");
    assert_failure(&output);
    assert_stderr_contains(&output, "request failed");
}

#[test]
fn test_list_requires_login() {
    let t = Test::new();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "not logged in");
}

#[test]
fn test_watch_requires_login() {
    // The watcher checks login before entering its loop, so this exits
    // immediately instead of polling forever.
    let t = Test::new();

    let output = t
        .cmd()
        .arg("watch")
        .output()
        .expect("failed to run envsnap watch");
    assert_failure(&output);
    assert_stderr_contains(&output, "not logged in");
}

#[test]
fn test_diff_requires_init() {
    let t = Test::logged_in();

    let output = t
        .cmd()
        .arg("diff")
        .output()
        .expect("failed to run envsnap diff");
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_corrupted_project_config_fails_cleanly() {
    let t = Test::init("my-app");
    std::fs::write(t.project_config_path(), "not valid toml {{{{").unwrap();

    let output = t.commit("message");
    assert_failure(&output);
    assert_stderr_contains(&output, "parse");
}
