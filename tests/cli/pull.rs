//! Tests for `envsnap pull` against a one-shot stub server.

use crate::support::*;

const RESTORE_OK: &str =
    r#"{"env":{"version":7,"environment":"development","values":{"A":"1","B":"two words"}}}"#;

#[test]
fn test_pull_writes_env_file() {
    let (base_url, server) = one_shot("200 OK", RESTORE_OK);
    let t = Test::logged_in_at(&base_url);
    assert_success(&t.init_cmd("my-app"));

    let output = t.pull();
    assert_success(&output);
    assert_stdout_contains(&output, ".env");
    assert_stdout_contains(&output, "7");

    let request = server.join().expect("stub server thread panicked");
    assert!(request.contains("GET /api/cli/restore/my-app"));

    assert_eq!(t.read_env(), "A=\"1\"\nB=\"two words\"");
}

#[test]
fn test_pull_server_error_is_surfaced() {
    let (base_url, server) = one_shot("404 Not Found", r#"{"error":"Repo not found"}"#);
    let t = Test::logged_in_at(&base_url);
    assert_success(&t.init_cmd("my-app"));

    let output = t.pull();
    assert_failure(&output);
    assert_stderr_contains(&output, "Repo not found");

    server.join().expect("stub server thread panicked");
}
