//! Tests for `uscis-notifier status`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_status_json_reports_error_per_parameter() {
    // The configured profile does not exist, so every lookup fails on
    // credential resolution without touching the network.
    let t = Test::with_config(MISSING_PROFILE_CONFIG);

    let output = t.cmd().args(["status", "--json"]).output().unwrap();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 5);

    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, PARAMETER_NAMES);

    for row in rows {
        assert!(row["error"].is_string(), "expected error field: {}", row);
        assert!(row.get("kind").is_none());
        assert!(row.get("version").is_none());
    }
}

#[test]
fn test_status_lists_failures_and_exits_zero() {
    let t = Test::with_config(MISSING_PROFILE_CONFIG);

    let mut assert = t.cmd().arg("status").assert().success();
    for name in PARAMETER_NAMES {
        assert = assert.stderr(predicate::str::contains(*name));
    }
    assert.stdout(predicate::str::contains("uscis-notifier-test-missing"));
}
