//! Tests for `uscis-notifier params`.

use crate::support::*;

#[test]
fn test_params_lists_every_name() {
    let t = Test::new();

    let output = t.params();
    assert_success(&output);
    for name in PARAMETER_NAMES {
        assert_stdout_contains(&output, name);
    }
    assert_stdout_contains(&output, "SecureString");
}

#[test]
fn test_params_json() {
    let t = Test::new();

    let output = t.params_json();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 5);

    let names: Vec<&str> = entries
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, PARAMETER_NAMES);

    for entry in entries {
        assert_eq!(entry["kind"], "secret");
        assert_eq!(entry["overwrite"], true);
        assert!(entry.get("value").is_none());
    }
}
