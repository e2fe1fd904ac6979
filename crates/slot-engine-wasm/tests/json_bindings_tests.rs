//! Tests for the JSON core behind the WASM exports.
//!
//! Exercises the pure-Rust functions directly; the `#[wasm_bindgen]` wrappers
//! only convert their `String` errors into `JsValue`.

use slot_engine::DstPolicy;
use slot_engine_wasm::{explain_json, parse_dst_policy, resolve_json, timezone_offset_label};

const REQUEST: &str = r#"{
    "schedule": {
        "timezone": "America/Chicago",
        "availabilities": [{ "dayOfWeek": "Monday", "startTime": "09:00", "endTime": "17:00" }]
    },
    "busy": [{ "start": "2024-01-08T15:00:00Z", "end": "2024-01-08T15:30:00Z" }],
    "candidates": ["2024-01-08T15:00:00Z", "2024-01-08T16:00:00Z", "2024-01-08T23:00:00Z"],
    "durationInMinutes": 30
}"#;

#[test]
fn resolve_returns_accepted_instants() {
    let json = resolve_json(REQUEST, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!(["2024-01-08T16:00:00Z"]));
}

#[test]
fn explain_returns_one_verdict_per_candidate() {
    let json = explain_json(REQUEST, Some("shift-forward")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["verdict"]["status"], "busy");
    assert_eq!(entries[0]["verdict"]["conflicts"][0]["overlap_minutes"], 30);
    assert_eq!(entries[1]["verdict"]["status"], "accepted");
    assert_eq!(entries[2]["verdict"]["status"], "outside_availability");
}

#[test]
fn invalid_request_reports_error() {
    let err = resolve_json("{}", None).unwrap_err();
    assert!(err.contains("Invalid request JSON"), "got: {}", err);
}

#[test]
fn dst_policy_names() {
    assert_eq!(parse_dst_policy(None).unwrap(), DstPolicy::ShiftForward);
    assert_eq!(parse_dst_policy(Some("skip")).unwrap(), DstPolicy::Skip);
    assert!(parse_dst_policy(Some("sideways")).is_err());
}

#[test]
fn offset_label() {
    assert_eq!(
        timezone_offset_label("Asia/Kolkata", Some("2024-01-08T00:00:00Z")).unwrap(),
        "GMT+5:30"
    );
    assert!(timezone_offset_label("Not/AZone", None).is_err());
}
