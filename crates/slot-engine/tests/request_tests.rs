//! Tests for the JSON request loader.

use chrono::{DateTime, Utc};
use slot_engine::request::parse_instant;
use slot_engine::{resolve, ResolveRequest, SlotError};

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

const CHICAGO_REQUEST: &str = r#"{
    "schedule": {
        "timezone": "America/Chicago",
        "availabilities": [
            { "dayOfWeek": "Monday", "startTime": "09:00", "endTime": "17:00" }
        ]
    },
    "busy": [{ "start": "2024-01-08T15:00:00Z", "end": "2024-01-08T15:30:00Z" }],
    "candidates": [
        "2024-01-08T15:00:00Z",
        "2024-01-08T09:30:00-06:00",
        "2024-01-08T22:30:00"
    ],
    "durationInMinutes": 30
}"#;

#[test]
fn request_loads_and_resolves() {
    let request = ResolveRequest::from_json(CHICAGO_REQUEST).unwrap();

    assert_eq!(request.duration_minutes, 30);
    assert_eq!(request.busy.len(), 1);
    assert_eq!(
        request.candidates,
        vec![
            utc("2024-01-08T15:00:00Z"),
            utc("2024-01-08T15:30:00Z"),
            utc("2024-01-08T22:30:00Z"),
        ]
    );

    let result = resolve(
        &request.candidates,
        &request.schedule,
        &request.busy,
        request.duration_minutes,
    )
    .unwrap();
    assert_eq!(
        result,
        vec![utc("2024-01-08T15:30:00Z"), utc("2024-01-08T22:30:00Z")]
    );
}

#[test]
fn busy_and_candidates_default_to_empty() {
    let json = r#"{
        "schedule": { "timezone": "UTC" },
        "durationInMinutes": 15
    }"#;
    let request = ResolveRequest::from_json(json).unwrap();
    assert!(request.busy.is_empty());
    assert!(request.candidates.is_empty());
    assert!(request.schedule.is_empty());
}

#[test]
fn malformed_json_is_reported() {
    let err = ResolveRequest::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SlotError::Json(_)));
}

#[test]
fn reversed_busy_interval_is_rejected() {
    let json = r#"{
        "schedule": { "timezone": "UTC" },
        "busy": [{ "start": "2024-01-08T16:00:00Z", "end": "2024-01-08T15:00:00Z" }],
        "durationInMinutes": 15
    }"#;
    let err = ResolveRequest::from_json(json).unwrap_err();
    assert!(matches!(err, SlotError::InvalidInterval { .. }));
}

#[test]
fn bad_schedule_fails_the_whole_request() {
    let json = r#"{
        "schedule": {
            "timezone": "America/Chicago",
            "availabilities": [{ "dayOfWeek": "Monday", "startTime": "09:00", "endTime": "9:75" }]
        },
        "candidates": ["2024-01-08T15:00:00Z"],
        "durationInMinutes": 15
    }"#;
    let err = ResolveRequest::from_json(json).unwrap_err();
    assert_eq!(err, SlotError::InvalidTimeOfDay("9:75".to_string()));
}

#[test]
fn instants_accept_offsets_and_naive_utc() {
    assert_eq!(
        parse_instant("2024-01-08T09:00:00-06:00").unwrap(),
        utc("2024-01-08T15:00:00Z")
    );
    assert_eq!(
        parse_instant("2024-01-08T15:00:00").unwrap(),
        utc("2024-01-08T15:00:00Z")
    );
    assert!(matches!(
        parse_instant("next tuesday"),
        Err(SlotError::InvalidInstant(_))
    ));
}
