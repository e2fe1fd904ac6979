//! WASM bindings for slot-engine.
//!
//! Exposes availability resolution, per-candidate verdicts, and the display
//! helpers to JavaScript via `wasm-bindgen`. All complex types are passed as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{SecondsFormat, Utc};
use slot_engine::display::{format_event_description, format_timezone_offset};
use slot_engine::request::parse_instant;
use slot_engine::schedule::parse_timezone;
use slot_engine::{DstPolicy, ResolveOptions, ResolveRequest, Resolver};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in / JSON-out core, independent of the JS boundary
// ---------------------------------------------------------------------------

/// Parse an optional DST policy name (`"shift-forward"` or `"skip"`).
pub fn parse_dst_policy(policy: Option<&str>) -> Result<DstPolicy, String> {
    match policy {
        None | Some("shift-forward") => Ok(DstPolicy::ShiftForward),
        Some("skip") => Ok(DstPolicy::Skip),
        Some(other) => Err(format!(
            "Unknown DST policy: '{}'. Expected 'shift-forward' or 'skip'",
            other
        )),
    }
}

fn prepare(
    request_json: &str,
    dst_policy: Option<&str>,
) -> Result<(ResolveRequest, Resolver), String> {
    let request = ResolveRequest::from_json(request_json).map_err(|e| e.to_string())?;
    let options = ResolveOptions {
        dst_policy: parse_dst_policy(dst_policy)?,
    };
    let resolver = Resolver::with_options(&request.schedule, options);
    Ok((request, resolver))
}

/// Resolve a JSON request into a JSON array of RFC 3339 instants.
pub fn resolve_json(request_json: &str, dst_policy: Option<&str>) -> Result<String, String> {
    let (request, resolver) = prepare(request_json, dst_policy)?;
    let valid = resolver
        .resolve(&request.candidates, &request.busy, request.duration_minutes)
        .map_err(|e| e.to_string())?;
    let rendered: Vec<String> = valid
        .iter()
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .collect();
    serde_json::to_string(&rendered).map_err(|e| format!("Serialization error: {}", e))
}

/// Evaluate a JSON request into a JSON array of `{candidate, verdict}` objects.
pub fn explain_json(request_json: &str, dst_policy: Option<&str>) -> Result<String, String> {
    let (request, resolver) = prepare(request_json, dst_policy)?;
    let evaluations = resolver
        .explain(&request.candidates, &request.busy, request.duration_minutes)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&evaluations).map_err(|e| format!("Serialization error: {}", e))
}

/// Short GMT offset label for `timezone` at `at` (or now).
pub fn timezone_offset_label(timezone: &str, at: Option<&str>) -> Result<String, String> {
    let tz = parse_timezone(timezone).map_err(|e| e.to_string())?;
    let at = match at {
        Some(s) => parse_instant(s).map_err(|e| e.to_string())?,
        None => Utc::now(),
    };
    Ok(format_timezone_offset(&tz, at))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Filter a request's candidates down to the bookable ones.
///
/// `request_json` holds `schedule`, `busy`, `candidates`, and
/// `durationInMinutes`. Returns a JSON array of RFC 3339 strings.
#[wasm_bindgen(js_name = "resolveValidTimes")]
pub fn resolve_valid_times(
    request_json: &str,
    dst_policy: Option<String>,
) -> Result<String, JsValue> {
    resolve_json(request_json, dst_policy.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Explain why each candidate in the request was accepted or rejected.
#[wasm_bindgen(js_name = "explainCandidates")]
pub fn explain_candidates(
    request_json: &str,
    dst_policy: Option<String>,
) -> Result<String, JsValue> {
    explain_json(request_json, dst_policy.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Human-readable event length, e.g. "1 hr 30 mins".
#[wasm_bindgen(js_name = "formatEventDescription")]
pub fn format_event_description_js(duration_minutes: u32) -> String {
    format_event_description(duration_minutes)
}

/// Short GMT offset label, e.g. "GMT-6".
#[wasm_bindgen(js_name = "formatTimezoneOffset")]
pub fn format_timezone_offset_js(timezone: &str, at: Option<String>) -> Result<String, JsValue> {
    timezone_offset_label(timezone, at.as_deref()).map_err(|e| JsValue::from_str(&e))
}
