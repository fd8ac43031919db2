//! # Request Validation
//!
//! Request bodies are validated by ordered chains: each step pairs a check
//! with the code reported when it fails, and the chain stops at the first
//! failing step. Callers never see more than one validation error at a time.
//!
//! Steps that need the database (id already taken, owner exists) are run by
//! the handlers between the pure chains exposed here, so the overall order
//! stays the one documented for each entity.

pub mod disponibility;
pub mod reservation;
pub mod user;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::errors::{PlanningError, PlanningResult};
use crate::models::reservation::TIMESTAMP_FORMAT;

const TIMESTAMP_SHAPE: &str = "dddd-dd-dd dd:dd:dd";
const DATE_SHAPE: &str = "dddd-dd-dd";

/// One step of a chain: `Some` passes the extracted value on, `None` fails
/// with `code`.
pub fn require<T>(value: Option<T>, code: &'static str, message: &str) -> PlanningResult<T> {
    value.ok_or_else(|| PlanningError::validation(code, message))
}

/// A string of at most `max` characters, possibly empty.
pub fn text_within(value: &Option<Value>, max: usize) -> Option<&str> {
    match value {
        Some(Value::String(text)) if text.chars().count() <= max => Some(text),
        _ => None,
    }
}

/// A non-empty string of at most `max` characters.
pub fn required_text_within(value: &Option<Value>, max: usize) -> Option<&str> {
    text_within(value, max).filter(|text| !text.is_empty())
}

pub fn boolean(value: &Option<Value>) -> Option<bool> {
    value.as_ref().and_then(Value::as_bool)
}

/// A `YYYY-MM-DD HH:mm:ss` timestamp naming a real date and time.
///
/// The layout is checked character by character first: chrono accepts
/// unpadded fields such as `2023-1-1`, which the wire format forbids.
pub fn timestamp(value: &Option<Value>) -> Option<NaiveDateTime> {
    let raw = value.as_ref().and_then(Value::as_str)?;
    if !matches_shape(raw, TIMESTAMP_SHAPE) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

/// A `YYYY-MM-DD` calendar date.
pub fn calendar_date(value: &Option<Value>) -> Option<NaiveDate> {
    let raw = value.as_ref().and_then(Value::as_str)?;
    if !matches_shape(raw, DATE_SHAPE) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn matches_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw
            .bytes()
            .zip(shape.bytes())
            .all(|(c, expected)| match expected {
                b'd' => c.is_ascii_digit(),
                other => c == other,
            })
}
