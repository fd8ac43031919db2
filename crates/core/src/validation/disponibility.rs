use serde_json::Value;

use super::{calendar_date, require};
use crate::codes::validation as invalid;
use crate::errors::PlanningResult;
use crate::models::disponibility::{DisponibilityDraft, DisponibilityPayload};

pub fn draft(payload: &DisponibilityPayload) -> PlanningResult<DisponibilityDraft> {
    let day = require(
        payload
            .day
            .as_ref()
            .and_then(Value::as_i64)
            .filter(|day| (0..=6).contains(day))
            .map(|day| day as i16),
        invalid::DAY_INVALID,
        "The day must be a weekday index between 0 (Sunday) and 6 (Saturday)",
    )?;

    let start_date = require(
        calendar_date(&payload.start_date),
        invalid::START_DATE_INVALID,
        "The start date must use the format YYYY-MM-DD",
    )?;

    let end_date = require(
        calendar_date(&payload.end_date),
        invalid::END_DATE_INVALID,
        "The end date must use the format YYYY-MM-DD",
    )?;

    require(
        (start_date <= end_date).then_some(()),
        invalid::DATE_RANGE_INVALID,
        "The start date must not be after the end date",
    )?;

    let opening_time = require(
        hours(&payload.opening_time).filter(|hours| (0.0..24.0).contains(hours)),
        invalid::OPENNING_TIME_INVALID,
        "The opening time must be a number of hours between 0 and 24",
    )?;

    let closing_time = require(
        hours(&payload.closing_time).filter(|hours| *hours > 0.0 && *hours <= 24.0),
        invalid::CLOSING_TIME_INVALID,
        "The closing time must be a number of hours between 0 and 24",
    )?;

    require(
        (opening_time < closing_time).then_some(()),
        invalid::TIME_RANGE_INVALID,
        "The opening time must be before the closing time",
    )?;

    Ok(DisponibilityDraft {
        day,
        start_date,
        end_date,
        opening_time,
        closing_time,
    })
}

fn hours(value: &Option<Value>) -> Option<f64> {
    value.as_ref().and_then(Value::as_f64)
}
