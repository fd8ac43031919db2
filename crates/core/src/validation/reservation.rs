use super::{require, required_text_within, text_within, timestamp};
use crate::codes::validation as invalid;
use crate::errors::PlanningResult;
use crate::models::reservation::{ReservationDraft, ReservationPayload};

pub const TITLE_MAX_LEN: usize = 100;
pub const OWNER_ID_MAX_LEN: usize = 100;

/// Checks title, dates, date order and owner id presence, in that order.
///
/// Whether the owner actually exists is left to the caller, which must check
/// it right after this chain passes.
pub fn draft(payload: &ReservationPayload) -> PlanningResult<ReservationDraft> {
    let title = require(
        text_within(&payload.title, TITLE_MAX_LEN),
        invalid::TITLE_INVALID,
        "The title must be a string of at most 100 characters",
    )?;

    let start_date = require(
        timestamp(&payload.start_date),
        invalid::START_DATE_INVALID,
        "The start date must use the format YYYY-MM-DD HH:mm:ss",
    )?;

    let end_date = require(
        timestamp(&payload.end_date),
        invalid::END_DATE_INVALID,
        "The end date must use the format YYYY-MM-DD HH:mm:ss",
    )?;

    require(
        (start_date < end_date).then_some(()),
        invalid::START_DATE_BEFORE_END_DATE,
        "The start date must be before the end date",
    )?;

    let owner_id = require(
        required_text_within(&payload.owner_id, OWNER_ID_MAX_LEN),
        invalid::OWNER_INVALID,
        "The owner does not exist",
    )?;

    Ok(ReservationDraft {
        title: title.to_string(),
        start_date,
        end_date,
        owner_id: owner_id.to_string(),
    })
}
