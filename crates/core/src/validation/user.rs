use serde_json::Value;

use super::{boolean, require, required_text_within};
use crate::codes::{user as codes, validation as invalid};
use crate::errors::{PlanningError, PlanningResult};
use crate::models::user::{UserFields, UserPayload};

pub const ID_MAX_LEN: usize = 100;
pub const NAME_MAX_LEN: usize = 100;
pub const DISPLAY_NAME_MAX_LEN: usize = 200;
pub const GROUP_MAX_LEN: usize = 100;

/// First step when creating: the client must choose the id.
pub fn new_id(payload: &UserPayload) -> PlanningResult<String> {
    require(
        required_text_within(&payload.id, ID_MAX_LEN),
        invalid::ID_INVALID,
        "The user id must be a unique identifier of at most 100 characters",
    )
    .map(str::to_string)
}

/// First step when updating, once the target is known to exist.
pub fn id_unchanged(payload: &UserPayload) -> PlanningResult<()> {
    match &payload.id {
        None | Some(Value::Null) => Ok(()),
        Some(_) => Err(PlanningError::validation(
            codes::ID_NOT_MODIFIABLE,
            "The id field cannot be modified",
        )),
    }
}

/// Remaining fields, in order.
pub fn fields(payload: &UserPayload) -> PlanningResult<UserFields> {
    let first_name = require(
        required_text_within(&payload.first_name, NAME_MAX_LEN),
        invalid::FIRSTNAME_INVALID,
        "The first name must be a string of at most 100 characters",
    )?;

    let last_name = require(
        required_text_within(&payload.last_name, NAME_MAX_LEN),
        invalid::LASTNAME_INVALID,
        "The last name must be a string of at most 100 characters",
    )?;

    let display_name = display_name(&payload.display_name)?;

    let admin = require(
        boolean(&payload.admin),
        invalid::ADMIN_INVALID,
        "The admin field must be a boolean",
    )?;

    let member = require(
        boolean(&payload.member),
        invalid::MEMBER_INVALID,
        "The member field must be a boolean",
    )?;

    let group = require(
        required_text_within(&payload.group, GROUP_MAX_LEN),
        invalid::GROUP_INVALID,
        "The group must be a string of at most 100 characters",
    )?;

    let year = require(
        year(&payload.year),
        invalid::YEAR_INVALID,
        "The year must be a number",
    )?;

    Ok(UserFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        display_name,
        admin,
        member,
        group: group.to_string(),
        year,
    })
}

// Absent, null and "" all mean "no display name".
fn display_name(value: &Option<Value>) -> PlanningResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) if text.chars().count() <= DISPLAY_NAME_MAX_LEN => {
            Ok(Some(text.clone()))
        }
        Some(_) => Err(PlanningError::validation(
            invalid::DISPLAYNAME_INVALID,
            "The display name must be a string of at most 200 characters",
        )),
    }
}

fn year(value: &Option<Value>) -> Option<i32> {
    value
        .as_ref()
        .and_then(Value::as_i64)
        .filter(|year| *year != 0)
        .and_then(|year| i32::try_from(year).ok())
}
