//! Response codes carried in every envelope.
//!
//! Codes are namespaced by entity (`USER/*`, `RESERVATION/*`,
//! `DISPONIBILITY/*`) or by concern (`VALIDATION/*`, `REQUEST/*`). Clients
//! match on them, so renaming one is a breaking change.

pub const INTERNAL_ERROR: &str = "INTERNAL/ERROR";
pub const REQUEST_TIMEOUT: &str = "REQUEST/TIMEOUT";

pub mod user {
    pub const LIST: &str = "USER/LIST";
    pub const LIST_FAILED: &str = "USER/LIST_FAILED";
    pub const DETAILS: &str = "USER/DETAILS";
    pub const GET_FAILED: &str = "USER/GET_FAILED";
    pub const NOT_FOUND: &str = "USER/NOT_FOUND";
    pub const ID_NOT_MODIFIABLE: &str = "USER/ID_NOT_MODIFIABLE";
    pub const ID_ALREADY_USED: &str = "USER/ID_ALREADY_USED";
    pub const CREATED: &str = "USER/CREATED";
    pub const CREATE_FAILED: &str = "USER/CREATE_FAILED";
    pub const UPDATED: &str = "USER/UPDATED";
    pub const UPDATE_FAILED: &str = "USER/UPDATE_FAILED";
    pub const DELETED: &str = "USER/DELETED";
    pub const DELETE_FAILED: &str = "USER/DELETE_FAILED";
}

pub mod reservation {
    pub const LIST: &str = "RESERVATION/LIST";
    pub const LIST_FAILED: &str = "RESERVATION/LIST_FAILED";
    pub const DETAILS: &str = "RESERVATION/DETAILS";
    pub const GET_FAILED: &str = "RESERVATION/GET_FAILED";
    pub const NOT_FOUND: &str = "RESERVATION/NOT_FOUND";
    pub const CREATED: &str = "RESERVATION/CREATED";
    pub const CREATE_FAILED: &str = "RESERVATION/CREATE_FAILED";
    pub const UPDATED: &str = "RESERVATION/UPDATED";
    pub const UPDATE_FAILED: &str = "RESERVATION/UPDATE_FAILED";
    pub const DELETED: &str = "RESERVATION/DELETED";
    pub const DELETE_FAILED: &str = "RESERVATION/DELETE_FAILED";
}

pub mod disponibility {
    pub const LIST: &str = "DISPONIBILITY/LIST";
    pub const LIST_FAILED: &str = "DISPONIBILITY/LIST_FAILED";
    pub const DETAILS: &str = "DISPONIBILITY/DETAILS";
    pub const GET_FAILED: &str = "DISPONIBILITY/GET_FAILED";
    pub const NOT_FOUND: &str = "DISPONIBILITY/NOT_FOUND";
    pub const CREATED: &str = "DISPONIBILITY/CREATED";
    pub const CREATE_FAILED: &str = "DISPONIBILITY/CREATE_FAILED";
    pub const UPDATED: &str = "DISPONIBILITY/UPDATED";
    pub const UPDATE_FAILED: &str = "DISPONIBILITY/UPDATE_FAILED";
    pub const DELETED: &str = "DISPONIBILITY/DELETED";
    pub const DELETE_FAILED: &str = "DISPONIBILITY/DELETE_FAILED";
}

pub mod validation {
    pub const BODY_INVALID: &str = "VALIDATION/BODY_INVALID";

    pub const ID_INVALID: &str = "VALIDATION/ID_INVALID";
    pub const FIRSTNAME_INVALID: &str = "VALIDATION/FIRSTNAME_INVALID";
    pub const LASTNAME_INVALID: &str = "VALIDATION/LASTNAME_INVALID";
    pub const DISPLAYNAME_INVALID: &str = "VALIDATION/DISPLAYNAME_INVALID";
    pub const ADMIN_INVALID: &str = "VALIDATION/ADMIN_INVALID";
    pub const MEMBER_INVALID: &str = "VALIDATION/MEMBER_INVALID";
    pub const GROUP_INVALID: &str = "VALIDATION/GROUP_INVALID";
    pub const YEAR_INVALID: &str = "VALIDATION/YEAR_INVALID";

    pub const TITLE_INVALID: &str = "VALIDATION/TITLE_INVALID";
    pub const START_DATE_INVALID: &str = "VALIDATION/START_DATE_INVALID";
    pub const END_DATE_INVALID: &str = "VALIDATION/END_DATE_INVALID";
    pub const START_DATE_BEFORE_END_DATE: &str = "VALIDATION/START_DATE_BEFORE_END_DATE";
    pub const OWNER_INVALID: &str = "VALIDATION/OWNER_INVALID";

    pub const DAY_INVALID: &str = "VALIDATION/DAY_INVALID";
    pub const DATE_RANGE_INVALID: &str = "VALIDATION/DATE_RANGE_INVALID";
    pub const OPENNING_TIME_INVALID: &str = "VALIDATION/OPENNING_TIME_INVALID";
    pub const CLOSING_TIME_INVALID: &str = "VALIDATION/CLOSING_TIME_INVALID";
    pub const TIME_RANGE_INVALID: &str = "VALIDATION/TIME_RANGE_INVALID";
}
