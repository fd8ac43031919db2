/// Disponibility (availability window) controller
pub mod disponibility;
/// Reservation controller
pub mod reservation;
/// User controller
pub mod user;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planning_core::{codes, errors::PlanningError, models::envelope::SuccessEnvelope};
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::error_handling::AppError;

/// A 200 response carrying a success envelope.
#[derive(Debug)]
pub struct Success<T>(pub SuccessEnvelope<T>);

impl<T> Success<T> {
    pub fn new(code: &str, message: &str, data: T) -> Self {
        Self(SuccessEnvelope::new(code, message, Some(data)))
    }

    /// A success whose `data` is `null`.
    pub fn empty(code: &str, message: &str) -> Self {
        Self(SuccessEnvelope::new(code, message, None))
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// Unwraps a JSON body, reporting malformed ones with an envelope instead of
/// axum's plain-text rejection.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        AppError(PlanningError::validation(
            codes::validation::BODY_INVALID,
            rejection.body_text(),
        ))
    })
}

/// Parses a UUID path key. A key that is not a UUID cannot match any row.
pub(crate) fn uuid_key(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
