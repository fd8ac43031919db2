//! # Error Handling Middleware
//!
//! This module maps domain errors to HTTP status codes and error envelopes,
//! so every failure leaves the server in the same shape:
//! `{ "status": "error", "message": ..., "code": ... }`.
//!
//! Not-found errors answer 404, validation and storage errors 400, internal
//! failures 500. Storage failures are logged here, once, with their source.

use axum::{
    BoxError, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planning_core::{codes, errors::PlanningError, models::envelope::ErrorEnvelope};
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use planning_api::middleware::error_handling::AppError;
/// use planning_core::{codes, errors::PlanningError};
///
/// async fn handler() -> Result<(), AppError> {
///     let lookup: Result<(), PlanningError> =
///         Err(PlanningError::not_found(codes::user::NOT_FOUND, "User not found"));
///     lookup?;
///     Ok(())
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub PlanningError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PlanningError::NotFound { .. } => StatusCode::NOT_FOUND,
            PlanningError::Validation { .. } => StatusCode::BAD_REQUEST,
            PlanningError::Storage { .. } => StatusCode::BAD_REQUEST,
            PlanningError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.0 {
            PlanningError::Storage { code, message, source } => {
                error!(code = %code, "{}: {:?}", message, source);
            }
            PlanningError::Internal(source) => {
                error!("Internal error: {:?}", source);
            }
            _ => {}
        }

        let body = Json(ErrorEnvelope::new(self.0.code(), self.0.to_string()));
        (status, body).into_response()
    }
}

/// Automatic conversion from PlanningError to AppError
///
/// This allows using `?` on `PlanningResult` values in handlers.
impl From<PlanningError> for AppError {
    fn from(err: PlanningError) -> Self {
        AppError(err)
    }
}

/// Maps a PlanningError to an HTTP response
pub fn map_error(err: PlanningError) -> Response {
    AppError(err).into_response()
}

/// Turns failures raised by tower middleware into error envelopes.
///
/// Used with `HandleErrorLayer` in front of the request timeout.
pub async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        let body = Json(ErrorEnvelope::new(
            codes::REQUEST_TIMEOUT,
            "The request took too long to complete",
        ));
        return (StatusCode::REQUEST_TIMEOUT, body).into_response();
    }

    AppError(PlanningError::Internal(err)).into_response()
}
