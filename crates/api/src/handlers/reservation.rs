use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use planning_core::{
    codes::{reservation as codes, validation as invalid},
    errors::PlanningError,
    models::reservation::{Reservation, ReservationPayload},
    validation,
};
use std::sync::Arc;
use tracing::info;

use super::{Success, json_body, uuid_key};
use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
) -> Result<Success<Vec<Reservation>>, AppError> {
    let reservations = state
        .reservations
        .find_all()
        .await
        .map_err(PlanningError::storage(
            codes::LIST_FAILED,
            "Error while retrieving the list of reservations",
        ))?;

    Ok(Success::new(codes::LIST, "List of reservations", reservations))
}

#[axum::debug_handler]
pub async fn get_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Success<Reservation>, AppError> {
    let key = uuid_key(&id).ok_or_else(|| reservation_not_found(&id))?;

    let reservation = state
        .reservations
        .find_by_id(key)
        .await
        .map_err(PlanningError::storage(
            codes::GET_FAILED,
            "Error while retrieving the reservation",
        ))?
        .ok_or_else(|| reservation_not_found(&id))?;

    Ok(Success::new(codes::DETAILS, "Reservation details", reservation))
}

#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ReservationPayload>, JsonRejection>,
) -> Result<Success<Reservation>, AppError> {
    create_or_update_reservation(&state, None, json_body(payload)?).await
}

#[axum::debug_handler]
pub async fn update_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<ReservationPayload>, JsonRejection>,
) -> Result<Success<Reservation>, AppError> {
    create_or_update_reservation(&state, Some(id), json_body(payload)?).await
}

/// Creates a reservation when `id` is `None`, otherwise replaces reservation `id`.
///
/// Validation order: title, start date, end date, start before end, owner.
/// An update whose target does not exist answers `RESERVATION/NOT_FOUND`.
pub async fn create_or_update_reservation(
    state: &ApiState,
    id: Option<String>,
    payload: ReservationPayload,
) -> Result<Success<Reservation>, AppError> {
    let draft = validation::reservation::draft(&payload)?;

    let (failed_code, failed_message) = match id {
        Some(_) => (codes::UPDATE_FAILED, "Error while updating the reservation"),
        None => (codes::CREATE_FAILED, "Error while creating the reservation"),
    };

    let owner = state
        .users
        .find_by_id(&draft.owner_id)
        .await
        .map_err(PlanningError::storage(failed_code, failed_message))?;
    if owner.is_none() {
        return Err(
            PlanningError::validation(invalid::OWNER_INVALID, "The owner does not exist").into(),
        );
    }

    match id {
        Some(id) => {
            let key = uuid_key(&id).ok_or_else(|| reservation_not_found(&id))?;
            let affected = state
                .reservations
                .update(key, &draft)
                .await
                .map_err(PlanningError::storage(failed_code, failed_message))?;

            if affected == 0 {
                return Err(reservation_not_found(&id).into());
            }

            info!("Reservation updated: id={}", key);
            Ok(Success::empty(codes::UPDATED, "Reservation updated successfully"))
        }
        None => {
            let created = state
                .reservations
                .insert(&draft)
                .await
                .map_err(PlanningError::storage(failed_code, failed_message))?;

            info!(
                "Reservation created: id={}, owner={}",
                created.id, created.owner_id
            );
            Ok(Success::new(
                codes::CREATED,
                "Reservation created successfully",
                created,
            ))
        }
    }
}

#[axum::debug_handler]
pub async fn delete_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Success<String>, AppError> {
    let key = uuid_key(&id).ok_or_else(|| reservation_not_found(&id))?;

    let affected = state
        .reservations
        .delete_by_id(key)
        .await
        .map_err(PlanningError::storage(
            codes::DELETE_FAILED,
            "Error while deleting the reservation",
        ))?;

    if affected == 0 {
        return Err(reservation_not_found(&id).into());
    }

    info!("Reservation deleted: id={}", key);
    Ok(Success::new(codes::DELETED, "Reservation deleted successfully", id))
}

fn reservation_not_found(id: &str) -> PlanningError {
    PlanningError::not_found(codes::NOT_FOUND, format!("Reservation {} not found", id))
}
