use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use planning_core::{
    codes::disponibility as codes,
    errors::PlanningError,
    models::disponibility::{Disponibility, DisponibilityPayload},
    validation,
};
use std::sync::Arc;
use tracing::info;

use super::{Success, json_body, uuid_key};
use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn list_disponibilities(
    State(state): State<Arc<ApiState>>,
) -> Result<Success<Vec<Disponibility>>, AppError> {
    let disponibilities = state
        .disponibilities
        .find_all()
        .await
        .map_err(PlanningError::storage(
            codes::LIST_FAILED,
            "Error while retrieving the list of disponibilities",
        ))?;

    Ok(Success::new(
        codes::LIST,
        "List of disponibilities",
        disponibilities,
    ))
}

#[axum::debug_handler]
pub async fn get_disponibility(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Success<Disponibility>, AppError> {
    let key = uuid_key(&id).ok_or_else(|| disponibility_not_found(&id))?;

    let disponibility = state
        .disponibilities
        .find_by_id(key)
        .await
        .map_err(PlanningError::storage(
            codes::GET_FAILED,
            "Error while retrieving the disponibility",
        ))?
        .ok_or_else(|| disponibility_not_found(&id))?;

    Ok(Success::new(codes::DETAILS, "Disponibility details", disponibility))
}

#[axum::debug_handler]
pub async fn create_disponibility(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<DisponibilityPayload>, JsonRejection>,
) -> Result<Success<Disponibility>, AppError> {
    create_or_update_disponibility(&state, None, json_body(payload)?).await
}

#[axum::debug_handler]
pub async fn update_disponibility(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<DisponibilityPayload>, JsonRejection>,
) -> Result<Success<Disponibility>, AppError> {
    create_or_update_disponibility(&state, Some(id), json_body(payload)?).await
}

/// Creates a disponibility when `id` is `None`, otherwise replaces it.
pub async fn create_or_update_disponibility(
    state: &ApiState,
    id: Option<String>,
    payload: DisponibilityPayload,
) -> Result<Success<Disponibility>, AppError> {
    let draft = validation::disponibility::draft(&payload)?;

    match id {
        Some(id) => {
            let key = uuid_key(&id).ok_or_else(|| disponibility_not_found(&id))?;
            let affected = state
                .disponibilities
                .update(key, &draft)
                .await
                .map_err(PlanningError::storage(
                    codes::UPDATE_FAILED,
                    "Error while updating the disponibility",
                ))?;

            if affected == 0 {
                return Err(disponibility_not_found(&id).into());
            }

            info!("Disponibility updated: id={}", key);
            Ok(Success::empty(
                codes::UPDATED,
                "Disponibility updated successfully",
            ))
        }
        None => {
            let created = state
                .disponibilities
                .insert(&draft)
                .await
                .map_err(PlanningError::storage(
                    codes::CREATE_FAILED,
                    "Error while creating the disponibility",
                ))?;

            info!("Disponibility created: id={}, day={}", created.id, created.day);
            Ok(Success::new(
                codes::CREATED,
                "Disponibility created successfully",
                created,
            ))
        }
    }
}

#[axum::debug_handler]
pub async fn delete_disponibility(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Success<String>, AppError> {
    let key = uuid_key(&id).ok_or_else(|| disponibility_not_found(&id))?;

    let affected = state
        .disponibilities
        .delete_by_id(key)
        .await
        .map_err(PlanningError::storage(
            codes::DELETE_FAILED,
            "Error while deleting the disponibility",
        ))?;

    if affected == 0 {
        return Err(disponibility_not_found(&id).into());
    }

    info!("Disponibility deleted: id={}", key);
    Ok(Success::new(
        codes::DELETED,
        "Disponibility deleted successfully",
        id,
    ))
}

fn disponibility_not_found(id: &str) -> PlanningError {
    PlanningError::not_found(codes::NOT_FOUND, format!("Disponibility {} not found", id))
}
