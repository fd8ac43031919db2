use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use planning_core::{
    codes::user as codes,
    errors::PlanningError,
    models::user::{User, UserPayload},
    validation,
};
use std::sync::Arc;
use tracing::info;

use super::{Success, json_body};
use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Success<Vec<User>>, AppError> {
    let users = state
        .users
        .find_all()
        .await
        .map_err(PlanningError::storage(
            codes::LIST_FAILED,
            "Error while retrieving the list of users",
        ))?;

    Ok(Success::new(codes::LIST, "List of users", users))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Success<User>, AppError> {
    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(PlanningError::storage(
            codes::GET_FAILED,
            "Error while retrieving the user",
        ))?
        .ok_or_else(|| user_not_found(&id))?;

    Ok(Success::new(codes::DETAILS, "User details", user))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Success<User>, AppError> {
    create_or_update_user(&state, None, json_body(payload)?).await
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Success<User>, AppError> {
    create_or_update_user(&state, Some(id), json_body(payload)?).await
}

/// Creates the user when `id` is `None`, otherwise replaces the user `id`.
///
/// Validation order: target existence and id immutability (update) or id
/// shape and availability (create), then first name, last name, display
/// name, admin, member, group and year. The first failure is returned.
pub async fn create_or_update_user(
    state: &ApiState,
    id: Option<String>,
    payload: UserPayload,
) -> Result<Success<User>, AppError> {
    let updating = id.is_some();

    let id = match id {
        Some(id) => {
            let existing = state
                .users
                .find_by_id(&id)
                .await
                .map_err(PlanningError::storage(
                    codes::UPDATE_FAILED,
                    "Error while updating the user",
                ))?;
            if existing.is_none() {
                return Err(user_not_found(&id).into());
            }
            validation::user::id_unchanged(&payload)?;
            id
        }
        None => {
            let id = validation::user::new_id(&payload)?;
            let taken = state
                .users
                .find_by_id(&id)
                .await
                .map_err(PlanningError::storage(
                    codes::CREATE_FAILED,
                    "Error while creating the user",
                ))?;
            if taken.is_some() {
                return Err(
                    PlanningError::validation(codes::ID_ALREADY_USED, "This id is already used")
                        .into(),
                );
            }
            id
        }
    };

    let user = validation::user::fields(&payload)?.into_user(id);

    if updating {
        let affected = state
            .users
            .update(&user)
            .await
            .map_err(PlanningError::storage(
                codes::UPDATE_FAILED,
                "Error while updating the user",
            ))?;

        // Deleted between the lookup and the update
        if affected == 0 {
            return Err(user_not_found(&user.id).into());
        }

        info!("User updated: id={}", user.id);
        Ok(Success::empty(codes::UPDATED, "User updated successfully"))
    } else {
        let created = state
            .users
            .insert(&user)
            .await
            .map_err(PlanningError::storage(
                codes::CREATE_FAILED,
                "Error while creating the user",
            ))?;

        info!("User created: id={}", created.id);
        Ok(Success::new(codes::CREATED, "User created successfully", created))
    }
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Success<String>, AppError> {
    let affected = state
        .users
        .delete_by_id(&id)
        .await
        .map_err(PlanningError::storage(
            codes::DELETE_FAILED,
            "Error while deleting the user",
        ))?;

    if affected == 0 {
        return Err(user_not_found(&id).into());
    }

    info!("User deleted: id={}", id);
    Ok(Success::new(codes::DELETED, "User deleted successfully", id))
}

fn user_not_found(id: &str) -> PlanningError {
    PlanningError::not_found(codes::NOT_FOUND, format!("User {} not found", id))
}
