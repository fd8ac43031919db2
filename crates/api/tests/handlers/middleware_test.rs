use axum::{BoxError, http::StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;

use planning_api::middleware::error_handling::{handle_middleware_error, map_error};
use planning_core::{codes, errors::PlanningError};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = PlanningError::not_found(codes::user::NOT_FOUND, "User jdoe not found");

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], codes::user::NOT_FOUND);
    assert_eq!(body["message"], "User jdoe not found");
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = PlanningError::validation(codes::validation::YEAR_INVALID, "The year must be a number");

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_storage() {
    let error = PlanningError::storage(codes::reservation::CREATE_FAILED, "Error while creating the reservation")(
        eyre::eyre!("unique violation"),
    );

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], codes::reservation::CREATE_FAILED);
    assert_eq!(body["message"], "Error while creating the reservation");
}

#[tokio::test]
async fn test_middleware_timeout() {
    let err: BoxError = Box::new(tower::timeout::error::Elapsed::new());

    let response = handle_middleware_error(err).await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body_json(response).await["code"], codes::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_middleware_other_failure() {
    let err: BoxError = "layer exploded".into();

    let response = handle_middleware_error(err).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], codes::INTERNAL_ERROR);
}

#[tokio::test]
async fn test_health_check() {
    let server = crate::test_utils::TestContext::new().into_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}
