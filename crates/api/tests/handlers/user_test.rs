use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use planning_api::handlers::user::create_or_update_user;
use planning_core::{
    codes::{user as codes, validation as invalid},
    models::user::{User, UserPayload},
};

use crate::test_utils::{TestContext, sample_user};

fn user_body(id: &str) -> Value {
    json!({
        "id": id,
        "firstName": "Jane",
        "lastName": "Doe",
        "displayName": "",
        "admin": false,
        "member": true,
        "group": "G1",
        "year": 2023
    })
}

#[tokio::test]
async fn test_list_users() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_find_all()
        .times(1)
        .returning(|| Ok(vec![sample_user("alice"), sample_user("bob")]));

    let server = ctx.into_server();
    let response = server.get("/api/v1/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "success");
    assert_eq!(body["code"], codes::LIST);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["data"][1]["id"], "bob");
}

#[tokio::test]
async fn test_list_users_storage_failure() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_find_all()
        .returning(|| Err(eyre::eyre!("connection refused")));

    let server = ctx.into_server();
    let response = server.get("/api/v1/users").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], codes::LIST_FAILED);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_create_then_get_user() {
    let stored: Arc<Mutex<Vec<User>>> = Arc::new(Mutex::new(Vec::new()));

    let mut ctx = TestContext::new();
    let lookup = stored.clone();
    ctx.user_repo.expect_find_by_id().returning(move |id| {
        Ok(lookup
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    });
    let sink = stored.clone();
    ctx.user_repo.expect_insert().times(1).returning(move |user| {
        sink.lock().unwrap().push(user.clone());
        Ok(user.clone())
    });

    let server = ctx.into_server();

    let created = server.post("/api/v1/users").json(&user_body("jdoe")).await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let created = created.json::<Value>();
    assert_eq!(created["code"], codes::CREATED);
    assert_eq!(created["data"]["id"], "jdoe");
    assert_eq!(created["data"]["displayName"], Value::Null);

    let fetched = server.get("/api/v1/users/jdoe").await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    let fetched = fetched.json::<Value>();
    assert_eq!(fetched["code"], codes::DETAILS);
    assert_eq!(fetched["data"], created["data"]);
}

#[tokio::test]
async fn test_create_user_with_used_id() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(sample_user(id))));
    ctx.user_repo.expect_insert().never();

    let server = ctx.into_server();
    let response = server.post("/api/v1/users").json(&user_body("jdoe")).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], codes::ID_ALREADY_USED);
}

#[tokio::test]
async fn test_create_user_without_id_skips_storage() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_find_by_id().never();
    ctx.user_repo.expect_insert().never();

    let mut body = user_body("jdoe");
    body["id"] = Value::Null;

    let server = ctx.into_server();
    let response = server.post("/api/v1/users").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], invalid::ID_INVALID);
}

#[tokio::test]
async fn test_create_user_rejects_malformed_body() {
    let ctx = TestContext::new();
    let server = ctx.into_server();

    let response = server.post("/api/v1/users").text("firstName=Jane").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], invalid::BODY_INVALID);
}

#[rstest]
#[case("firstName", json!(""), invalid::FIRSTNAME_INVALID)]
#[case("lastName", json!(null), invalid::LASTNAME_INVALID)]
#[case("displayName", json!(7), invalid::DISPLAYNAME_INVALID)]
#[case("admin", json!("yes"), invalid::ADMIN_INVALID)]
#[case("member", json!(1), invalid::MEMBER_INVALID)]
#[case("group", json!("g".repeat(101)), invalid::GROUP_INVALID)]
#[case("year", json!("2023"), invalid::YEAR_INVALID)]
#[tokio::test]
async fn test_create_user_field_errors(
    #[case] field: &str,
    #[case] value: Value,
    #[case] expected: &str,
) {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_find_by_id().returning(|_| Ok(None));
    ctx.user_repo.expect_insert().never();
    let state = ctx.into_state();

    let mut body = user_body("jdoe");
    body[field] = value;
    let payload: UserPayload = serde_json::from_value(body).unwrap();

    let error = create_or_update_user(&state, None, payload).await.unwrap_err();

    assert_eq!(error.0.code(), expected);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_find_by_id().returning(|_| Ok(None));
    ctx.user_repo.expect_update().never();

    let server = ctx.into_server();
    let mut body = user_body("ghost");
    body["id"] = Value::Null;
    let response = server.put("/api/v1/users/ghost").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], codes::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_removed_before_write() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(sample_user(id))));
    ctx.user_repo.expect_update().times(1).returning(|_| Ok(0));

    let server = ctx.into_server();
    let mut body = user_body("jdoe");
    body["id"] = Value::Null;
    let response = server.put("/api/v1/users/jdoe").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], codes::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_cannot_change_id() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(sample_user(id))));
    ctx.user_repo.expect_update().never();

    let server = ctx.into_server();
    // Same id as the path still counts as an attempt to modify it
    let response = server
        .put("/api/v1/users/jdoe")
        .json(&user_body("jdoe"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], codes::ID_NOT_MODIFIABLE);
}

#[tokio::test]
async fn test_update_user_returns_null_data() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(sample_user(id))));
    ctx.user_repo
        .expect_update()
        .times(1)
        .returning(|user| {
            assert_eq!(user.id, "jdoe");
            assert_eq!(user.display_name.as_deref(), Some("JD"));
            Ok(1)
        });

    let server = ctx.into_server();
    let response = server
        .put("/api/v1/users/jdoe")
        .json(&json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "displayName": "JD",
            "admin": true,
            "member": true,
            "group": "G2",
            "year": 2024
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["code"], codes::UPDATED);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn test_delete_user() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_delete_by_id()
        .returning(|id| Ok(if id == "jdoe" { 1 } else { 0 }));

    let server = ctx.into_server();

    let deleted = server.delete("/api/v1/users/jdoe").await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    let deleted = deleted.json::<Value>();
    assert_eq!(deleted["code"], codes::DELETED);
    assert_eq!(deleted["data"], "jdoe");

    let missing = server.delete("/api/v1/users/ghost").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>()["code"], codes::NOT_FOUND);
}
