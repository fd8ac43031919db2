use axum::http::StatusCode;
use chrono::NaiveDate;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use planning_core::{
    codes::{disponibility as codes, validation as invalid},
    models::disponibility::Disponibility,
};

use crate::test_utils::TestContext;

fn disponibility_body() -> Value {
    json!({
        "day": 1,
        "startDate": "2023-01-02",
        "endDate": "2023-03-27",
        "openningTime": 8.5,
        "closingTime": 18
    })
}

fn sample_disponibility(id: Uuid) -> Disponibility {
    Disponibility {
        id,
        day: 1,
        start_date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2023, 3, 27).unwrap(),
        opening_time: 8.5,
        closing_time: 18.0,
    }
}

#[tokio::test]
async fn test_list_disponibilities_uses_wire_names() {
    let mut ctx = TestContext::new();
    ctx.disponibility_repo
        .expect_find_all()
        .returning(|| Ok(vec![sample_disponibility(Uuid::new_v4())]));

    let server = ctx.into_server();
    let response = server.get("/api/v1/disponibilities").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["code"], codes::LIST);
    assert_eq!(body["data"][0]["openningTime"], 8.5);
    assert_eq!(body["data"][0]["startDate"], "2023-01-02");
}

#[tokio::test]
async fn test_create_disponibility() {
    let mut ctx = TestContext::new();
    ctx.disponibility_repo
        .expect_insert()
        .times(1)
        .returning(|draft| Ok(draft.clone().into_disponibility(Uuid::new_v4())));

    let server = ctx.into_server();
    let response = server
        .post("/api/v1/disponibilities")
        .json(&disponibility_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["code"], codes::CREATED);
    assert_eq!(body["data"]["closingTime"], 18.0);
    assert_eq!(body["data"]["day"], 1);
}

#[rstest]
#[case("day", json!(7), invalid::DAY_INVALID)]
#[case("startDate", json!("2023-1-2"), invalid::START_DATE_INVALID)]
#[case("endDate", json!("2022-12-31"), invalid::DATE_RANGE_INVALID)]
#[case("openningTime", json!(24), invalid::OPENNING_TIME_INVALID)]
#[case("closingTime", json!(0), invalid::CLOSING_TIME_INVALID)]
#[case("closingTime", json!(8), invalid::TIME_RANGE_INVALID)]
#[tokio::test]
async fn test_create_disponibility_errors(
    #[case] field: &str,
    #[case] value: Value,
    #[case] expected: &str,
) {
    let mut ctx = TestContext::new();
    ctx.disponibility_repo.expect_insert().never();

    let mut body = disponibility_body();
    body[field] = value;

    let server = ctx.into_server();
    let response = server.post("/api/v1/disponibilities").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], expected);
}

#[tokio::test]
async fn test_update_unknown_disponibility() {
    let mut ctx = TestContext::new();
    ctx.disponibility_repo
        .expect_update()
        .returning(|_, _| Ok(0));

    let server = ctx.into_server();
    let response = server
        .put(&format!("/api/v1/disponibilities/{}", Uuid::new_v4()))
        .json(&disponibility_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], codes::NOT_FOUND);
}

#[tokio::test]
async fn test_get_and_delete_disponibility() {
    let id = Uuid::new_v4();

    let mut ctx = TestContext::new();
    ctx.disponibility_repo
        .expect_find_by_id()
        .returning(move |key| Ok((key == id).then(|| sample_disponibility(key))));
    ctx.disponibility_repo
        .expect_delete_by_id()
        .with(predicate::eq(id))
        .times(1)
        .returning(|_| Ok(1));

    let server = ctx.into_server();

    let fetched = server.get(&format!("/api/v1/disponibilities/{}", id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>()["code"], codes::DETAILS);

    let deleted = server
        .delete(&format!("/api/v1/disponibilities/{}", id))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    let deleted = deleted.json::<Value>();
    assert_eq!(deleted["code"], codes::DELETED);
    assert_eq!(deleted["data"], id.to_string());
}
