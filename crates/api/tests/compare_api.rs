//! Integration tests for `/api/v1/compare/{first_id}/{second_id}`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use serde_json::Value;

fn row<'a>(json: &'a Value, label: &str) -> &'a Value {
    json["data"]["table"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["label"] == label)
        .unwrap_or_else(|| panic!("missing row {label}"))
}

#[tokio::test]
async fn compare_returns_both_records_in_slot_order() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/compare/5/7").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["table"]["first"]["id"], 5);
    assert_eq!(json["data"]["table"]["second"]["id"], 7);
}

#[tokio::test]
async fn compare_rows_mark_the_better_side() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/compare/5/7").await).await;

    let price = row(&json, "Price");
    assert_eq!(price["section"], "Overview");
    assert_eq!(price["first"], "$16,399");
    assert_eq!(price["second"], "$17,895");
    assert_eq!(price["winner"], "first");

    let displacement = row(&json, "Displacement");
    assert_eq!(displacement["first"], "998cc");
    assert_eq!(displacement["winner"], "second");

    // Lighter wins.
    assert_eq!(row(&json, "Dry Weight")["winner"], "second");

    let power = row(&json, "Max Power");
    assert_eq!(power["second"], "205 hp @ 13,500 rpm");
    assert_eq!(power["winner"], "equal");
}

#[tokio::test]
async fn compare_includes_suggestions_outside_the_pair() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/compare/5/7").await).await;

    let similar = json["data"]["similar"].as_array().unwrap();
    let ids: Vec<i64> = similar.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![6]);
    assert!(similar[0]["matchPercentage"].is_u64());
}

#[tokio::test]
async fn suggestions_are_scored_against_the_first_slot() {
    let app = common::build_test_app();
    let forward = body_json(get(app.clone(), "/api/v1/compare/5/6").await).await;
    let reverse = body_json(get(app, "/api/v1/compare/6/5").await).await;

    // Only the S1000RR remains; its score depends on the reference.
    assert_eq!(forward["data"]["similar"][0]["id"], 7);
    assert_eq!(forward["data"]["similar"][0]["matchPercentage"], 99);
    assert_eq!(reverse["data"]["similar"][0]["id"], 7);
    assert_ne!(reverse["data"]["similar"][0]["matchPercentage"], 99);
}

#[tokio::test]
async fn compare_unknown_id_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/compare/5/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn compare_malformed_id_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/compare/5/ninja").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
