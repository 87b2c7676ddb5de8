//! REST and GraphQL over the same state must agree field-for-field.

use automobile_api::{build_schema, create_router, AppState};
use automobile_core::db::open_db_in_memory;
use automobile_core::share_connection;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Rewrites a GraphQL record (string `ID`) into the REST shape (integer id).
fn normalize_graphql_record(mut record: Value) -> Value {
    let id = record["id"].as_str().unwrap().parse::<i64>().unwrap();
    record["id"] = json!(id);
    record
}

#[tokio::test]
async fn rest_and_graphql_return_same_records() {
    let state = AppState::from_connection(share_connection(open_db_in_memory().unwrap()));
    let app = create_router(state.clone());
    let schema = build_schema(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/automobiles")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "make": "Skoda", "model": "Octavia", "year": 2017 }).to_string(),
        ))
        .unwrap();
    app.clone().oneshot(request).await.unwrap();

    let response = schema
        .execute(r#"mutation { addAutomobile(make: "Opel", vin: "OPEL-1") { id } }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let request = Request::builder()
        .uri("/api/automobiles")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let rest_records: Value = serde_json::from_slice(&bytes).unwrap();

    let response = schema
        .execute("{ automobiles { id make model year vin } }")
        .await;
    let data = response.data.into_json().unwrap();
    let graphql_records = data["automobiles"]
        .as_array()
        .unwrap()
        .iter()
        .cloned()
        .map(normalize_graphql_record)
        .collect::<Vec<_>>();

    assert_eq!(rest_records.as_array().unwrap().len(), 2);
    assert_eq!(rest_records, Value::Array(graphql_records));
}
