use automobile_api::{build_schema, create_router, AppState, AutomobileSchema};
use automobile_core::db::open_db_in_memory;
use automobile_core::share_connection;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn schema() -> AutomobileSchema {
    let conn = share_connection(open_db_in_memory().unwrap());
    build_schema(AppState::from_connection(conn))
}

async fn execute(schema: &AutomobileSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn add_update_delete_scenario() {
    let schema = schema();

    let created = execute(
        &schema,
        r#"mutation {
            addAutomobile(make: "Toyota", model: "Corolla", year: 2020, vin: "ABC123") {
                id make model year vin
            }
        }"#,
    )
    .await;
    let id = created["addAutomobile"]["id"].as_str().unwrap().to_string();
    assert_eq!(
        created["addAutomobile"],
        json!({ "id": id, "make": "Toyota", "model": "Corolla", "year": 2020, "vin": "ABC123" })
    );

    let updated = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateAutomobile(id: "{id}", make: "Toyota", model: "Corolla", year: 2021, vin: "ABC123") {{
                    year
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(updated["updateAutomobile"]["year"], json!(2021));

    let loaded = execute(
        &schema,
        &format!(r#"{{ automobile(id: "{id}") {{ make model year vin }} }}"#),
    )
    .await;
    assert_eq!(
        loaded["automobile"],
        json!({ "make": "Toyota", "model": "Corolla", "year": 2021, "vin": "ABC123" })
    );

    let deleted = execute(
        &schema,
        &format!(r#"mutation {{ deleteAutomobile(id: "{id}") }}"#),
    )
    .await;
    assert_eq!(
        deleted["deleteAutomobile"],
        json!(format!("Automobile with ID {id} deleted"))
    );

    let missing = execute(
        &schema,
        &format!(r#"{{ automobile(id: "{id}") {{ id }} }}"#),
    )
    .await;
    assert_eq!(missing["automobile"], Value::Null);
}

#[tokio::test]
async fn update_with_omitted_arguments_writes_nulls() {
    let schema = schema();
    execute(
        &schema,
        r#"mutation { addAutomobile(make: "Seat", model: "Ibiza", year: 2012, vin: "V") { id } }"#,
    )
    .await;

    let updated = execute(
        &schema,
        r#"mutation { updateAutomobile(id: "1", year: 2013) { make model year vin } }"#,
    )
    .await;
    assert_eq!(
        updated["updateAutomobile"],
        json!({ "make": null, "model": null, "year": 2013, "vin": null })
    );
}

#[tokio::test]
async fn update_of_missing_record_is_null() {
    let schema = schema();
    let updated = execute(
        &schema,
        r#"mutation { updateAutomobile(id: "41", make: "Ghost") { id } }"#,
    )
    .await;
    assert_eq!(updated["updateAutomobile"], Value::Null);

    let listed = execute(&schema, "{ automobiles { id } }").await;
    assert_eq!(listed["automobiles"], json!([]));
}

#[tokio::test]
async fn non_integer_id_is_reported_in_errors_array() {
    let schema = schema();
    let response = schema.execute(r#"{ automobile(id: "abc") { id } }"#).await;
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("abc"));
}

#[tokio::test]
async fn store_failure_is_reported_in_errors_array() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE automobiles;").unwrap();
    let schema = build_schema(AppState::from_connection(share_connection(conn)));

    let response = schema.execute("{ automobiles { id } }").await;
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("no such table"));
}

#[tokio::test]
async fn graphql_endpoint_executes_posted_queries_and_serves_graphiql() {
    let conn = share_connection(open_db_in_memory().unwrap());
    let app = create_router(AppState::from_connection(conn));

    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "query": "{ automobiles { id } }" }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"], json!({ "automobiles": [] }));

    let request = Request::builder()
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));
}

async fn get_json(app: &axum::Router, uri: &str) -> Value {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_with_query_string_executes_queries_but_not_mutations() {
    let conn = share_connection(open_db_in_memory().unwrap());
    let app = create_router(AppState::from_connection(conn));

    let body = get_json(&app, "/graphql?query=%7B%20automobiles%20%7B%20id%20%7D%20%7D").await;
    assert_eq!(body["data"], json!({ "automobiles": [] }));

    let body = get_json(
        &app,
        "/graphql?query=mutation%20%7B%20addAutomobile%20%7B%20id%20%7D%20%7D",
    )
    .await;
    assert_eq!(
        body["errors"][0]["message"],
        json!("mutations must be sent with POST")
    );

    let body = get_json(&app, "/graphql?query=%7B%20automobiles%20%7B%20id%20%7D%20%7D").await;
    assert_eq!(body["data"], json!({ "automobiles": [] }));
}
