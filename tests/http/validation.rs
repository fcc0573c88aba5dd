use item_registry::{Item, Registry};
use serde_json::{json, Value};

use crate::support::{start_server, TestApp};

async fn post_item(app: &TestApp, body: Value) -> reqwest::Response {
    app.client
        .post(app.url("/items"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

fn failed_fields(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn boundary_values_are_rejected() {
    let app = start_server().await;

    let cases = [
        (json!({ "id": 1, "name": "Pen", "price": 0 }), "price"),
        (json!({ "id": 1, "name": "", "price": 1.0 }), "name"),
        (json!({ "id": 0, "name": "Pen", "price": 1.0 }), "id"),
        (json!({ "id": -4, "name": "Pen", "price": 1.0 }), "id"),
        (json!({ "id": 1, "name": "n".repeat(51), "price": 1.0 }), "name"),
        (
            json!({ "id": 1, "name": "Pen", "price": 1.0, "description": "d".repeat(201) }),
            "description",
        ),
    ];

    for (payload, field) in cases {
        let resp = post_item(&app, payload.clone()).await;
        assert_eq!(resp.status(), 422, "payload {payload}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(failed_fields(&body), vec![field], "payload {payload}");
        assert!(body["detail"].as_str().unwrap().contains(field));
    }

    assert!(app.registry.is_empty().unwrap());
}

#[tokio::test]
async fn limits_are_inclusive() {
    let app = start_server().await;

    let resp = post_item(
        &app,
        json!({
            "id": 1,
            "name": "n".repeat(50),
            "price": 0.01,
            "description": "d".repeat(200),
        }),
    )
    .await;
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn missing_fields_are_listed() {
    let app = start_server().await;

    let resp = post_item(&app, json!({ "description": "only this" })).await;
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(failed_fields(&body), vec!["id", "name", "price"]);
}

#[tokio::test]
async fn explicit_null_description_is_allowed() {
    let app = start_server().await;

    let resp = post_item(
        &app,
        json!({ "id": 5, "name": "Cap", "price": 2.5, "description": null }),
    )
    .await;
    assert_eq!(resp.status(), 201);
    assert_eq!(app.registry.get(5).unwrap().description(), None);
}

#[tokio::test]
async fn wrong_types_and_bad_json_are_422() {
    let app = start_server().await;

    let resp = post_item(&app, json!({ "id": "one", "name": "Pen", "price": 1.0 })).await;
    assert_eq!(resp.status(), 422);

    let resp = app
        .client
        .post(app.url("/items"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].is_string());

    assert!(app.registry.is_empty().unwrap());
}

#[tokio::test]
async fn non_integer_path_id_is_422() {
    let app = start_server().await;

    let resp = app.client.get(app.url("/items/abc")).send().await.unwrap();
    assert_eq!(resp.status(), 422);

    let resp = app.client.delete(app.url("/items/1.5")).send().await.unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn invalid_update_leaves_item_untouched() {
    let app = start_server().await;
    let pen = Item::new(1, "Pen", 1.5, None).unwrap();
    app.registry.create(pen.clone()).unwrap();

    let resp = app
        .client
        .put(app.url("/items/1"))
        .json(&json!({ "id": 1, "name": "Pen", "price": -2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    // validation runs before the lookup
    let resp = app
        .client
        .put(app.url("/items/99"))
        .json(&json!({ "id": 99, "name": "" , "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    assert_eq!(app.registry.list().unwrap(), vec![pen]);
}
