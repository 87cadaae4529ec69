//! HTTP API tests driving the router directly, without a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use employee_maintenance::{create_router, Container, ContainerConfig};

fn new_app() -> Router {
    let container = Container::new(ContainerConfig {
        server_url: "http://localhost:8080".to_string(),
    });
    create_router(&container)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::DELETE, uri, None).await
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_create_department_assigns_id() {
    let app = new_app();

    let (status, body) = post(&app, "/departments", json!({"name": "Engineering"})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse(&body), json!({"id": 1, "name": "Engineering"}));
}

#[tokio::test]
async fn test_department_scenario_does_not_reuse_deleted_id() {
    let app = new_app();

    post(&app, "/departments", json!({"name": "Engineering"})).await;
    let (_, body) = post(&app, "/departments", json!({"name": "Marketing"})).await;
    assert_eq!(parse(&body)["id"], 2);

    let (status, body) = delete(&app, "/departments/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, body) = post(&app, "/departments", json!({"name": "HR"})).await;
    assert_eq!(parse(&body), json!({"id": 3, "name": "HR"}));
}

#[tokio::test]
async fn test_list_employees() {
    let app = new_app();

    let (status, body) = get(&app, "/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));

    for name in ["John", "Jane"] {
        post(&app, "/employees", json!({"firstName": name})).await;
    }

    let (status, body) = get(&app, "/employees").await;
    assert_eq!(status, StatusCode::OK);
    let mut names: Vec<String> = parse(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["firstName"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Jane", "John"]);
}

#[tokio::test]
async fn test_get_employee_round_trips_nested_department() {
    let app = new_app();
    let employee = json!({
        "id": 5,
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com",
        "department": {"id": 1, "name": "Engineering"}
    });

    post(&app, "/employees", employee.clone()).await;
    let (status, body) = get(&app, "/employees/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), employee);
}

#[tokio::test]
async fn test_get_missing_record_is_404() {
    let app = new_app();

    let (status, body) = get(&app, "/employees/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "employee not found: 42");
}

#[tokio::test]
async fn test_non_integer_id_is_400() {
    let app = new_app();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/departments/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid department ID");
    }

    let (status, _) = put(&app, "/departments/1.5", json!({"id": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unparsable_body_is_400() {
    let app = new_app();

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send_request(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/employees", json!({"id": "seven"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let no_content_type = Request::builder()
        .method(Method::POST)
        .uri("/employees")
        .body(Body::from(r#"{"firstName": "John"}"#))
        .unwrap();
    let (status, _) = send_request(&app, no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/employees").await;
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_400() {
    let app = new_app();
    post(&app, "/departments", json!({"name": "Engineering"})).await;

    let (status, body) = put(&app, "/departments/1", json!({"id": 2, "name": "Platform"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "ID in body does not match ID in URL");
    let (_, body) = get(&app, "/departments/1").await;
    assert_eq!(parse(&body)["name"], "Engineering");
}

#[tokio::test]
async fn test_update_missing_record_is_404() {
    let app = new_app();

    let (status, body) = put(&app, "/departments/9", json!({"id": 9, "name": "Ghost"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "department not found: 9");
    let (_, body) = get(&app, "/departments").await;
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn test_update_replaces_whole_employee() {
    let app = new_app();
    let original = json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com",
        "department": {"id": 1, "name": "Engineering"}
    });
    post(&app, "/employees", original).await;

    let (status, body) = put(&app, "/employees/1", json!({"id": 1, "firstName": "Johnny"})).await;

    assert_eq!(status, StatusCode::OK);
    let expected = json!({
        "id": 1,
        "firstName": "Johnny",
        "lastName": "",
        "email": "",
        "department": {"id": 0, "name": ""}
    });
    assert_eq!(parse(&body), expected);
    let (_, body) = get(&app, "/employees/1").await;
    assert_eq!(parse(&body), expected);
}

#[tokio::test]
async fn test_delete_twice_is_404() {
    let app = new_app();
    post(&app, "/employees", json!({"firstName": "John"})).await;

    let (status, _) = delete(&app, "/employees/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = delete(&app, "/employees/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stores_are_independent() {
    let app = new_app();
    post(&app, "/departments", json!({"name": "Engineering"})).await;

    let (_, body) = post(&app, "/employees", json!({"firstName": "John"})).await;
    assert_eq!(parse(&body)["id"], 1);

    // A second container starts empty.
    let other = new_app();
    let (_, body) = get(&other, "/departments").await;
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn test_openapi_description_is_served() {
    let app = new_app();

    let request = Request::builder()
        .uri("/api/openapi.yaml")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/yaml"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let spec = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(spec.starts_with("openapi: 3"));
    assert!(spec.contains("/employees/{id}:"));
    assert!(spec.contains("/departments/{id}:"));
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let app = new_app();

    let (status, body) = get(&app, "/swagger").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("SwaggerUIBundle"));
    assert!(body.contains("/api/openapi.yaml"));
}

#[tokio::test]
async fn test_null_id_is_auto_assigned() {
    let app = new_app();

    let (status, body) = post(&app, "/departments", json!({"id": null, "name": "HR"})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse(&body), json!({"id": 1, "name": "HR"}));
}
