use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use car_inventory::config::environment::EnvironmentConfig;
use car_inventory::{create_app, with_middleware};
use car_inventory::state::AppState;
use car_inventory::store::InventoryStore;

// Helper to build an app over an empty store
fn create_test_app() -> Router {
    let state = AppState::new(InventoryStore::new(), EnvironmentConfig::default());
    create_app(state)
}

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

async fn create_camry(app: &Router) -> Value {
    let response = send(
        app,
        Method::POST,
        "/api/cars",
        Some(json!({ "name": "Toyota Camry", "category": "Sedan", "price": 2500000 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_root_status_is_plain_text() {
    let app = create_test_app();
    let response = send(&app, Method::GET, "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Cars API");
    assert!(response.content_type.unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_full_crud_scenario() {
    let app = create_test_app();

    let created = create_camry(&app).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(
        created,
        json!({
            "id": id,
            "name": "Toyota Camry",
            "category": "Sedan",
            "description": "",
            "price": 2500000,
            "stock": 0
        })
    );

    let fetched = send(&app, Method::GET, &format!("/api/cars/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created);

    let patched = send(
        &app,
        Method::PATCH,
        &format!("/api/cars/{}", id),
        Some(json!({ "stock": 5 })),
    )
    .await;
    assert_eq!(patched.status, StatusCode::OK);
    let mut expected = created.clone();
    expected["stock"] = json!(5);
    assert_eq!(patched.json(), expected);

    let deleted = send(&app, Method::DELETE, &format!("/api/cars/{}", id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_empty());

    let gone = send(&app, Method::GET, &format!("/api/cars/{}", id), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.json()["error"], "Car not found");
}

#[tokio::test]
async fn test_legacy_prefix_shares_the_collection() {
    let app = create_test_app();
    let created = create_camry(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = send(&app, Method::GET, &format!("/cars/{}", id), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), created);

    let list = send(&app, Method::GET, "/cars", None).await;
    assert_eq!(list.json().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_after_creates_and_deletes() {
    let app = create_test_app();
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(create_camry(&app).await["id"].as_str().unwrap().to_string());
    }

    for id in &ids[..2] {
        let response = send(&app, Method::DELETE, &format!("/api/cars/{}", id), None).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    let list = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(list.status, StatusCode::OK);
    let listed: Vec<String> = list
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|car| car["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, ids[2..].to_vec());
}

#[tokio::test]
async fn test_create_with_invalid_fields_is_rejected() {
    let app = create_test_app();

    for body in [
        json!({ "name": "Toyota Camry", "category": "Sedan" }),
        json!({ "name": "", "category": "Sedan", "price": 100 }),
        json!({ "name": "Toyota Camry", "category": "  ", "price": 100 }),
        json!({ "name": "Toyota Camry", "category": "Sedan", "price": -100 }),
        json!({ "name": "Toyota Camry", "category": "Sedan", "price": "a lot" }),
    ] {
        let response = send(&app, Method::POST, "/api/cars", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let error = response.json();
        assert!(error["error"].is_string());
        assert_eq!(error["code"], "INVALID_INPUT");
    }

    let list = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(list.json(), json!([]));
}

#[tokio::test]
async fn test_create_coerces_and_trims() {
    let app = create_test_app();
    let response = send(
        &app,
        Method::POST,
        "/api/cars",
        Some(json!({
            "name": "  BMW X5 ",
            "category": " SUV",
            "description": " Powerful premium SUV  ",
            "price": "6800000",
            "stock": "plenty"
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let car = response.json();
    assert_eq!(car["name"], "BMW X5");
    assert_eq!(car["category"], "SUV");
    assert_eq!(car["description"], "Powerful premium SUV");
    assert_eq!(car["price"], 6800000);
    assert_eq!(car["stock"], 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cars")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_update_keeps_id_and_unsupplied_fields() {
    let app = create_test_app();
    let created = create_camry(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/cars/{}", id),
        Some(json!({ "id": "other", "description": " Family sedan ", "price": 2400000 })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let car = response.json();
    assert_eq!(car["id"], created["id"]);
    assert_eq!(car["name"], created["name"]);
    assert_eq!(car["category"], created["category"]);
    assert_eq!(car["stock"], created["stock"]);
    assert_eq!(car["description"], "Family sedan");
    assert_eq!(car["price"], 2400000);
}

#[tokio::test]
async fn test_update_with_nothing_to_update() {
    let app = create_test_app();
    let created = create_camry(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = send(&app, Method::PATCH, &format!("/api/cars/{}", id), Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Nothing to update");

    let unchanged = send(&app, Method::GET, &format!("/api/cars/{}", id), None).await;
    assert_eq!(unchanged.json(), created);
}

#[tokio::test]
async fn test_update_and_delete_unknown_car() {
    let app = create_test_app();

    let response = send(
        &app,
        Method::PATCH,
        "/api/cars/missing",
        Some(json!({ "stock": 1 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], "NOT_FOUND");

    let response = send(&app, Method::DELETE, "/api/cars/missing", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Car not found");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = create_test_app();
    let response = send(&app, Method::GET, "/api/trucks", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Not found");
}

#[tokio::test]
async fn test_seeded_state_lists_example_cars() {
    let app = create_app(AppState::from_config(EnvironmentConfig::default()));
    let response = send(&app, Method::GET, "/api/cars", None).await;

    let cars = response.json();
    let cars = cars.as_array().unwrap();
    assert_eq!(cars.len(), 10);
    assert_eq!(cars[0]["name"], "Toyota Camry");
    assert_eq!(cars[9]["name"], "Lada Vesta");
}

#[tokio::test]
async fn test_array_bodies_are_rejected() {
    let app = create_test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/cars",
        Some(json!(["Camry", "Sedan", null, 100, null])),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "INVALID_INPUT");

    let list = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(list.json(), json!([]));

    let created = create_camry(&app).await;
    let id = created["id"].as_str().unwrap();

    for body in [json!(["Renamed"]), json!(["Renamed", "SUV", "", 1, 1])] {
        let response = send(&app, Method::PATCH, &format!("/api/cars/{}", id), Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["code"], "INVALID_INPUT");
    }

    let unchanged = send(&app, Method::GET, &format!("/api/cars/{}", id), None).await;
    assert_eq!(unchanged.json(), created);
}

#[tokio::test]
async fn test_scalar_body_is_rejected() {
    let app = create_test_app();
    let response = send(&app, Method::POST, "/api/cars", Some(json!("Toyota Camry"))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn test_unsupported_method_is_json_not_found() {
    let app = create_test_app();
    let created = create_camry(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/cars/{}", id),
        Some(json!({ "stock": 9 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Not found");

    let response = send(&app, Method::DELETE, "/api/cars", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Not found");

    let response = send(&app, Method::POST, "/health", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], "NOT_FOUND");

    let unchanged = send(&app, Method::GET, &format!("/api/cars/{}", id), None).await;
    assert_eq!(unchanged.json(), created);
}

#[tokio::test]
async fn test_handler_panic_is_generic_internal_error() {
    let router = Router::new().route(
        "/explode",
        get(|| async {
            panic!("database password is hunter2");
            #[allow(unreachable_code)]
            ()
        }),
    );
    let app = with_middleware(router, &[]);

    let response = send(&app, Method::GET, "/explode", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({ "error": "Internal server error", "code": "INTERNAL_ERROR" })
    );
    assert!(!response.text().contains("hunter2"));
}
