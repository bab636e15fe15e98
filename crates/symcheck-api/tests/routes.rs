use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use symcheck_api::{AppState, app};
use symcheck_catalog::ConditionCatalog;

fn builtin_app() -> axum::Router {
    app(AppState::new(ConditionCatalog::builtin().clone()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = builtin_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn symptoms_are_sorted_vocabulary() {
    let (status, body) = get("/symptoms").await;
    assert_eq!(status, StatusCode::OK);
    let symptoms: Vec<String> = serde_json::from_value(body).unwrap();
    assert_eq!(symptoms, ConditionCatalog::builtin().all_symptoms());
}

#[tokio::test]
async fn conditions_listed_in_catalog_order() {
    let (status, body) = get("/conditions").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 7);
    assert_eq!(list[0]["name"], "Flu");
    assert_eq!(list[0]["minor"], true);
    assert_eq!(list[4]["name"], "Hypertension");
    assert_eq!(list[4]["specialist"], "Cardiologist");
}

#[tokio::test]
async fn condition_detail_and_not_found() {
    let (status, body) = get("/conditions/Malaria").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Malaria");
    assert_eq!(body["severity"], "other");
    assert_eq!(body["symptoms"].as_array().unwrap().len(), 5);

    let (status, body) = get("/conditions/Scurvy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "condition not found: Scurvy");
}

#[tokio::test]
async fn predict_from_free_text() {
    let (status, body) = post_json("/predict", json!({ "text": "Fever, COUGH , " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best_condition"], "Flu");
    assert_eq!(body["specialist"], "General Practitioner");
    assert_eq!(body["is_minor"], true);
    assert_eq!(body["telemedicine_suggested"], true);
    assert_eq!(body["ranked"][0]["condition"], "Flu");
    assert_eq!(body["ranked"][0]["score"], 40.0);
    assert_eq!(body["scores"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn predict_combines_selections_and_text() {
    let (status, body) = post_json(
        "/predict",
        json!({
            "symptoms": ["fever", "dry cough"],
            "text": "loss of smell, fatigue, shortness of breath"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best_condition"], "COVID-19");
    assert_eq!(body["ranked"][0]["score"], 100.0);
    assert_eq!(
        body["specialist"],
        "General Practitioner or Infectious Disease Specialist"
    );
    assert_eq!(body["telemedicine_suggested"], false);
}

#[tokio::test]
async fn empty_input_is_not_an_error() {
    let (status, body) = post_json("/predict", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best_condition"], "Flu");
    assert!(
        body["scores"]
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["score"] == 0.0)
    );
}

#[tokio::test]
async fn malformed_body_is_a_bad_request_with_error_body() {
    let (status, body) = send(
        Request::post("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn wrong_field_type_is_a_bad_request() {
    let (status, body) = post_json("/predict", json!({ "symptoms": "fever" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_route_passes_through_logging() {
    let response = builtin_app()
        .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
