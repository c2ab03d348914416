use axum::http::StatusCode;
use serde_json::json;

use crate::tests::common::{body_json, get, post_form, post_json};

fn valid_appointment() -> serde_json::Value {
    json!({
        "nombre": "Jan Kowalski",
        "telefono": "+48 123 456 789",
        "email": "jan@example.com",
        "tratamiento": "odontologia",
        "mensaje": "Dzień dobry",
        "privacidad": true
    })
}

#[tokio::test]
async fn test_appointment_accepts_valid_json() {
    let response = post_json("/api/appointment?lang=en", &valid_appointment()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you! We'll contact you within 2 hours.");
}

#[tokio::test]
async fn test_appointment_confirmation_uses_default_locale() {
    let response = post_json("/api/appointment", &valid_appointment()).await;
    let body = body_json(response).await;
    assert_eq!(body["message"], "Dziękujemy! Skontaktujemy się w ciągu 2 godzin.");
}

#[tokio::test]
async fn test_appointment_accepts_form_encoding() {
    let form = "nombre=Jan%20Kowalski&telefono=123456789&email=jan%40example.com\
                &tratamiento=odontologia&privacidad=on";
    let response = post_form("/api/appointment", form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_appointment_rejects_bad_phone() {
    let mut payload = valid_appointment();
    payload["telefono"] = json!("call me maybe");

    let response = post_json("/api/appointment", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_validation_error_is_localized() {
    let mut payload = valid_appointment();
    payload["telefono"] = json!("nope");

    let response = post_json("/api/appointment?lang=uk", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Неприпустимі дані"), "got: {message}");

    let response = post_json("/api/appointment?lang=en", &payload).await;
    let body = body_json(response).await;
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Invalid data"), "got: {message}");
}

#[tokio::test]
async fn test_appointment_rejects_missing_fields() {
    let response = post_json("/api/appointment", &json!({ "nombre": "Jan" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_doctors_returns_full_team() {
    let response = get("/api/doctors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let doctors = body.as_array().expect("doctor array");
    assert_eq!(doctors.len(), 18);
}

#[tokio::test]
async fn test_list_doctors_filters_by_category() {
    let response = get("/api/doctors?category=cardiologia").await;
    let body = body_json(response).await;
    let doctors = body.as_array().expect("doctor array");

    assert!(!doctors.is_empty());
    assert!(doctors.iter().all(|d| d["category"] == "cardiologia"));
}

#[tokio::test]
async fn test_list_doctors_all_category_is_unfiltered() {
    let response = get("/api/doctors?category=all").await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("doctor array").len(), 18);
}

#[tokio::test]
async fn test_list_doctors_localizes_text() {
    let response = get("/api/doctors?lang=uk").await;
    let body = body_json(response).await;
    let doctors = body.as_array().expect("doctor array");

    assert!(doctors.iter().all(|d| !d["role"].as_str().unwrap_or_default().is_empty()));
    assert!(doctors.iter().all(|d| !d["bio"].as_str().unwrap_or_default().is_empty()));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = get("/api/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/appointment"].is_object());
    assert!(body["paths"]["/api/doctors"].is_object());
}
