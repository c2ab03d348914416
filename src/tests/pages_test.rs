use axum::http::StatusCode;

use crate::tests::common::{body_string, get};

fn count_doctor_cards(body: &str) -> usize {
    body.matches("<article class=\"doctor-card").count()
}

#[tokio::test]
async fn test_home_renders_all_sections() {
    let response = get("/?lang=es").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("id=\"servicios\""));
    assert!(body.contains("id=\"especialistas\""));
    assert!(body.contains("id=\"testimonios\""));
    assert!(body.contains("id=\"cita\""));
    assert!(body.contains("id=\"contacto\""));
    // Hook for the client-side parallax module
    assert!(body.contains("data-parallax"));
}

#[tokio::test]
async fn test_home_shows_four_featured_doctors() {
    let response = get("/").await;
    let body = body_string(response).await;
    assert_eq!(count_doctor_cards(&body), 4);
}

#[tokio::test]
async fn test_home_shows_twelve_services() {
    let response = get("/").await;
    let body = body_string(response).await;
    assert_eq!(body.matches("<article class=\"service-card").count(), 12);
}

#[tokio::test]
async fn test_doctors_page_lists_full_team() {
    let response = get("/especialistas").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert_eq!(count_doctor_cards(&body), 18);
}

#[tokio::test]
async fn test_doctors_page_filters_by_category() {
    let response = get("/especialistas?category=cardiologia").await;
    let body = body_string(response).await;

    assert!(body.contains("data-category=\"cardiologia\""));
    assert!(!body.contains("data-category=\"odontologia\""));
}

#[tokio::test]
async fn test_doctors_page_all_category_is_unfiltered() {
    let response = get("/especialistas?category=all").await;
    let body = body_string(response).await;
    assert_eq!(count_doctor_cards(&body), 18);
}

#[tokio::test]
async fn test_doctors_page_localizes_roles() {
    let response = get("/especialistas?lang=en").await;
    let body = body_string(response).await;
    assert!(body.contains("Oncological Surgeon"));

    let response = get("/especialistas?lang=pl").await;
    let body = body_string(response).await;
    assert!(body.contains("Chirurg Onkolog"));
}

#[tokio::test]
async fn test_services_page_renders() {
    let response = get("/servicios?lang=en").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Dentistry"));
    assert!(body.contains("Cardiology"));
}

#[tokio::test]
async fn test_legal_pages_render() {
    for path in ["/privacidad", "/regulamin", "/cookies"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path} should render");
    }
}

#[tokio::test]
async fn test_unknown_route_renders_localized_404() {
    let response = get("/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Strona nie znaleziona"));

    let response = get("/no-such-page?lang=en").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Page Not Found"));
}
