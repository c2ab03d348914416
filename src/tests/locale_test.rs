use axum::http::{StatusCode, header};

use crate::tests::common::{body_string, get, get_with_cookie};

#[tokio::test]
async fn test_default_locale_is_polish() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("lang=\"pl\""));
    assert!(body.contains("Strona główna"));
}

#[tokio::test]
async fn test_query_param_selects_locale() {
    let response = get("/?lang=uk").await;
    let body = body_string(response).await;
    assert!(body.contains("lang=\"uk\""));
    assert!(body.contains("Головна"));
}

#[tokio::test]
async fn test_query_param_overrides_cookie() {
    let response = get_with_cookie("/?lang=uk", "lang=en").await;
    let body = body_string(response).await;
    assert!(body.contains("lang=\"uk\""));
}

#[tokio::test]
async fn test_cookie_selects_locale() {
    let response = get_with_cookie("/", "lang=en").await;
    let body = body_string(response).await;
    assert!(body.contains("lang=\"en\""));
    assert!(body.contains("Home"));
}

#[tokio::test]
async fn test_invalid_query_value_falls_back_to_default() {
    let response = get("/?lang=xx").await;
    let body = body_string(response).await;
    assert!(body.contains("lang=\"pl\""));
}

#[tokio::test]
async fn test_invalid_cookie_value_falls_back_to_default() {
    let response = get_with_cookie("/", "lang=de").await;
    let body = body_string(response).await;
    assert!(body.contains("lang=\"pl\""));
}

#[tokio::test]
async fn test_region_code_maps_to_base_language() {
    let response = get("/?lang=en-US").await;
    let body = body_string(response).await;
    assert!(body.contains("lang=\"en\""));
}

#[tokio::test]
async fn test_explicit_selection_sets_year_long_cookie() {
    let response = get("/?lang=en").await;
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header");

    assert!(set_cookie.contains("lang=en"));
    assert!(set_cookie.contains("Max-Age=31536000"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_implicit_resolution_does_not_set_cookie() {
    let response = get_with_cookie("/", "lang=en").await;
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let response = get("/").await;
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}
