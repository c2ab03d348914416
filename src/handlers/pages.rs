//! HTML page handlers
//!
//! Thin controllers: read the resolved locale from the request extensions,
//! run the projection functions, hand the view models plus the locale's
//! UI-string bundle to the template renderer.

use std::sync::Arc;

use axum::{
    Extension,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tera::Context;

use crate::AppState;
use crate::models::CLINIC;
use crate::services::{project_doctors, project_services, project_testimonials};
use crate::utils::{ApiResult, Locale, templates};

/// Number of doctors shown in the featured section of the home page.
const HOME_FEATURED_DOCTORS: usize = 4;

/// Base context shared by every page: translation bundle, locale code,
/// clinic details and the active page marker for the navigation.
fn page_context(locale: Locale, page: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("t", locale.bundle());
    ctx.insert("lang", locale.as_str());
    ctx.insert("clinic", &CLINIC);
    ctx.insert("page", page);
    ctx
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> ApiResult<Html<String>> {
    tracing::debug!(locale = %locale, "rendering home page");
    let doctors = project_doctors(locale);
    let featured = &doctors[..doctors.len().min(HOME_FEATURED_DOCTORS)];

    let mut ctx = page_context(locale, "home");
    ctx.insert("services", &project_services(locale));
    ctx.insert("doctors", featured);
    ctx.insert("testimonials", &project_testimonials(locale));
    templates::render(&state.templates, "index.html", &ctx)
}

#[derive(Debug, Deserialize)]
pub struct DoctorsPageQuery {
    pub category: Option<String>,
}

pub async fn doctors(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
    Query(query): Query<DoctorsPageQuery>,
) -> ApiResult<Html<String>> {
    let mut doctors = project_doctors(locale);
    if let Some(category) = query.category.as_deref().filter(|c| *c != "all") {
        doctors.retain(|d| d.category == category);
    }

    let mut ctx = page_context(locale, "doctors");
    ctx.insert("doctors", &doctors);
    ctx.insert("categories", &project_services(locale));
    ctx.insert("category", &query.category);
    templates::render(&state.templates, "doctors.html", &ctx)
}

pub async fn services(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> ApiResult<Html<String>> {
    let mut ctx = page_context(locale, "services");
    ctx.insert("services", &project_services(locale));
    templates::render(&state.templates, "services.html", &ctx)
}

pub async fn privacy(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> ApiResult<Html<String>> {
    templates::render(&state.templates, "privacy.html", &page_context(locale, "privacy"))
}

pub async fn terms(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> ApiResult<Html<String>> {
    templates::render(&state.templates, "terms.html", &page_context(locale, "terms"))
}

pub async fn cookie_policy(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> ApiResult<Html<String>> {
    templates::render(&state.templates, "cookies.html", &page_context(locale, "cookies"))
}

/// Fallback for unmatched routes: a localized 404 page.
pub async fn not_found(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> ApiResult<(StatusCode, Html<String>)> {
    let body = templates::render(&state.templates, "404.html", &page_context(locale, "404"))?;
    Ok((StatusCode::NOT_FOUND, body))
}
