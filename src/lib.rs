//! Multilingual server-rendered website for the clinic
//!
//! Static content catalogs are projected per locale into view models and
//! rendered through Tera templates. A middleware resolves the locale per
//! request from the query parameter, the cookie, or the default.

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get, routing::post};
use tera::Tera;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;

// Server-generated messages (appointment confirmation, error messages)
rust_i18n::i18n!("locales", fallback = "pl");

/// Shared application state: configuration and the template engine, both
/// read-only after startup.
pub struct AppState {
    pub config: Config,
    pub templates: Tera,
}

/// Build the shared state from a loaded configuration.
pub fn build_state(config: Config) -> Result<AppState, anyhow::Error> {
    let templates = utils::templates::build_templates(&config.templates.dir)?;
    Ok(AppState { config, templates })
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    use handlers::{api, pages};

    let mut router = Router::new()
        .route("/", get(pages::home))
        .route("/especialistas", get(pages::doctors))
        .route("/servicios", get(pages::services))
        .route("/privacidad", get(pages::privacy))
        .route("/regulamin", get(pages::terms))
        .route("/cookies", get(pages::cookie_policy))
        .route("/api/appointment", post(api::submit_appointment))
        .route("/api/doctors", get(api::list_doctors))
        .route("/api/openapi.json", get(api::openapi));

    if state.config.static_config.enabled {
        router = router
            .nest_service("/static", ServeDir::new(&state.config.static_config.web_root));
    }

    router
        .fallback(pages::not_found)
        .layer(from_fn(middleware::locale_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
