//! Template engine setup
//!
//! Pages are rendered with Tera from a directory of HTML templates. The
//! engine is built once at startup and shared read-only through `AppState`.

use axum::response::Html;
use tera::{Context, Tera};

use super::error::ApiResult;

/// Build the template engine from the configured template directory.
pub fn build_templates(dir: &str) -> Result<Tera, tera::Error> {
    let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
    let tera = Tera::new(&glob)?;
    tracing::debug!(
        templates = tera.get_template_names().count(),
        dir,
        "template engine ready"
    );
    Ok(tera)
}

/// Render a named template into an HTML response.
pub fn render(tera: &Tera, name: &str, context: &Context) -> ApiResult<Html<String>> {
    let body = tera.render(name, context)?;
    Ok(Html(body))
}
