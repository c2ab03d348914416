//! JSON API handlers
//!
//! The appointment endpoint is a stub integration point: it validates and
//! logs the payload, then answers with a localized confirmation. No
//! persistence and no outbound notification exist yet.

use axum::{
    Extension, Form, Json,
    async_trait,
    extract::{FromRequest, Query, Request},
    http::header::CONTENT_TYPE,
};
use rust_i18n::t;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use utoipa::{IntoParams, OpenApi};
use validator::Validate;

use crate::models::{AppointmentRequest, AppointmentResponse, DoctorView};
use crate::services::project_doctors;
use crate::utils::{ApiError, ApiResult, Locale};

#[derive(OpenApi)]
#[openapi(
    paths(submit_appointment, list_doctors),
    components(schemas(
        AppointmentRequest,
        AppointmentResponse,
        DoctorView,
        crate::models::DoctorStatView
    )),
    tags(
        (name = "Appointments", description = "Appointment requests"),
        (name = "Doctors", description = "Localized doctor catalog")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Extractor accepting either a JSON or a form-encoded request body.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_input(e.to_string()))?;
            Ok(JsonOrForm(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_input(e.to_string()))?;
            Ok(JsonOrForm(value))
        }
    }
}

/// Receive an appointment request
#[utoipa::path(
    post,
    path = "/api/appointment",
    request_body = AppointmentRequest,
    responses(
        (status = 200, description = "Appointment request accepted", body = AppointmentResponse),
        (status = 400, description = "Validation error"),
    ),
    tag = "Appointments"
)]
pub async fn submit_appointment(
    Extension(locale): Extension<Locale>,
    JsonOrForm(payload): JsonOrForm<AppointmentRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    payload.validate().map_err(|e| ApiError::validation_error(e.to_string()))?;

    tracing::info!(
        nombre = %payload.nombre,
        telefono = %payload.telefono,
        email = %payload.email,
        tratamiento = %payload.tratamiento,
        mensaje = ?payload.mensaje,
        "new appointment request"
    );

    Ok(Json(AppointmentResponse {
        success: true,
        message: t!("appointment.received", locale = locale.as_str()).to_string(),
    }))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DoctorsQuery {
    /// Service id to filter by, or "all" for the full list.
    pub category: Option<String>,
}

/// List doctors, localized and optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/doctors",
    params(DoctorsQuery),
    responses(
        (status = 200, description = "Localized doctor list", body = Vec<DoctorView>)
    ),
    tag = "Doctors"
)]
pub async fn list_doctors(
    Extension(locale): Extension<Locale>,
    Query(query): Query<DoctorsQuery>,
) -> ApiResult<Json<Vec<DoctorView>>> {
    let mut doctors = project_doctors(locale);
    if let Some(category) = query.category.as_deref().filter(|c| *c != "all") {
        doctors.retain(|d| d.category == category);
    }
    tracing::debug!(locale = %locale, count = doctors.len(), "listing doctors");
    Ok(Json(doctors))
}
