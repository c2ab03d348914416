//! Appointment request payload and response
//!
//! Field names follow the public form contract (`nombre`, `telefono`, ...).
//! The server validates the same rules the browser enforces, since the
//! endpoint is reachable without the form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Digits, spaces, `+` and `-`, at least nine characters.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9+\s-]{9,}$").expect("phone regex"));

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AppointmentRequest {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub nombre: String,

    #[validate(regex(path = *PHONE_RE, message = "invalid phone number"))]
    pub telefono: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "treatment is required"))]
    pub tratamiento: String,

    #[validate(length(max = 2000, message = "message too long"))]
    pub mensaje: Option<String>,

    /// Privacy-policy consent checkbox; optional on the wire.
    #[serde(default, deserialize_with = "deserialize_consent")]
    pub privacidad: Option<bool>,
}

/// Accept both a JSON boolean and the string an HTML checkbox submits
/// ("on", "true", "1").
fn deserialize_consent<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Bool(b)) => Some(b),
        Some(Raw::Str(s)) => Some(matches!(s.as_str(), "on" | "true" | "1" | "yes")),
    })
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AppointmentResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AppointmentRequest {
        AppointmentRequest {
            nombre: "Jan Kowalski".to_string(),
            telefono: "+48 32 42 47 370".to_string(),
            email: "jan@example.com".to_string(),
            tratamiento: "odontologia".to_string(),
            mensaje: None,
            privacidad: Some(true),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut req = valid_request();
        req.nombre = "J".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut req = valid_request();
        req.telefono = "call me".to_string();
        assert!(req.validate().is_err());

        req.telefono = "123".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_treatment_rejected() {
        let mut req = valid_request();
        req.tratamiento = String::new();
        assert!(req.validate().is_err());
    }
}
