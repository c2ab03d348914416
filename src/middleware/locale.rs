//! Locale resolution middleware
//!
//! Resolves the active locale for every request with the precedence
//! query parameter > cookie > default, persists explicit choices in a
//! one-year cookie, and attaches the resolved locale to the request
//! extensions for handlers to consume.

use axum::{
    extract::Request,
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::utils::{DEFAULT_LOCALE, Locale, with_locale};

/// Query parameter and cookie name carrying the locale code.
pub const LANG_PARAM: &str = "lang";
pub const LANG_COOKIE: &str = "lang";

const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Middleware resolving the request locale.
///
/// Resolution always succeeds: an unsupported code, wherever it comes from,
/// falls back to the default locale. When the locale was supplied explicitly
/// via the query parameter the response carries a persistent cookie so later
/// requests keep the choice.
pub async fn locale_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let query_lang = query_param(req.uri().query(), LANG_PARAM);
    let explicit = query_lang.is_some();

    let locale = query_lang
        .map(|code| Locale::parse_or_default(&code))
        .or_else(|| jar.get(LANG_COOKIE).and_then(|c| Locale::parse(c.value())))
        .unwrap_or(DEFAULT_LOCALE);

    tracing::trace!(locale = %locale, explicit, path = req.uri().path(), "resolved locale");

    req.extensions_mut().insert(locale);

    // Scope the task-local so error localization sees this request's locale
    let mut response = with_locale(locale, next.run(req)).await;

    if explicit {
        let cookie = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            LANG_COOKIE, locale, COOKIE_MAX_AGE_SECS
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

/// Extract a raw query parameter value. Locale codes are plain ASCII, so no
/// percent-decoding is needed.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param(Some("lang=en"), "lang"), Some("en".to_string()));
        assert_eq!(query_param(Some("category=all&lang=uk"), "lang"), Some("uk".to_string()));
        assert_eq!(query_param(Some("lang="), "lang"), Some(String::new()));
        assert_eq!(query_param(Some("language=en"), "lang"), None);
        assert_eq!(query_param(None, "lang"), None);
    }
}
