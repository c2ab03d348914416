//! Locale model and UI-string bundles
//!
//! The site speaks four languages. Each locale has an embedded JSON bundle
//! holding the full nested tree of UI strings that templates render, loaded
//! once at startup and shared read-only across all requests. A task-local
//! mirror of the active locale backs error-message localization.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

/// Supported locales, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    Pl,
    Uk,
    En,
}

/// Default when neither query parameter nor cookie carries a locale.
///
/// The site historically fell back to Spanish on an *invalid* explicit value
/// while defaulting to Polish when no value was given at all. That asymmetry
/// was an authoring bug; both paths now resolve to Polish.
pub const DEFAULT_LOCALE: Locale = Locale::Pl;

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::Es, Locale::Pl, Locale::Uk, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::Pl => "pl",
            Locale::Uk => "uk",
            Locale::En => "en",
        }
    }

    /// Parse a locale code, accepting region-qualified forms like "en-US".
    pub fn parse(code: &str) -> Option<Locale> {
        let code = code.trim().to_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or("");
        match primary {
            "es" => Some(Locale::Es),
            "pl" => Some(Locale::Pl),
            "uk" => Some(Locale::Uk),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parse with fallback to the default locale.
    pub fn parse_or_default(code: &str) -> Locale {
        Locale::parse(code).unwrap_or(DEFAULT_LOCALE)
    }

    /// The UI-string bundle for this locale.
    pub fn bundle(&self) -> &'static serde_json::Value {
        &BUNDLES[self]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

/// Per-locale UI-string bundles embedded at compile time.
#[derive(RustEmbed)]
#[folder = "i18n/"]
struct BundleFiles;

static BUNDLES: Lazy<HashMap<Locale, serde_json::Value>> = Lazy::new(|| {
    Locale::ALL
        .iter()
        .map(|locale| {
            let name = format!("{}.json", locale.as_str());
            let file = BundleFiles::get(&name)
                .unwrap_or_else(|| panic!("missing embedded bundle i18n/{}", name));
            let value: serde_json::Value = serde_json::from_slice(&file.data)
                .unwrap_or_else(|e| panic!("invalid bundle i18n/{}: {}", name, e));
            (*locale, value)
        })
        .collect()
});

/// Look up a dotted key in a locale bundle, e.g. `statsLabels.implants`.
///
/// A missing key is a content-authoring defect, not a runtime error: it is
/// logged, trips a debug assertion, and renders as an empty string.
pub fn bundle_str(locale: Locale, key: &str) -> &'static str {
    let mut node = locale.bundle();
    for part in key.split('.') {
        match node.get(part) {
            Some(next) => node = next,
            None => {
                tracing::warn!(locale = %locale, key, "missing bundle key");
                debug_assert!(false, "missing bundle key {}.{}", locale, key);
                return "";
            },
        }
    }
    node.as_str().unwrap_or_else(|| {
        tracing::warn!(locale = %locale, key, "bundle key is not a string");
        ""
    })
}

// Task-local mirror of the active locale, scoped around request handling by
// the locale middleware and read by error localization where no request
// context is available. A task-local follows the request across await points
// and worker threads, a thread-local would not.
tokio::task_local! {
    static CURRENT_LOCALE: Locale;
}

/// Run a future with the given locale as the active locale.
pub async fn with_locale<F: Future>(locale: Locale, fut: F) -> F::Output {
    CURRENT_LOCALE.scope(locale, fut).await
}

/// The active locale for the current task, or the default outside a scope.
pub fn get_locale() -> Locale {
    CURRENT_LOCALE.try_with(|l| *l).unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!(Locale::parse("es"), Some(Locale::Es));
        assert_eq!(Locale::parse("pl"), Some(Locale::Pl));
        assert_eq!(Locale::parse("uk"), Some(Locale::Uk));
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("pl_PL"), Some(Locale::Pl));
        assert_eq!(Locale::parse("xx"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(Locale::parse_or_default("uk"), Locale::Uk);
        assert_eq!(Locale::parse_or_default("xx"), DEFAULT_LOCALE);
        assert_eq!(Locale::parse_or_default(""), DEFAULT_LOCALE);
    }

    #[tokio::test]
    async fn test_locale_scope() {
        assert_eq!(get_locale(), DEFAULT_LOCALE);

        let inner = with_locale(Locale::En, async { get_locale() }).await;
        assert_eq!(inner, Locale::En);

        // Scopes nest and restore on exit
        let (outer, inner) = with_locale(Locale::Uk, async {
            let inner = with_locale(Locale::Es, async { get_locale() }).await;
            (get_locale(), inner)
        })
        .await;
        assert_eq!(outer, Locale::Uk);
        assert_eq!(inner, Locale::Es);

        assert_eq!(get_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_bundle_lookup() {
        assert_eq!(bundle_str(Locale::En, "nav.home"), "Home");
        assert_eq!(bundle_str(Locale::Pl, "nav.home"), "Strona główna");
    }

    /// Every locale bundle must define the same key shape.
    #[test]
    fn test_bundle_key_parity() {
        fn keys(value: &serde_json::Value, prefix: &str, out: &mut Vec<String>) {
            if let Some(map) = value.as_object() {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{}.{}", prefix, k)
                    };
                    keys(v, &path, out);
                    out.push(path);
                }
            }
        }

        let mut reference: Vec<String> = Vec::new();
        keys(Locale::Pl.bundle(), "", &mut reference);
        reference.sort();
        assert!(!reference.is_empty());

        for locale in Locale::ALL {
            let mut got: Vec<String> = Vec::new();
            keys(locale.bundle(), "", &mut got);
            got.sort();
            assert_eq!(got, reference, "bundle key shape differs for {}", locale);
        }
    }
}
