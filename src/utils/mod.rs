pub mod error;
pub mod i18n;
pub mod templates;

pub use error::{ApiError, ApiResult};
pub use i18n::{DEFAULT_LOCALE, Locale, bundle_str, get_locale, with_locale};
