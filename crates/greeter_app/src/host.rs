//! Wiring of the process-wide host locale.

use greeter_i18n::{
    parse_locale, HostLocale, LanguageIdentifier, SharedLocaleProvider, DEFAULT_LOCALE,
};
use tracing::{debug, warn};

use crate::error::Result;

/// Detect the operating system locale, falling back to `en-US`.
pub fn detect_system_locale() -> LanguageIdentifier {
    let detected = sys_locale::get_locale().and_then(|raw| match parse_locale(&raw) {
        Ok(locale) => Some(locale),
        Err(e) => {
            warn!("ignoring unparseable system locale: {e}");
            None
        }
    });
    detected.unwrap_or_else(default_locale)
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Initialize the global host locale and return a provider handle for it.
///
/// `configured` overrides OS detection. Only the first call in a process
/// decides the startup locale.
pub fn init_host_locale(configured: Option<&str>) -> Result<SharedLocaleProvider> {
    let locale = match configured {
        Some(s) => parse_locale(s)?,
        None => detect_system_locale(),
    };
    debug!(%locale, "initializing host locale");
    Ok(HostLocale::init(locale).shared())
}
