//! Greeter internationalization (i18n)
//!
//! - `Label`/`Message` values resolved against YAML string bundles
//! - Locale parsing and a language-first fallback chain
//! - The `LocaleProvider` capability and the process-wide `HostLocale`

mod bundles;
mod error;
mod label;
mod locale;
mod provider;
mod simple;

pub use bundles::StringBundles;
pub use error::I18nError;
pub use label::{Label, Message};
pub use locale::{
    locale_fallback_chain, normalize_locale, parse_locale, same_language, DEFAULT_LOCALE,
    FALLBACK_BUNDLE,
};
pub use provider::{HostLocale, LocaleProvider, MemoryLocaleProvider, SharedLocaleProvider};
pub use simple::{SimpleCatalog, SimpleParseError};

pub use unic_langid::LanguageIdentifier;

/// Convenience macro for building a bundle key as a [`Label`].
///
/// Example: `t!("app-title")`
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::Label::msg($crate::Message::new($id))
    };
}
