use rustc_hash::FxHashMap;
use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::label::{Label, Message};
use crate::locale::{locale_fallback_chain, normalize_locale};
use crate::simple::SimpleCatalog;
use crate::I18nError;

/// Bundle sources shipped with the app, keyed by bundle locale.
///
/// Bundles are keyed by bare language so every fallback chain reaches them:
/// `zh-CN`, `zh-Hans` and `zh` all end at the `zh` catalog.
const BUILTIN_BUNDLES: [(&str, &str); 3] = [
    ("zh", include_str!("../../../resource/i18n/greeter.zh-CN.yaml")),
    ("en", include_str!("../../../resource/i18n/greeter.en.yaml")),
    ("ko", include_str!("../../../resource/i18n/greeter.ko.yaml")),
];

/// The set of localized string bundles, one catalog per bundle locale.
#[derive(Clone, Debug, Default)]
pub struct StringBundles {
    catalogs: FxHashMap<String, SimpleCatalog>,
}

impl StringBundles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the bundles embedded in the binary.
    pub fn builtin() -> Result<Self, I18nError> {
        let mut bundles = Self::new();
        for (locale, src) in BUILTIN_BUNDLES {
            bundles.load_str(locale, src)?;
        }
        Ok(bundles)
    }

    pub fn insert(&mut self, locale: &str, catalog: SimpleCatalog) {
        self.catalogs.insert(normalize_locale(locale), catalog);
    }

    /// Parse and register a YAML catalog for `locale`.
    pub fn load_str(&mut self, locale: &str, src: &str) -> Result<(), I18nError> {
        let catalog = SimpleCatalog::parse(src)?;
        debug!(locale, entries = catalog.len(), "loaded string bundle");
        self.insert(locale, catalog);
        Ok(())
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.catalogs.contains_key(&normalize_locale(locale))
    }

    /// Translate a message for `locale`, walking its fallback chain.
    ///
    /// Unknown keys render as the key itself so missing strings stay visible.
    pub fn tr(&self, locale: &LanguageIdentifier, msg: &Message) -> String {
        for candidate in locale_fallback_chain(locale) {
            if let Some(s) = self
                .catalogs
                .get(&candidate)
                .and_then(|cat| cat.format_message(msg))
            {
                return s;
            }
        }
        msg.id.to_string()
    }

    pub fn resolve(&self, locale: &LanguageIdentifier, label: &Label) -> String {
        match label {
            Label::Raw(s) => s.to_string(),
            Label::Msg(m) => self.tr(locale, m),
        }
    }
}
