use unic_langid::LanguageIdentifier;

use crate::I18nError;

/// Locale used when nothing better is known.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Bundle consulted after every locale-specific candidate.
pub const FALLBACK_BUNDLE: &str = "en";

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (Android and POSIX report `ko_KR`).
/// - Strips POSIX encoding/modifier suffixes (`ko_KR.UTF-8@euro`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let s = s.split(['.', '@']).next().unwrap_or_default();
    s.replace('_', "-")
}

/// Parse a locale string into a [`LanguageIdentifier`].
pub fn parse_locale(s: &str) -> Result<LanguageIdentifier, I18nError> {
    let normalized = normalize_locale(s);
    if normalized.is_empty() {
        return Err(I18nError::InvalidLocale {
            locale: s.to_string(),
            reason: "empty locale".to_string(),
        });
    }
    normalized
        .parse::<LanguageIdentifier>()
        .map_err(|e| I18nError::InvalidLocale {
            locale: s.to_string(),
            reason: e.to_string(),
        })
}

/// Whether two locales share a language subtag (`ko-KR` matches `ko`).
pub fn same_language(a: &LanguageIdentifier, b: &LanguageIdentifier) -> bool {
    a.language == b.language
}

/// Create a fallback chain for bundle lookup.
///
/// Example:
/// - `zh-Hans-CN` -> `["zh-Hans-CN", "zh-CN", "zh", "en"]`
/// - `ko-KR` -> `["ko-KR", "ko", "en"]`
/// - `en` -> `["en"]`
pub fn locale_fallback_chain(locale: &LanguageIdentifier) -> Vec<String> {
    let mut chain = vec![locale.to_string()];

    let language = locale.language.as_str().to_string();
    if let (Some(_), Some(region)) = (locale.script, locale.region) {
        chain.push(format!("{language}-{}", region.as_str()));
    }
    chain.push(language);
    chain.push(FALLBACK_BUNDLE.to_string());

    let mut out: Vec<String> = Vec::with_capacity(chain.len());
    for x in chain {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}
