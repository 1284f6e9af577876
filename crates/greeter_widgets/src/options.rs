//! The fixed set of selectable locales.

use greeter_i18n::{parse_locale, LanguageIdentifier};

/// Number of selectable locales. Adding one is a code change.
pub const OPTION_COUNT: usize = 3;

/// Region tag identifying an option's flag icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionTag {
    Cn,
    Gb,
    Kr,
}

impl RegionTag {
    /// Lowercase country code handed to the flag renderer.
    pub fn code(self) -> &'static str {
        match self {
            RegionTag::Cn => "cn",
            RegionTag::Gb => "gb",
            RegionTag::Kr => "kr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cn" => Some(RegionTag::Cn),
            "gb" => Some(RegionTag::Gb),
            "kr" => Some(RegionTag::Kr),
            _ => None,
        }
    }
}

/// One selectable locale.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleOption {
    /// Shown in the option's own language.
    pub display_label: &'static str,
    pub region: RegionTag,
    pub locale: LanguageIdentifier,
}

const OPTION_TABLE: [(&str, RegionTag, &str); OPTION_COUNT] = [
    ("简体中文", RegionTag::Cn, "zh-CN"),
    ("English", RegionTag::Gb, "en"),
    ("한국어", RegionTag::Kr, "ko"),
];

/// The options in display order.
pub fn locale_options() -> [LocaleOption; OPTION_COUNT] {
    OPTION_TABLE.map(|(display_label, region, tag)| LocaleOption {
        display_label,
        region,
        locale: parse_locale(tag)
            .unwrap_or_else(|e| panic!("built-in locale tag `{tag}` is invalid: {e}")),
    })
}
