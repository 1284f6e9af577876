use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::label::Message;

const MAX_CATALOG_ENTRIES: usize = 1_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

/// A flat string bundle loaded from a YAML mapping.
///
/// ```yaml
/// app-title: "Hello World"
/// greeting: "Hello, World!"
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleCatalog {
    entries: FxHashMap<String, String>,
}

impl SimpleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML mapping of string keys to string values.
    pub fn parse(src: &str) -> Result<Self, SimpleParseError> {
        if src.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: serde_yaml::Value =
            serde_yaml::from_str(src).map_err(|e| SimpleParseError::Yaml(e.to_string()))?;

        let raw = match value {
            serde_yaml::Value::Mapping(raw) => raw,
            serde_yaml::Value::Null => return Ok(Self::new()),
            _ => return Err(SimpleParseError::NotAMapping),
        };
        if raw.len() > MAX_CATALOG_ENTRIES {
            return Err(SimpleParseError::TooManyEntries(MAX_CATALOG_ENTRIES));
        }

        let mut cat = Self::new();
        for (k, v) in raw {
            let Some(key) = k.as_str() else {
                return Err(SimpleParseError::NonStringKey);
            };
            if !is_valid_key(key) || key.len() > MAX_KEY_BYTES {
                return Err(SimpleParseError::InvalidKey(key.to_string()));
            }
            let Some(val) = v.as_str() else {
                return Err(SimpleParseError::NonStringValue(key.to_string()));
            };
            if val.len() > MAX_VALUE_BYTES {
                return Err(SimpleParseError::ValueTooLong(key.to_string()));
            }
            cat.insert(key, val);
        }
        Ok(cat)
    }

    /// Look up the text for `msg`.
    pub fn format_message(&self, msg: &Message) -> Option<String> {
        self.get(msg.id.as_ref()).map(str::to_string)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SimpleParseError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("catalog root must be a mapping")]
    NotAMapping,

    #[error("too many entries (max {0})")]
    TooManyEntries(usize),

    #[error("catalog keys must be strings")]
    NonStringKey,

    #[error("invalid key `{0}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*, max 128 bytes)")]
    InvalidKey(String),

    #[error("value for key `{0}` must be a string")]
    NonStringValue(String),

    #[error("value for key `{0}` is too long")]
    ValueTooLong(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_yaml_and_lookup() {
        let src = r#"
app-title: "你好世界"
greeting: "Hello, World!"
"#;

        let cat = SimpleCatalog::parse(src).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.get("app-title"), Some("你好世界"));

        let s = cat.format_message(&Message::new("greeting")).unwrap();
        assert_eq!(s, "Hello, World!");
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let cat = SimpleCatalog::parse("").unwrap();
        assert!(cat.is_empty());
    }

    #[test]
    fn missing_key_is_none() {
        let cat = SimpleCatalog::parse("a: b").unwrap();
        assert_eq!(cat.format_message(&Message::new("nope")), None);
    }

    #[test]
    fn rejects_non_mapping_and_non_strings() {
        assert_eq!(
            SimpleCatalog::parse("- a\n- b").unwrap_err(),
            SimpleParseError::NotAMapping
        );
        assert_eq!(
            SimpleCatalog::parse("app-title: 123").unwrap_err(),
            SimpleParseError::NonStringValue("app-title".to_string())
        );
        assert!(matches!(
            SimpleCatalog::parse("bad key: nope").unwrap_err(),
            SimpleParseError::InvalidKey(_)
        ));
    }
}
