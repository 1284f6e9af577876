//! Assertion helpers for headless diagnostics goals.

use std::collections::HashMap;

use greeter_i18n::{parse_locale, same_language};

use crate::app::GreeterApp;

/// Snapshot of app-observable state used for headless assertions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    /// Element id -> concatenated text under it.
    pub elements: HashMap<String, String>,
    pub selected_index: usize,
    pub host_locale: String,
    pub rebuilds: u64,
}

impl DiagnosticsSnapshot {
    pub fn capture(app: &GreeterApp) -> Self {
        let view = app.view();
        let elements = view
            .ids()
            .into_iter()
            .map(|id| {
                let text = view.text_of(&id).unwrap_or_default();
                (id, text)
            })
            .collect();
        Self {
            elements,
            selected_index: app.selected_index(),
            host_locale: app.host_locale().to_string(),
            rebuilds: app.rebuild_count(),
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

fn failed(code: &str, message: String) -> AssertionResult {
    AssertionResult::Failed {
        code: code.to_string(),
        message,
    }
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.elements.contains_key(id) {
        AssertionResult::Passed
    } else {
        failed("missing_element", format!("{id}: element not found"))
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(text) = snapshot.elements.get(id) else {
        return failed("missing_element", format!("{id}: element not found"));
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

pub fn evaluate_assert_selected(index: usize, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.selected_index == index {
        AssertionResult::Passed
    } else {
        failed(
            "selection_mismatch",
            format!(
                "expected option {index} selected, got {}",
                snapshot.selected_index
            ),
        )
    }
}

/// Passes when the host locale equals `expected`, or shares its language
/// when `expected` has no region (`ko` accepts `ko-KR`).
pub fn evaluate_assert_locale(expected: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    let (Ok(want), Ok(have)) = (parse_locale(expected), parse_locale(&snapshot.host_locale))
    else {
        return failed(
            "invalid_locale",
            format!("cannot compare '{expected}' with '{}'", snapshot.host_locale),
        );
    };
    let matches = if want.region.is_none() && want.script.is_none() {
        same_language(&want, &have)
    } else {
        want == have
    };
    if matches {
        AssertionResult::Passed
    } else {
        failed(
            "locale_mismatch",
            format!("expected host locale '{want}', got '{have}'"),
        )
    }
}

pub fn evaluate_assert_rebuilds(count: u64, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.rebuilds == count {
        AssertionResult::Passed
    } else {
        failed(
            "rebuild_count_mismatch",
            format!("expected {count} rebuilds, got {}", snapshot.rebuilds),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            elements: HashMap::from([("greeting-text".to_string(), "Hello, World!".to_string())]),
            selected_index: 1,
            host_locale: "en-US".to_string(),
            rebuilds: 0,
        }
    }

    #[test]
    fn text_assertions() {
        let s = snapshot();
        assert_eq!(evaluate_assert_exists("greeting-text", &s), AssertionResult::Passed);
        assert_eq!(
            evaluate_assert_text_contains("greeting-text", "World", &s),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_text_contains("greeting-text", "世界", &s),
            AssertionResult::Failed { code, .. } if code == "text_mismatch"
        ));
        assert!(matches!(
            evaluate_assert_exists("nope", &s),
            AssertionResult::Failed { code, .. } if code == "missing_element"
        ));
    }

    #[test]
    fn locale_assertion_accepts_bare_language() {
        let s = snapshot();
        assert_eq!(evaluate_assert_locale("en", &s), AssertionResult::Passed);
        assert_eq!(evaluate_assert_locale("en-US", &s), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_locale("en-GB", &s),
            AssertionResult::Failed { .. }
        ));
        assert!(matches!(
            evaluate_assert_locale("ko", &s),
            AssertionResult::Failed { .. }
        ));
    }

    #[test]
    fn selection_and_rebuild_assertions() {
        let s = snapshot();
        assert_eq!(evaluate_assert_selected(1, &s), AssertionResult::Passed);
        assert!(matches!(evaluate_assert_selected(0, &s), AssertionResult::Failed { .. }));
        assert_eq!(evaluate_assert_rebuilds(0, &s), AssertionResult::Passed);
        assert!(matches!(evaluate_assert_rebuilds(1, &s), AssertionResult::Failed { .. }));
    }
}
