//! Language selector with one segment per locale option.
//!
//! State machine:
//! - `Selected(i)` for `i` in `0..OPTION_COUNT`, no terminal state
//! - `click(j)`, `j != i`: `Selected(j)`, apply locale `j` to the host, request a rebuild
//! - `click(i)`: self-loop without side effects

use greeter_i18n::{same_language, LanguageIdentifier, SharedLocaleProvider};
use tracing::debug;

use crate::flag::flag;
use crate::options::{locale_options, LocaleOption, OPTION_COUNT};
use crate::rebuild::RebuildRequest;
use crate::view::{text, TextStyle, ViewKind, ViewNode};

const OPTION_ID_PREFIX: &str = "locale-option-";

/// Element id of the segment for option `index`.
pub fn option_element_id(index: usize) -> String {
    format!("{OPTION_ID_PREFIX}{index}")
}

/// Inverse of [`option_element_id`]; `None` for ids that are not option segments.
pub fn parse_option_element_id(id: &str) -> Option<usize> {
    let index: usize = id.strip_prefix(OPTION_ID_PREFIX)?.parse().ok()?;
    (index < OPTION_COUNT).then_some(index)
}

/// Result of a click on an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The option was already selected.
    Unchanged,
    /// Selection moved; the locale was applied and a rebuild requested.
    Switched { from: usize, to: usize },
}

/// Index of the first option whose language matches `current`, or 0.
pub fn initial_index(options: &[LocaleOption], current: &LanguageIdentifier) -> usize {
    options
        .iter()
        .position(|o| same_language(&o.locale, current))
        .unwrap_or(0)
}

pub struct LocaleSelector {
    options: [LocaleOption; OPTION_COUNT],
    selected: usize,
    provider: SharedLocaleProvider,
    rebuild: RebuildRequest,
}

impl LocaleSelector {
    /// Create the selector, picking the option that matches the host locale.
    pub fn new(provider: SharedLocaleProvider, rebuild: RebuildRequest) -> Self {
        let options = locale_options();
        let current = provider.get();
        let selected = initial_index(&options, &current);
        debug!(host = %current, selected, "LocaleSelector::new");
        Self {
            options,
            selected,
            provider,
            rebuild,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> &LocaleOption {
        &self.options[self.selected]
    }

    pub fn options(&self) -> &[LocaleOption; OPTION_COUNT] {
        &self.options
    }

    /// Handle a click on option `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= OPTION_COUNT`; rendered segments never produce one.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        assert!(
            index < OPTION_COUNT,
            "locale option index {index} out of range (0..{OPTION_COUNT})"
        );
        if index == self.selected {
            return ClickOutcome::Unchanged;
        }

        let from = self.selected;
        self.selected = index;
        let locale = self.options[index].locale.clone();
        debug!(from, to = index, %locale, "LocaleSelector: switching locale");
        self.provider.set(locale);
        self.rebuild.request();

        ClickOutcome::Switched { from, to: index }
    }

    pub fn render(&self) -> ViewNode {
        self.options.iter().enumerate().fold(
            ViewNode::new(ViewKind::SegmentedRow).id("locale-selector"),
            |row, (i, option)| {
                row.child(
                    ViewNode::new(ViewKind::Segment {
                        selected: i == self.selected,
                    })
                    .id(option_element_id(i))
                    .child(flag(option.region.code()))
                    .child(text(option.display_label, TextStyle::Label)),
                )
            },
        )
    }
}
