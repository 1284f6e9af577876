//! The whole screen: state owned between rebuilds and the render function.

use greeter_i18n::{LanguageIdentifier, SharedLocaleProvider, StringBundles};

use crate::card::greeting_card;
use crate::header::header_bar;
use crate::rebuild::RebuildRequest;
use crate::selector::LocaleSelector;
use crate::view::{ViewKind, ViewNode, ViewTree};

/// Everything the screen holds between two rebuilds.
///
/// Dropped wholesale on rebuild; only the host locale survives.
pub struct ScreenState {
    locale: LanguageIdentifier,
    selector: LocaleSelector,
}

impl ScreenState {
    /// Build fresh screen state from the host's current locale.
    pub fn create(provider: SharedLocaleProvider, rebuild: RebuildRequest) -> Self {
        let locale = provider.get();
        let selector = LocaleSelector::new(provider, rebuild);
        Self { locale, selector }
    }

    /// Locale the screen's strings were resolved for.
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    pub fn selector(&self) -> &LocaleSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut LocaleSelector {
        &mut self.selector
    }
}

/// Render the screen.
pub fn render(state: &ScreenState, bundles: &StringBundles) -> ViewTree {
    let content = ViewNode::new(ViewKind::Column)
        .id("content")
        .child(greeting_card(bundles, &state.locale))
        .child(state.selector.render());

    ViewTree::new(
        ViewNode::new(ViewKind::Screen)
            .id("screen")
            .child(header_bar(bundles, &state.locale))
            .child(content),
    )
}
