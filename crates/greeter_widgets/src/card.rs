//! The greeting card.

use greeter_i18n::{t, LanguageIdentifier, StringBundles};

use crate::view::{text, TextStyle, ViewKind, ViewNode};

pub fn greeting_card(bundles: &StringBundles, locale: &LanguageIdentifier) -> ViewNode {
    ViewNode::new(ViewKind::Card).id("greeting-card").child(
        text(bundles.resolve(locale, &t!("greeting")), TextStyle::Headline).id("greeting-text"),
    )
}
