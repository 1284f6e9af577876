//! Top app bar: app title and author line.

use greeter_i18n::{t, LanguageIdentifier, StringBundles};

use crate::view::{text, TextStyle, ViewKind, ViewNode};

pub fn header_bar(bundles: &StringBundles, locale: &LanguageIdentifier) -> ViewNode {
    ViewNode::new(ViewKind::TopBar)
        .id("header")
        .child(
            text(bundles.resolve(locale, &t!("app-title")), TextStyle::Title).id("header-title"),
        )
        .child(
            text(bundles.resolve(locale, &t!("app-author")), TextStyle::Subtitle)
                .id("header-author"),
        )
}
