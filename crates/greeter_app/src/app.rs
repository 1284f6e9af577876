//! Host runtime for the greeter screen.
//!
//! Mirrors a mobile activity: `create` builds the screen once at startup,
//! input is dispatched one event at a time, and a locale change tears the
//! whole screen down and builds it again on the next frame.

use greeter_i18n::{LanguageIdentifier, SharedLocaleProvider, StringBundles};
use greeter_widgets::{
    parse_option_element_id, render, ClickOutcome, RebuildRequest, ScreenState, ViewTree,
};
use tracing::{debug, info};

use crate::error::{AppError, Result};

/// Input delivered by the host event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Click { id: String },
}

/// A running greeter screen.
pub struct GreeterApp {
    provider: SharedLocaleProvider,
    bundles: StringBundles,
    rebuild: RebuildRequest,
    screen: ScreenState,
    view: ViewTree,
    rebuild_count: u64,
    frame_count: u64,
}

impl GreeterApp {
    /// Startup entry point: build the screen from the host's current locale.
    pub fn create(provider: SharedLocaleProvider, bundles: StringBundles) -> Self {
        let rebuild = RebuildRequest::new();
        let screen = ScreenState::create(provider.clone(), rebuild.clone());
        let view = render(&screen, &bundles);
        info!(locale = %screen.locale(), "greeter screen created");
        Self {
            provider,
            bundles,
            rebuild,
            screen,
            view,
            rebuild_count: 0,
            frame_count: 0,
        }
    }

    /// Deliver one input event.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<ClickOutcome> {
        match event {
            UiEvent::Click { id } => self.click(&id),
        }
    }

    /// Click the element `id` of the current view.
    ///
    /// After a switch the current selector keeps handling clicks until the
    /// next [`frame`](Self::frame) replaces it. The event loop delivers one
    /// click at a time, and switches made before a frame coalesce into a
    /// single rebuild that reads the last locale applied.
    pub fn click(&mut self, id: &str) -> Result<ClickOutcome> {
        if !self.view.contains(id) {
            return Err(AppError::UnknownElement(id.to_string()));
        }
        let Some(index) = parse_option_element_id(id) else {
            return Err(AppError::NotClickable(id.to_string()));
        };
        let outcome = self.screen.selector_mut().click(index);
        debug!(id, ?outcome, "click handled");
        Ok(outcome)
    }

    /// Run one host frame, rebuilding the screen if a rebuild was requested.
    ///
    /// Returns whether a rebuild happened.
    pub fn frame(&mut self) -> bool {
        self.frame_count += 1;
        if !self.rebuild.take() {
            return false;
        }

        // Replace the whole screen; nothing but the host locale carries over.
        self.screen = ScreenState::create(self.provider.clone(), self.rebuild.clone());
        self.view = render(&self.screen, &self.bundles);
        self.rebuild_count += 1;
        info!(
            locale = %self.screen.locale(),
            rebuilds = self.rebuild_count,
            "screen rebuilt"
        );
        true
    }

    pub fn view(&self) -> &ViewTree {
        &self.view
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn selected_index(&self) -> usize {
        self.screen.selector().selected()
    }

    /// The host's current locale (may be ahead of the view until the next frame).
    pub fn host_locale(&self) -> LanguageIdentifier {
        self.provider.get()
    }

    pub fn rebuild_pending(&self) -> bool {
        self.rebuild.is_pending()
    }

    /// Rebuilds performed since `create`.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
