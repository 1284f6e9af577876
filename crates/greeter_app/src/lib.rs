//! Greeter Application Host
//!
//! Owns the screen lifecycle: creates it from the host locale, dispatches
//! input, and rebuilds it from scratch after a locale change.
//!
//! # Example
//!
//! ```ignore
//! use greeter_app::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let provider = init_host_locale(Some("ko-KR"))?;
//!     let mut app = GreeterApp::create(provider, StringBundles::builtin()?);
//!
//!     app.click("locale-option-0")?;
//!     app.frame();
//!     println!("{}", app.view());
//!     Ok(())
//! }
//! ```

mod app;
mod error;
mod host;

pub mod config;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;

#[cfg(test)]
mod tests;

pub use app::{GreeterApp, UiEvent};
pub use error::{AppError, Result};
pub use host::{detect_system_locale, init_host_locale};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{GreeterApp, UiEvent};
    pub use crate::error::{AppError, Result};
    pub use crate::host::{detect_system_locale, init_host_locale};

    pub use greeter_i18n::{LocaleProvider, SharedLocaleProvider, StringBundles};
    pub use greeter_widgets::{option_element_id, ClickOutcome, ViewTree};
}
