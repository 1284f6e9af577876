//! Error types for greeter_app

use thiserror::Error;

/// Errors surfaced by the host runtime
#[derive(Error, Debug)]
pub enum AppError {
    /// No element with this id is on screen
    #[error("no element `{0}` in the current view")]
    UnknownElement(String),

    /// The element exists but has no click handler
    #[error("element `{0}` is not clickable")]
    NotClickable(String),

    /// String bundles or locale configuration were invalid
    #[error("i18n error: {0}")]
    I18n(#[from] greeter_i18n::I18nError),
}

/// Result type for greeter_app operations
pub type Result<T> = std::result::Result<T, AppError>;
