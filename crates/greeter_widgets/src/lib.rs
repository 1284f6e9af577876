//! Greeter Widget Library
//!
//! Everything on the single screen, rendered into a backend-agnostic [`ViewTree`].

pub mod card;
pub mod flag;
pub mod header;
pub mod options;
pub mod rebuild;
pub mod screen;
pub mod selector;
pub mod view;

pub use card::greeting_card;
pub use flag::{find_flag_asset, flag, flag_asset, FlagAsset};
pub use header::header_bar;
pub use options::{locale_options, LocaleOption, RegionTag, OPTION_COUNT};
pub use rebuild::RebuildRequest;
pub use screen::{render, ScreenState};
pub use selector::{option_element_id, parse_option_element_id, ClickOutcome, LocaleSelector};
pub use view::{TextStyle, ViewKind, ViewNode, ViewTree};
