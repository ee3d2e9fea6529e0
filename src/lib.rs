pub mod breakpoint;
pub mod logging;
pub mod menu;
mod plan;
pub mod search;
pub mod settings;
pub mod tabs;
pub mod toolbar;

pub use gpui;
pub use gpui_component;
pub use gpui_component_assets;

pub use breakpoint::Breakpoint;
pub use menu::{MenuConfig, MenuItem};
pub use search::{SearchHandler, SearchInput, SearchSlot, SearchState};
pub use settings::{SettingAction, SettingItem};
pub use tabs::{TabItem, TabsConfig};
pub use toolbar::Toolbar;

rust_i18n::i18n!("locales", fallback = "en");
