mod screens;
mod search_bar;
mod styles;
mod table_view;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use screens::{render_error, render_loading};
pub(crate) use search_bar::SearchState;
pub(crate) use styles::{UiStyleExt, change_colors};
pub(crate) use ui_config::UI_CONFIG;

pub use ui_text::UI_TEXT;
pub use utils::format_usd;
