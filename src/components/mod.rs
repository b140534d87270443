//! UI Components
//!
//! Reusable Leptos components.

mod item_form;
mod item_row;
mod item_list;
mod loading_view;
mod toast;
mod settings_panel;

pub use item_form::ItemForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use loading_view::LoadingView;
pub use toast::Toast;
pub use settings_panel::SettingsPanel;
