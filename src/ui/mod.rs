// Terminal UI using Ratatui

pub mod component;
pub mod components;
pub mod constants;
pub mod events;
pub mod focus;
pub mod form;
pub mod list_view;
pub mod notice_modal;
pub mod quit_modal;
pub mod state;

pub use component::{Component, Placement};
pub use events::{run_ui, run_ui_with_config};
pub use form::{FormField, InputForm, SubmitError};
pub use list_view::{ListKind, ListView};
pub use notice_modal::NoticeModal;
pub use quit_modal::QuitModal;
pub use state::{AppState, Board};
