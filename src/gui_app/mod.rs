pub mod iced_ui;
pub mod render;

pub use iced_ui::{Message, PopupApp, run_iced_app};
