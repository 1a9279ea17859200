pub mod config;
pub mod gui_app;
pub mod logging;
pub mod popup;

pub use popup::{PointerEvent, PopupTrigger};
