use iced::{Element, Size, Task, Theme};

use super::render;
use crate::config::Settings;
use crate::popup::{PointerEvent, PopupTrigger};

pub fn run_iced_app(settings: Settings) -> iced::Result {
    let size = Size::new(settings.window.width, settings.window.height);
    let title = settings.title.clone();

    tracing::info!(%title, width = size.width, height = size.height, "opening window");

    iced::application(
        move || PopupApp::new(&settings),
        PopupApp::update,
        PopupApp::view,
    )
    .title(move |_: &PopupApp| title.clone())
    .theme(PopupApp::theme)
    .window_size(size)
    .run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pointer(PointerEvent),
}

pub struct PopupApp {
    widget: PopupTrigger,
    theme: Theme,
}

impl PopupApp {
    pub fn new(settings: &Settings) -> Self {
        PopupApp {
            widget: PopupTrigger::new(),
            theme: settings.theme.theme(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(event) => {
                if self.widget.handle(event) {
                    tracing::info!(
                        %event,
                        panel = self.widget.is_panel_visible(),
                        full = self.widget.is_full(),
                        "popup state changed"
                    );
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        render::element(&self.widget.render())
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn widget(&self) -> &PopupTrigger {
        &self.widget
    }
}
