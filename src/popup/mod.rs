//! The hover popup widget: a trigger button that shows a fixed-size panel
//! while the pointer is over it and records whether it has been clicked.

pub mod style;
pub mod tree;
pub mod typography;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use style::StyleMap;
use tree::{Handler, Node, Role};
use typography::Variant;

pub const TRIGGER_LABEL: &str = "Hover over me";
pub const CONTENT_TEXT: &str = "Custom Component Content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
}

impl PointerEvent {
    pub const ALL: [PointerEvent; 3] = [PointerEvent::Enter, PointerEvent::Leave, PointerEvent::Click];

    pub fn as_str(self) -> &'static str {
        match self {
            PointerEvent::Enter => "enter",
            PointerEvent::Leave => "leave",
            PointerEvent::Click => "click",
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pointer event {0:?} (expected enter, leave or click)")]
pub struct ParseEventError(String);

impl FromStr for PointerEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PointerEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == wanted)
            .ok_or_else(|| ParseEventError(s.to_string()))
    }
}

/// Local state of one mounted widget. Dropping it is unmounting; a new
/// mount starts from `default()` with both flags cleared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopupTrigger {
    show_image: bool,
    show_full_image: bool,
}

impl PopupTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_enter(&mut self) {
        self.show_image = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.show_image = false;
    }

    /// Sets the full flag. It is never cleared and nothing renders it.
    pub fn on_click(&mut self) {
        self.show_full_image = true;
    }

    /// Dispatches `event` and reports whether any state changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let before = *self;
        match event {
            PointerEvent::Enter => self.on_pointer_enter(),
            PointerEvent::Leave => self.on_pointer_leave(),
            PointerEvent::Click => self.on_click(),
        }
        let changed = before != *self;
        tracing::debug!(%event, changed, show_image = self.show_image, show_full_image = self.show_full_image, "popup event");
        changed
    }

    pub fn is_panel_visible(&self) -> bool {
        self.show_image
    }

    pub fn is_full(&self) -> bool {
        self.show_full_image
    }

    /// Builds the render tree. The panel subtree exists only while the
    /// pointer is over the widget.
    pub fn render(&self) -> Node {
        let trigger = Node::button(TRIGGER_LABEL, trigger_style())
            .on(Handler::PointerEnter)
            .on(Handler::PointerLeave)
            .on(Handler::Click);

        let mut region = Node::block(Role::HoverRegion, region_style())
            .on(Handler::PointerEnter)
            .on(Handler::PointerLeave)
            .child(trigger);

        if self.show_image {
            region = region.child(
                Node::block(Role::Panel, panel_style()).child(custom_content(self.show_full_image)),
            );
        }

        Node::block(Role::Page, page_style()).child(region)
    }
}

// `full` is handed to the content block but no branch below reads it.
fn custom_content(full: bool) -> Node {
    Node::block(Role::Content, content_style())
        .attribute("full", full)
        .child(Node::text(Variant::Body1, CONTENT_TEXT))
}

fn page_style() -> StyleMap {
    StyleMap::new()
        .with("display", "flex")
        .with("justify-content", "center")
        .with("align-items", "center")
        .with("height", "100vh")
}

fn region_style() -> StyleMap {
    StyleMap::new().with("position", "relative")
}

fn trigger_style() -> StyleMap {
    StyleMap::new()
        .with("padding", "10px 20px")
        .with("font-size", "16px")
        .with("background-color", "#f0f0f0")
        .with("border", "none")
        .with("cursor", "pointer")
}

fn panel_style() -> StyleMap {
    StyleMap::new()
        .with("position", "absolute")
        .with("top", "100%")
        .with("left", "50%")
        .with("transform", "translate(-50%, 0)")
        .with("width", "300px")
        .with("height", "200px")
        .with("margin-top", "10px")
        .with("overflow", "hidden")
}

fn content_style() -> StyleMap {
    StyleMap::new()
        .with("background-color", "lightblue")
        .with("padding", "20px")
}

/// One step of a replayed event sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub event: PointerEvent,
    pub changed: bool,
    pub state: PopupTrigger,
}

/// Mounts a fresh widget and feeds it `events` in order.
pub fn replay(events: &[PointerEvent]) -> (PopupTrigger, Vec<Transition>) {
    let mut widget = PopupTrigger::new();
    let transitions = events
        .iter()
        .map(|&event| {
            let changed = widget.handle(event);
            Transition {
                event,
                changed,
                state: widget,
            }
        })
        .collect();
    (widget, transitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use style::BoxStyle;

    #[test]
    fn every_built_in_style_resolves_cleanly() {
        for map in [
            page_style(),
            region_style(),
            trigger_style(),
            panel_style(),
            content_style(),
        ] {
            let (_, errors) = BoxStyle::resolve(&map);
            assert!(errors.is_empty(), "{map}: {errors:?}");
        }
    }

    #[test]
    fn event_names_parse_case_insensitively() {
        assert_eq!(" Enter ".parse::<PointerEvent>(), Ok(PointerEvent::Enter));
        assert_eq!("CLICK".parse::<PointerEvent>(), Ok(PointerEvent::Click));
        assert!("hover".parse::<PointerEvent>().is_err());
    }

    #[test]
    fn panel_style_is_fixed_size_and_clipped() {
        let (panel, _) = BoxStyle::resolve(&panel_style());
        assert_eq!(panel.width, Some(iced_core::Length::Fixed(300.0)));
        assert_eq!(panel.height, Some(iced_core::Length::Fixed(200.0)));
        assert_eq!(panel.margin_top, 10.0);
        assert!(panel.clip);
    }
}
