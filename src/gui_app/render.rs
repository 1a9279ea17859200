//! Turns a popup render tree into iced widgets.

use iced::widget::{Column, button, column, container, mouse_area, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Theme, mouse};

use super::iced_ui::Message;
use crate::popup::style::{BoxStyle, StyleMap};
use crate::popup::tree::{Handler, Node};

/// Border drawn around a button when its style does not say `border: none`.
const DEFAULT_BUTTON_BORDER: Color = Color::from_rgb8(118, 118, 118);

/// Where a node sits relative to its ancestors.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    /// Parent is a flex container: auto width shrinks to content.
    in_flex: bool,
    /// An ancestor already publishes pointer-leave for this area.
    leave_owned: bool,
}

pub fn element<'a>(node: &Node) -> Element<'a, Message> {
    render_node(node, Scope::default())
}

fn render_node<'a>(node: &Node, scope: Scope) -> Element<'a, Message> {
    match node {
        Node::Block {
            style,
            handlers,
            children,
            ..
        } => block(style, handlers, children, scope),
        Node::Button {
            label,
            style,
            handlers,
        } => trigger(label, style, handlers, scope),
        Node::Text { variant, content } => text(content.clone())
            .size(variant.font_size())
            .line_height(variant.line_height())
            .into(),
    }
}

fn resolve(style: &StyleMap) -> BoxStyle {
    let (resolved, errors) = BoxStyle::resolve(style);
    for error in errors {
        tracing::warn!("ignoring style property: {error}");
    }
    resolved
}

/// Vertical space an absolutely positioned block takes below its in-flow
/// siblings. Only fixed heights can be reserved.
fn absolute_extent(node: &Node) -> Option<f32> {
    let Node::Block { style, .. } = node else {
        return None;
    };
    let (layout, _) = BoxStyle::resolve(style);
    match layout.height {
        Some(Length::Fixed(height)) if layout.absolute => Some(layout.margin_top + height),
        _ => None,
    }
}

fn block<'a>(
    style: &StyleMap,
    handlers: &[Handler],
    children: &[Node],
    scope: Scope,
) -> Element<'a, Message> {
    let layout = resolve(style);
    let child_scope = Scope {
        in_flex: layout.flex,
        leave_owned: scope.leave_owned || handlers.contains(&Handler::PointerLeave),
    };

    let mut absolute_height = 0.0;
    let mut rendered = Vec::with_capacity(children.len());
    for child in children {
        if let Some(extent) = absolute_extent(child) {
            absolute_height += extent;
        }
        rendered.push(render_node(child, child_scope));
    }

    let content: Element<'a, Message> = if rendered.len() == 1 {
        rendered.remove(0)
    } else {
        column(rendered).align_x(Alignment::Center).into()
    };

    // Auto width fills the parent like a CSS block, except for flex items,
    // which shrink to their content.
    let auto_width = if scope.in_flex { Length::Shrink } else { Length::Fill };
    let width = layout.width.unwrap_or(auto_width);
    let height = layout.height.unwrap_or(Length::Shrink);

    let mut boxed = container(content).padding(layout.padding).clip(layout.clip);
    boxed = if layout.is_centered() {
        boxed.center_x(width).center_y(height)
    } else {
        boxed.width(width).height(height)
    };

    if let Some(color) = layout.background {
        boxed = boxed.style(move |_: &Theme| container::Style {
            background: Some(color.into()),
            text_color: Some(Color::BLACK),
            ..Default::default()
        });
    }

    let boxed: Element<'a, Message> = if layout.margin_top > 0.0 {
        container(boxed)
            .padding(Padding {
                top: layout.margin_top,
                ..Padding::ZERO
            })
            .into()
    } else {
        boxed.into()
    };

    let hovered = with_hover(boxed, handlers, layout.pointer, scope);
    if absolute_height <= 0.0 {
        return hovered;
    }

    // Absolute children hang below the in-flow content. An equal empty band
    // above it keeps the in-flow content at the same spot once centered, and
    // stays outside the hover area.
    let band = container(Column::new()).height(Length::Fixed(absolute_height));
    column![band, hovered].align_x(Alignment::Center).into()
}

fn trigger<'a>(
    label: &str,
    style: &StyleMap,
    handlers: &[Handler],
    scope: Scope,
) -> Element<'a, Message> {
    let layout = resolve(style);

    let mut caption = text(label.to_owned());
    if let Some(size) = layout.font_size {
        caption = caption.size(size);
    }

    let background = layout.background;
    let border_none = layout.border_none;
    let mut trigger = button(caption)
        .padding(layout.padding)
        .style(move |_: &Theme, _status| {
            let mut style = button::Style {
                background: background.map(Background::Color),
                text_color: Color::BLACK,
                ..button::Style::default()
            };
            if !border_none {
                style.border = Border {
                    color: DEFAULT_BUTTON_BORDER,
                    width: 1.0,
                    radius: 2.0.into(),
                };
            }
            style
        });

    if handlers.contains(&Handler::Click) {
        trigger = trigger.on_press(Message::Pointer(Handler::Click.event()));
    }

    with_hover(trigger.into(), handlers, layout.pointer, scope)
}

/// Wraps `content` in a mouse area when it listens for enter/leave or asks
/// for the pointer cursor. Clicks stay on the button itself.
///
/// Inside an area whose ancestor already publishes pointer-leave, the
/// nested leave is dropped: the ancestor fires it when the pointer really
/// goes, and the nested one would fire on the way to a sibling.
fn with_hover<'a>(
    content: Element<'a, Message>,
    handlers: &[Handler],
    pointer: bool,
    scope: Scope,
) -> Element<'a, Message> {
    let hovers = handlers
        .iter()
        .any(|handler| matches!(handler, Handler::PointerEnter | Handler::PointerLeave));
    if !hovers && !pointer {
        return content;
    }

    let mut area = mouse_area(content);
    for handler in handlers {
        let message = Message::Pointer(handler.event());
        area = match handler {
            Handler::PointerEnter => area.on_enter(message),
            Handler::PointerLeave if !scope.leave_owned => area.on_exit(message),
            Handler::PointerLeave | Handler::Click => area,
        };
    }
    if pointer {
        area = area.interaction(mouse::Interaction::Pointer);
    }
    area.into()
}
