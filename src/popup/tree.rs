use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

use super::PointerEvent;
use super::style::StyleMap;
use super::typography::Variant;

/// What a block is for. Hosts use this for lookups, never for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Page,
    HoverRegion,
    Panel,
    Content,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Page => "page",
            Role::HoverRegion => "hover_region",
            Role::Panel => "panel",
            Role::Content => "content",
        }
    }
}

/// Event hooks attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handler {
    PointerEnter,
    PointerLeave,
    Click,
}

impl Handler {
    pub fn event(self) -> PointerEvent {
        match self {
            Handler::PointerEnter => PointerEvent::Enter,
            Handler::PointerLeave => PointerEvent::Leave,
            Handler::Click => PointerEvent::Click,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handler::PointerEnter => "pointer_enter",
            Handler::PointerLeave => "pointer_leave",
            Handler::Click => "click",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Block {
        role: Role,
        style: StyleMap,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        handlers: Vec<Handler>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        attributes: BTreeMap<String, String>,
        children: Vec<Node>,
    },
    Button {
        label: String,
        style: StyleMap,
        handlers: Vec<Handler>,
    },
    Text {
        variant: Variant,
        content: String,
    },
}

impl Node {
    pub fn block(role: Role, style: StyleMap) -> Self {
        Node::Block {
            role,
            style,
            handlers: Vec::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn button(label: impl Into<String>, style: StyleMap) -> Self {
        Node::Button {
            label: label.into(),
            style,
            handlers: Vec::new(),
        }
    }

    pub fn text(variant: Variant, content: impl Into<String>) -> Self {
        Node::Text {
            variant,
            content: content.into(),
        }
    }

    /// No-op on text nodes.
    pub fn on(mut self, handler: Handler) -> Self {
        match &mut self {
            Node::Block { handlers, .. } | Node::Button { handlers, .. } => {
                if !handlers.contains(&handler) {
                    handlers.push(handler);
                }
            }
            Node::Text { .. } => {}
        }
        self
    }

    /// No-op on anything but blocks.
    pub fn attribute(mut self, key: &str, value: impl ToString) -> Self {
        if let Node::Block { attributes, .. } = &mut self {
            attributes.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// No-op on anything but blocks.
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Block { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Node::Block { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn handlers(&self) -> &[Handler] {
        match self {
            Node::Block { handlers, .. } | Node::Button { handlers, .. } => handlers,
            Node::Text { .. } => &[],
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block { children, .. } => children,
            _ => &[],
        }
    }

    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        match self {
            Node::Block { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Depth-first search for the first block with `role`.
    pub fn find(&self, role: Role) -> Option<&Node> {
        if self.role() == Some(role) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(role))
    }

    pub fn find_button(&self) -> Option<&Node> {
        if matches!(self, Node::Button { .. }) {
            return Some(self);
        }
        self.children().iter().find_map(Node::find_button)
    }

    pub fn contains_role(&self, role: Role) -> bool {
        self.find(role).is_some()
    }

    /// Every visible string in document order: button labels and text runs.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Text { content, .. } => out.push(content),
            Node::Button { label, .. } => out.push(label),
            Node::Block { children, .. } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().contains(&needle)
    }

    /// Indented one-node-per-line dump used by the CLI.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Block {
                role,
                style,
                handlers,
                attributes,
                children,
            } => {
                write!(out, "{indent}{}", role.as_str())?;
                write_handlers(out, handlers)?;
                for (key, value) in attributes {
                    write!(out, " {key}={value}")?;
                }
                if !style.is_empty() {
                    write!(out, " {{{style}}}")?;
                }
                writeln!(out)?;
                for child in children {
                    child.write_outline(out, depth + 1)?;
                }
            }
            Node::Button {
                label,
                style,
                handlers,
            } => {
                write!(out, "{indent}button {label:?}")?;
                write_handlers(out, handlers)?;
                writeln!(out, " {{{style}}}")?;
            }
            Node::Text { variant, content } => {
                writeln!(out, "{indent}text({variant}) {content:?}")?;
            }
        }
        Ok(())
    }
}

fn write_handlers(out: &mut String, handlers: &[Handler]) -> fmt::Result {
    if handlers.is_empty() {
        return Ok(());
    }
    let names: Vec<_> = handlers.iter().map(|handler| handler.as_str()).collect();
    write!(out, " [{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::block(Role::Page, StyleMap::new().with("height", "100vh")).child(
            Node::block(Role::HoverRegion, StyleMap::new())
                .on(Handler::PointerEnter)
                .on(Handler::PointerEnter)
                .child(Node::button("Go", StyleMap::new()).on(Handler::Click))
                .child(
                    Node::block(Role::Content, StyleMap::new())
                        .attribute("full", false)
                        .child(Node::text(Variant::Body1, "hello")),
                ),
        )
    }

    #[test]
    fn lookups_walk_the_whole_tree() {
        let tree = sample();
        let region = tree.find(Role::HoverRegion).expect("region");
        assert_eq!(region.handlers(), &[Handler::PointerEnter]);
        assert!(!tree.contains_role(Role::Panel));
        assert_eq!(tree.texts(), vec!["Go", "hello"]);
        assert_eq!(
            tree.find(Role::Content).and_then(|n| n.get_attribute("full")),
            Some("false")
        );
        assert_eq!(tree.find_button().map(Node::handlers), Some(&[Handler::Click][..]));
    }

    #[test]
    fn builders_ignore_mismatched_nodes() {
        let text = Node::text(Variant::Body1, "x")
            .on(Handler::Click)
            .child(Node::text(Variant::Body1, "y"))
            .attribute("k", "v");
        assert_eq!(text, Node::text(Variant::Body1, "x"));
    }

    #[test]
    fn outline_is_indented_by_depth() {
        let outline = sample().outline();
        let lines: Vec<_> = outline.lines().collect();
        assert_eq!(lines[0], "page {height: 100vh}");
        assert_eq!(lines[1], "  hover_region [pointer_enter]");
        assert_eq!(lines[2], "    button \"Go\" [click] {}");
        assert_eq!(lines[3], "    content full=false");
        assert_eq!(lines[4], "      text(body1) \"hello\"");
    }

    #[test]
    fn serializes_with_kind_tags() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["kind"], "block");
        assert_eq!(json["role"], "page");
        assert_eq!(json["style"]["height"], "100vh");
        assert!(json.get("handlers").is_none());
        assert_eq!(json["children"][0]["children"][0]["kind"], "button");
    }
}
