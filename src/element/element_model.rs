use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout axis for a container's children. Purely descriptive data; nothing
/// in this crate interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "VERTICAL"),
            Orientation::Horizontal => write!(f, "HORIZONTAL"),
        }
    }
}

/// A node in a finalized layout tree.
///
/// Closed set of variants; consumers dispatch with an exhaustive `match`.
/// A `Screen` is deliberately not a variant: screens are roots only and can
/// never appear as a child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Container(Container),
    Text(Text),
    Button(Button),
}

impl Element {
    /// Caller-supplied identifier of this node.
    pub fn id(&self) -> &str {
        match self {
            Element::Container(c) => c.id(),
            Element::Text(t) => t.id(),
            Element::Button(b) => b.id(),
        }
    }
}

/// Root of a finalized layout tree.
///
/// Only obtainable from a completed `define_screen` call (or by
/// deserializing a snapshot of one). Fields are private; the tree is
/// read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    id: String,
    title: Option<String>,
    children: Vec<Element>,
}

impl Screen {
    pub(crate) fn new(id: String, title: Option<String>, children: Vec<Element>) -> Self {
        Self { id, title, children }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Screen title, absent if never set during construction.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Children in construction order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// A grouping node holding any mix of child elements, including nested
/// containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    id: String,
    orientation: Orientation,
    children: Vec<Element>,
}

impl Container {
    pub(crate) fn new(id: String, orientation: Orientation, children: Vec<Element>) -> Self {
        Self { id, orientation, children }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Children in construction order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    id: String,
    text: String,
}

impl Text {
    pub(crate) fn new(id: String, text: String) -> Self {
        Self { id, text }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A button leaf. The action id is an opaque reference to behavior owned by
/// whoever consumes the tree; it is never invoked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    id: String,
    text: String,
    on_click_action_id: String,
}

impl Button {
    pub(crate) fn new(id: String, text: String, on_click_action_id: String) -> Self {
        Self { id, text, on_click_action_id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn on_click_action_id(&self) -> &str {
        &self.on_click_action_id
    }
}
