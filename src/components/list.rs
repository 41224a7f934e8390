// List - one <li class="list__item"> per child
//
// Children are wrapped, never inspected. A list can optionally decorate every
// item with a trailing marker span; the plain list has none.

use super::Component;
use crate::markup::{Attributes, Element, Node, Tag};
use crate::style::{resolve, ComponentKind, ListVariant, Size};
use std::fmt;

pub const ITEM_CLASS: &str = "list__item";
pub const MARKER_CLASS: &str = "list__marker";

/// Per-item decoration policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ItemDecoration {
    #[default]
    None,
    /// Decorative glyph appended to every item (`role="img"`, labeled)
    Marker { glyph: String, label: String },
}

impl ItemDecoration {
    /// The stock marker used by the gallery
    pub fn marker() -> Self {
        ItemDecoration::Marker {
            glyph: "🤡".to_string(),
            label: "clown".to_string(),
        }
    }

    /// Parse a config value ("none" or "marker")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Some(ItemDecoration::None),
            "marker" | "on" => Some(Self::marker()),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemDecoration::None => "none",
            ItemDecoration::Marker { .. } => "marker",
        }
    }

    fn decorate(&self) -> Option<Node> {
        match self {
            ItemDecoration::None => None,
            ItemDecoration::Marker { glyph, label } => Some(
                Element::new(Tag::Span)
                    .class(MARKER_CLASS)
                    .attrs(Attributes::new().role("img").aria_label(label.as_str()))
                    .child(glyph.as_str())
                    .into(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct List {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub class: Option<String>,
    pub attrs: Attributes,
    pub decoration: ItemDecoration,
    pub children: Vec<Node>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// List of plain text items
    pub fn of<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            children: items.into_iter().map(Node::text).collect(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: impl fmt::Display) -> Self {
        self.variant = Some(variant.to_string());
        self
    }

    pub fn size(mut self, size: impl fmt::Display) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn decoration(mut self, decoration: ItemDecoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for List {
    fn kind(&self) -> ComponentKind {
        ComponentKind::List
    }

    fn class_name(&self) -> String {
        resolve(
            self.kind().as_str(),
            self.variant
                .as_deref()
                .unwrap_or(ListVariant::default().as_str()),
            self.size.as_deref().unwrap_or(Size::default().as_str()),
            self.class.as_deref(),
        )
    }

    fn render(&self) -> Node {
        let items = self.children.iter().map(|child| {
            let item = Element::new(Tag::Li).class(ITEM_CLASS).child(child.clone());
            let item = match self.decoration.decorate() {
                Some(marker) => item.child(marker),
                None => item,
            };
            Node::from(item)
        });

        Element::new(Tag::Ul)
            .class(self.class_name())
            .attrs(self.attrs.clone())
            .children(items)
            .into()
    }
}
