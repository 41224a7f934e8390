//! Declarative markup - the render boundary
//!
//! Components never draw anything themselves. They return a [`Node`] tree
//! describing elements, their classes and attributes, and any event
//! callbacks. A host turns that description into something visible:
//!
//! - [`html`] serializes it to an HTML string
//! - `tui::host` materializes it into ratatui widgets
//!
//! Attributes are a typed base set plus an open `extra` map, so pass-through
//! values reach the host without the component inspecting them.

pub mod html;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Zero-argument event callback (click, submit, close)
///
/// Cheap to clone; clones share the same closure.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Callback that does nothing
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn call(&self) {
        (self.0)()
    }

    /// Whether both handles point at the same closure
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Element tags the design system emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Button,
    Ul,
    Li,
    Form,
    Div,
    Section,
    H1,
    H2,
    H3,
    P,
    Span,
    Input,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Button => "button",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Form => "form",
            Tag::Div => "div",
            Tag::Section => "section",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Input => "input",
        }
    }

    /// Void elements have no closing tag and no children
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Input)
    }

    /// Headings get their own line and emphasis in text hosts
    pub fn is_heading(&self) -> bool {
        matches!(self, Tag::H1 | Tag::H2 | Tag::H3)
    }
}

/// `type` attribute of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "button" => Some(ButtonType::Button),
            "submit" => Some(ButtonType::Submit),
            "reset" => Some(ButtonType::Reset),
            _ => None,
        }
    }
}

/// Attribute names owned by typed fields (or by `Element::class`)
pub const RESERVED_ATTRIBUTES: [&str; 6] =
    ["class", "type", "role", "aria-label", "aria-modal", "disabled"];

/// Whether `name` may be written as a pass-through attribute
///
/// Follows the HTML attribute-name grammar (no whitespace, controls, quotes,
/// `>`, `/` or `=`) and excludes names that typed fields already write.
pub fn is_passthrough_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
        && !RESERVED_ATTRIBUTES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// Attributes carried by an element
///
/// Handlers are skipped when serializing; hosts call them directly.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    pub disabled: bool,
    pub button_type: Option<ButtonType>,
    pub role: Option<String>,
    pub aria_label: Option<String>,
    pub aria_modal: bool,
    pub on_click: Option<Callback>,
    pub on_submit: Option<Callback>,

    /// Open extension point for anything not modeled above (id, data-*, title...)
    ///
    /// Only entries accepted by [`Attributes::writes_extra`] are emitted.
    pub extra: BTreeMap<String, String>,
}

/// Flat map: typed attributes first, then the pass-through entries
impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.disabled {
            map.serialize_entry("disabled", &true)?;
        }
        if let Some(button_type) = &self.button_type {
            map.serialize_entry("type", button_type)?;
        }
        if let Some(role) = &self.role {
            map.serialize_entry("role", role)?;
        }
        if let Some(label) = &self.aria_label {
            map.serialize_entry("aria-label", label)?;
        }
        if self.aria_modal {
            map.serialize_entry("aria-modal", &true)?;
        }
        for (name, value) in self.passthrough() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn aria_modal(mut self, modal: bool) -> Self {
        self.aria_modal = modal;
        self
    }

    pub fn on_click(mut self, callback: impl Into<Callback>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    pub fn on_submit(mut self, callback: impl Into<Callback>) -> Self {
        self.on_submit = Some(callback.into());
        self
    }

    /// Set an arbitrary pass-through attribute
    ///
    /// Names owned by a typed field are routed to that field. `class` belongs
    /// to the element and names that are not valid attribute names are
    /// dropped with a warning.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.to_ascii_lowercase().as_str() {
            "disabled" => self.disabled = !value.eq_ignore_ascii_case("false"),
            "role" => self.role = Some(value),
            "aria-label" => self.aria_label = Some(value),
            "aria-modal" => self.aria_modal = value.eq_ignore_ascii_case("true"),
            // Button types are typed; anything else (input types) passes through
            "type" => match ButtonType::parse(&value) {
                Some(button_type) => {
                    self.button_type = Some(button_type);
                    self.extra.remove("type");
                }
                None => {
                    self.button_type = None;
                    self.extra.insert("type".to_string(), value);
                }
            },
            _ if is_passthrough_name(&name) => {
                self.extra.insert(name, value);
            }
            _ => warn!(name = name.as_str(), "ignoring attribute that cannot be passed through"),
        }
        self
    }

    /// Whether a host writes the `extra` entry `name`
    ///
    /// `type` is reserved only while `button_type` holds it.
    pub fn writes_extra(&self, name: &str) -> bool {
        is_passthrough_name(name) || (name == "type" && self.button_type.is_none())
    }

    /// The `extra` entries a host writes, in name order
    pub fn passthrough(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.extra
            .iter()
            .filter(|(name, _)| self.writes_extra(name))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// A single element in the tree
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub attrs: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class: None,
            attrs: Attributes::default(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the class attribute contains `token` as a whole word
    pub fn has_class(&self, token: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|t| t == token))
    }
}

/// Node of the declarative tree
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
    /// Sibling nodes with no wrapper of their own
    Fragment { children: Vec<Node> },
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::text(text)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment { children }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Direct children (empty for text)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Fragment { children } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Depth-first search for the first element carrying `token`
    pub fn find_by_class(&self, token: &str) -> Option<&Element> {
        if let Node::Element(el) = self {
            if el.has_class(token) {
                return Some(el);
            }
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_class(token))
    }

    /// Every element carrying `token`, in document order
    pub fn find_all_by_class(&self, token: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(token, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, token: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(el) = self {
            if el.has_class(token) {
                found.push(el);
            }
        }
        for child in self.children() {
            child.collect_by_class(token, found);
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { text } => text.clone(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample() -> Node {
        Element::new(Tag::Div)
            .class("outer box")
            .child(Element::new(Tag::Span).class("box inner").child("a"))
            .child(Node::fragment(vec![
                Node::text("b"),
                Element::new(Tag::Span).class("inner").child("c").into(),
            ]))
            .into()
    }

    #[test]
    fn class_matching_is_whole_word() {
        let el = Element::new(Tag::Div).class("dialog dialog--info");
        assert!(el.has_class("dialog"));
        assert!(el.has_class("dialog--info"));
        assert!(!el.has_class("dialog--"));
        assert!(!Element::new(Tag::Div).has_class("dialog"));
    }

    #[test]
    fn find_by_class_is_depth_first() {
        let tree = sample();
        let first = tree.find_by_class("box").unwrap();
        assert_eq!(first.class.as_deref(), Some("outer box"));
        assert_eq!(tree.find_all_by_class("inner").len(), 2);
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn text_content_flattens_fragments() {
        assert_eq!(sample().text_content(), "abc");
    }

    #[test]
    fn callbacks_share_their_closure() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let cb = Callback::new(move || counter.set(counter.get() + 1));
        let clone = cb.clone();

        cb.call();
        clone.call();

        assert_eq!(hits.get(), 2);
        assert!(cb.ptr_eq(&clone));
        assert!(!cb.ptr_eq(&Callback::noop()));
    }

    #[test]
    fn set_routes_typed_names_to_their_fields() {
        let attrs = Attributes::new()
            .set("role", "note")
            .set("aria-label", "Help")
            .set("type", "submit")
            .set("disabled", "")
            .set("aria-modal", "true")
            .set("data-x", "1");

        assert_eq!(attrs.role.as_deref(), Some("note"));
        assert_eq!(attrs.aria_label.as_deref(), Some("Help"));
        assert_eq!(attrs.button_type, Some(ButtonType::Submit));
        assert!(attrs.disabled);
        assert!(attrs.aria_modal);
        assert_eq!(attrs.extra.len(), 1);
    }

    #[test]
    fn set_drops_class_and_malformed_names() {
        let attrs = Attributes::new()
            .set("class", "b")
            .set("x\" onmouseover=\"alert(1)", "v")
            .set("a b", "v")
            .set("a/b", "v")
            .set("", "v");

        assert!(attrs.extra.is_empty());
    }

    #[test]
    fn non_button_types_pass_through() {
        let input = Attributes::new().set("type", "email");
        assert!(input.button_type.is_none());
        assert_eq!(input.passthrough().collect::<Vec<_>>(), vec![("type", "email")]);

        let button = input.set("type", "reset");
        assert_eq!(button.button_type, Some(ButtonType::Reset));
        assert!(button.extra.is_empty());
    }

    #[test]
    fn passthrough_names_follow_attribute_grammar() {
        assert!(is_passthrough_name("data-id"));
        assert!(is_passthrough_name("placeholder"));
        assert!(!is_passthrough_name("Class"));
        assert!(!is_passthrough_name("on\tclick"));
        assert!(!is_passthrough_name("x>"));
        assert!(!is_passthrough_name("x='1'"));
    }

    #[test]
    fn json_never_duplicates_typed_keys() {
        let mut attrs = Attributes::new().role("dialog");
        // Written directly, bypassing `set`
        attrs.extra.insert("role".into(), "button".into());
        attrs.extra.insert("bad name".into(), "v".into());
        attrs.extra.insert("title".into(), "t".into());

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json.matches("\"role\"").count(), 1);
        assert!(!json.contains("bad name"));

        let value = serde_json::to_value(&attrs).unwrap();
        assert_eq!(value["role"], "dialog");
        assert_eq!(value["title"], "t");
    }

    #[test]
    fn json_skips_handlers_and_flattens_extras() {
        let node: Node = Element::new(Tag::Button)
            .class("button")
            .attrs(
                Attributes::new()
                    .disabled(true)
                    .on_click(|| {})
                    .set("data-id", "7"),
            )
            .child("Go")
            .into();

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node"], "element");
        assert_eq!(json["tag"], "button");
        assert_eq!(json["attrs"]["disabled"], true);
        assert_eq!(json["attrs"]["data-id"], "7");
        assert!(json["attrs"].get("on_click").is_none());
        assert_eq!(json["children"][0]["text"], "Go");
    }
}
