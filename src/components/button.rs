// Button - the simplest component
//
// <button class="button button--{variant} button--{size} {class}" ...attrs>
//   children
// </button>

use super::Component;
use crate::markup::{Attributes, Element, Node, Tag};
use crate::style::{resolve, ButtonVariant, ComponentKind, Size};
use std::fmt;

/// Button props
///
/// Variant and size are stored as names so values outside the typed
/// vocabulary still style literally.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub class: Option<String>,
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button with a single text child
    pub fn label(text: impl Into<String>) -> Self {
        Self::new().child(Node::text(text))
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

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for Button {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
    }

    fn class_name(&self) -> String {
        resolve(
            self.kind().as_str(),
            self.variant
                .as_deref()
                .unwrap_or(ButtonVariant::default().as_str()),
            self.size.as_deref().unwrap_or(Size::default().as_str()),
            self.class.as_deref(),
        )
    }

    fn render(&self) -> Node {
        Element::new(Tag::Button)
            .class(self.class_name())
            .attrs(self.attrs.clone())
            .children(self.children.iter().cloned())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ButtonType;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn defaults_to_primary_medium() {
        let node = Button::label("Go").render();
        let el = node.as_element().unwrap();

        assert_eq!(el.tag, Tag::Button);
        assert_eq!(
            el.class.as_deref(),
            Some("button button--primary button--medium")
        );
        assert_eq!(node.text_content(), "Go");
    }

    #[test]
    fn typed_and_literal_variants_resolve_alike() {
        let typed = Button::new().variant(ButtonVariant::Outline).size(Size::Large);
        let literal = Button::new().variant("outline").size("large");
        assert_eq!(typed.class_name(), literal.class_name());
        assert_eq!(typed.class_name(), "button button--outline button--large");

        let unknown = Button::new().variant("ghost");
        assert_eq!(unknown.class_name(), "button button--ghost button--medium");
    }

    #[test]
    fn extra_classes_are_appended() {
        let button = Button::new()
            .variant(ButtonVariant::Secondary)
            .size(Size::Small)
            .class("x");
        assert_eq!(button.class_name(), "button button--secondary button--small x");
    }

    #[test]
    fn attributes_are_forwarded_unchanged() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let node = Button::label("Send")
            .attrs(
                Attributes::new()
                    .disabled(true)
                    .button_type(ButtonType::Submit)
                    .on_click(move || counter.set(counter.get() + 1))
                    .set("data-testid", "send"),
            )
            .render();

        let attrs = &node.as_element().unwrap().attrs;
        assert!(attrs.disabled);
        assert_eq!(attrs.button_type, Some(ButtonType::Submit));
        assert_eq!(attrs.extra.get("data-testid").map(String::as_str), Some("send"));

        attrs.on_click.as_ref().unwrap().call();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn rendering_is_repeatable() {
        let button = Button::label("Again").class("wide");
        let first = crate::markup::html::to_html(&button.render());
        let second = crate::markup::html::to_html(&button.render());
        assert_eq!(first, second);
    }
}
