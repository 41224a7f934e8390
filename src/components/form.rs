// Form - wraps fields, forwards the submit handler

use super::Component;
use crate::markup::{Attributes, Callback, Element, Node, Tag};
use crate::style::{resolve, ComponentKind, FormVariant, Size};
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub class: Option<String>,
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
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

    /// Shorthand for `attrs.on_submit`
    pub fn on_submit(mut self, callback: impl Into<Callback>) -> Self {
        self.attrs.on_submit = Some(callback.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for Form {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Form
    }

    fn class_name(&self) -> String {
        resolve(
            self.kind().as_str(),
            self.variant
                .as_deref()
                .unwrap_or(FormVariant::default().as_str()),
            self.size.as_deref().unwrap_or(Size::default().as_str()),
            self.class.as_deref(),
        )
    }

    fn render(&self) -> Node {
        Element::new(Tag::Form)
            .class(self.class_name())
            .attrs(self.attrs.clone())
            .children(self.children.iter().cloned())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn defaults_to_primary_medium() {
        assert_eq!(Form::new().class_name(), "form form--primary form--medium");
    }

    #[test]
    fn submit_handler_is_forwarded() {
        let submitted = Rc::new(Cell::new(false));
        let flag = submitted.clone();
        let node = Form::new()
            .variant(FormVariant::Secondary)
            .size(Size::Large)
            .on_submit(move || flag.set(true))
            .child(Element::new(Tag::Input))
            .render();

        let el = node.as_element().unwrap();
        assert_eq!(el.tag, Tag::Form);
        assert_eq!(el.class.as_deref(), Some("form form--secondary form--large"));
        assert_eq!(el.children.len(), 1);

        el.attrs.on_submit.as_ref().unwrap().call();
        assert!(submitted.get());
    }
}
