// Dialog - modal markup plus its lifecycle
//
// While open the dialog renders as two siblings:
//
//   <div class="dialog-overlay" onclick=on_close>
//   <div class="dialog dialog--{variant} dialog--{size}" role="dialog" aria-modal="true">
//     <div class="dialog__header">
//       <h2 class="dialog__title">title</h2>
//       <button class="dialog__close" aria-label="Close">×</button>   (optional)
//     </div>
//     <div class="dialog__content">children</div>
//     <div class="dialog__actions">actions</div>                      (only if any)
//   </div>
//
// Closed renders nothing.

use crate::markup::{Attributes, Callback, Element, Node, Tag};
use crate::modal::{Environment, ModalController, ModalState};
use crate::style::{resolve, ComponentKind, DialogVariant, Size};
use std::fmt;
use std::rc::Rc;

pub const OVERLAY_CLASS: &str = "dialog-overlay";
pub const HEADER_CLASS: &str = "dialog__header";
pub const TITLE_CLASS: &str = "dialog__title";
pub const CLOSE_CLASS: &str = "dialog__close";
pub const CONTENT_CLASS: &str = "dialog__content";
pub const ACTIONS_CLASS: &str = "dialog__actions";

const CLOSE_LABEL: &str = "Close";
const CLOSE_GLYPH: &str = "×";

/// Caller-owned dialog props
///
/// Only `is_open` drives lifecycle effects; everything else is presentation.
#[derive(Debug, Clone)]
pub struct DialogProps {
    pub is_open: bool,
    pub on_close: Callback,
    pub title: String,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub show_close_button: bool,
    pub class: Option<String>,
    pub children: Vec<Node>,
    pub actions: Vec<Node>,
}

impl DialogProps {
    pub fn new(title: impl Into<String>, on_close: impl Into<Callback>) -> Self {
        Self {
            is_open: false,
            on_close: on_close.into(),
            title: title.into(),
            variant: None,
            size: None,
            show_close_button: true,
            class: None,
            children: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn variant(mut self, variant: impl fmt::Display) -> Self {
        self.variant = Some(variant.to_string());
        self
    }

    pub fn size(mut self, size: impl fmt::Display) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn action(mut self, action: impl Into<Node>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn class_name(&self) -> String {
        resolve(
            ComponentKind::Dialog.as_str(),
            self.variant
                .as_deref()
                .unwrap_or(DialogVariant::default().as_str()),
            self.size.as_deref().unwrap_or(Size::default().as_str()),
            self.class.as_deref(),
        )
    }
}

/// Markup for an open dialog, independent of lifecycle
pub fn dialog_markup(props: &DialogProps) -> Node {
    let overlay = Element::new(Tag::Div)
        .class(OVERLAY_CLASS)
        .attrs(Attributes::new().on_click(props.on_close.clone()));

    let mut header = Element::new(Tag::Div)
        .class(HEADER_CLASS)
        .child(
            Element::new(Tag::H2)
                .class(TITLE_CLASS)
                .child(props.title.as_str()),
        );
    if props.show_close_button {
        header = header.child(
            Element::new(Tag::Button)
                .class(CLOSE_CLASS)
                .attrs(
                    Attributes::new()
                        .aria_label(CLOSE_LABEL)
                        .on_click(props.on_close.clone()),
                )
                .child(CLOSE_GLYPH),
        );
    }

    let content = Element::new(Tag::Div)
        .class(CONTENT_CLASS)
        .children(props.children.iter().cloned());

    let mut container = Element::new(Tag::Div)
        .class(props.class_name())
        .attrs(Attributes::new().role("dialog").aria_modal(true))
        .child(header)
        .child(content);
    if !props.actions.is_empty() {
        container = container.child(
            Element::new(Tag::Div)
                .class(ACTIONS_CLASS)
                .children(props.actions.iter().cloned()),
        );
    }

    Node::fragment(vec![overlay.into(), container.into()])
}

/// Stateful dialog: one lifecycle controller per instance
#[derive(Debug)]
pub struct Dialog {
    controller: ModalController,
}

impl Dialog {
    pub fn new(env: Rc<dyn Environment>) -> Self {
        Self {
            controller: ModalController::new(env),
        }
    }

    /// Reconcile the lifecycle with `props` and return the markup to show
    pub fn render(&mut self, props: &DialogProps) -> Option<Node> {
        match self.controller.sync(props.is_open, &props.on_close) {
            ModalState::Open => Some(dialog_markup(props)),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn unmount(self) {
        self.controller.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Button;
    use crate::components::Component;
    use crate::modal::Document;
    use crossterm::event::KeyCode;
    use std::cell::Cell;

    fn counter() -> (Callback, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let inner = calls.clone();
        (Callback::new(move || inner.set(inner.get() + 1)), calls)
    }

    fn container(node: &Node) -> &Element {
        node.find_by_class("dialog").unwrap()
    }

    #[test]
    fn closed_renders_nothing_and_holds_nothing() {
        let doc = Rc::new(Document::new());
        let mut dialog = Dialog::new(doc.clone());

        assert!(dialog.render(&DialogProps::new("Hi", || {})).is_none());
        assert!(!dialog.is_open());
        assert_eq!(doc.listener_count(), 0);
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn open_renders_full_structure() {
        let doc = Rc::new(Document::new());
        let mut dialog = Dialog::new(doc.clone());
        let props = DialogProps::new("Default Dialog", || {})
            .open(true)
            .child(Element::new(Tag::P).child("Body"));

        let node = dialog.render(&props).unwrap();

        let el = container(&node);
        assert_eq!(el.class.as_deref(), Some("dialog dialog--default dialog--medium"));
        assert_eq!(el.attrs.role.as_deref(), Some("dialog"));
        assert!(el.attrs.aria_modal);

        assert!(node.find_by_class(OVERLAY_CLASS).is_some());
        let title = node.find_by_class(TITLE_CLASS).unwrap();
        assert_eq!(title.tag, Tag::H2);
        let close = node.find_by_class(CLOSE_CLASS).unwrap();
        assert_eq!(close.attrs.aria_label.as_deref(), Some("Close"));
        assert_eq!(
            node.find_by_class(CONTENT_CLASS).map(|c| c.children.len()),
            Some(1)
        );

        assert_eq!(doc.listener_count(), 1);
        assert!(doc.is_scroll_locked());
    }

    #[test]
    fn actions_region_only_when_actions_given() {
        let props = DialogProps::new("T", || {}).open(true);
        assert!(dialog_markup(&props).find_by_class(ACTIONS_CLASS).is_none());

        let props = props.action(Button::label("Confirm").render());
        let node = dialog_markup(&props);
        let actions = node.find_by_class(ACTIONS_CLASS).unwrap();
        assert_eq!(actions.children.len(), 1);
    }

    #[test]
    fn close_button_can_be_hidden() {
        let props = DialogProps::new("T", || {}).show_close_button(false);
        let node = dialog_markup(&props);
        assert!(node.find_by_class(CLOSE_CLASS).is_none());
        assert!(node.find_by_class(TITLE_CLASS).is_some());
    }

    #[test]
    fn variant_and_size_reach_the_container() {
        let props = DialogProps::new("Error", || {})
            .variant(DialogVariant::Error)
            .size(Size::Large);
        assert_eq!(props.class_name(), "dialog dialog--error dialog--large");
    }

    #[test]
    fn overlay_and_close_button_delegate_to_on_close() {
        let (close, calls) = counter();
        let props = DialogProps::new("T", close);
        let node = dialog_markup(&props);

        for class in [OVERLAY_CLASS, CLOSE_CLASS] {
            let el = node.find_by_class(class).unwrap();
            el.attrs.on_click.as_ref().unwrap().call();
        }
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn escape_delegates_and_dialog_stays_until_caller_closes() {
        let doc = Rc::new(Document::new());
        let mut dialog = Dialog::new(doc.clone());
        let (close, calls) = counter();
        let props = DialogProps::new("T", close).open(true);

        dialog.render(&props);
        doc.dispatch_key(&KeyCode::Esc);
        assert_eq!(calls.get(), 1);
        assert!(dialog.render(&props).is_some());

        assert!(dialog.render(&props.clone().open(false)).is_none());
        assert_eq!(doc.listener_count(), 0);
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn unmount_while_open_releases() {
        let doc = Rc::new(Document::new());
        let mut dialog = Dialog::new(doc.clone());
        dialog.render(&DialogProps::new("T", || {}).open(true));

        dialog.unmount();
        assert_eq!(doc.listener_count(), 0);
        assert!(!doc.is_scroll_locked());
    }
}
