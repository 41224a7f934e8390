//! Document environment - the side effects a modal is allowed to have
//!
//! The lifecycle controller never touches global state directly. It talks to
//! an [`Environment`], which owns two document-level resources:
//!
//! - the key listener set (every key press is offered to every listener)
//! - the body overflow flag (scroll lock = `Overflow::Hidden`)
//!
//! [`Document`] is the in-memory implementation. The terminal gallery uses it
//! as its live environment and tests use it as the double, so both exercise
//! the same code.

use crossterm::event::KeyCode;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// Handler invoked with the key of every key press
pub type KeyHandler = Rc<dyn Fn(&KeyCode)>;

/// Token returned by `subscribe_key`, needed to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Scroll behavior of the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Normal scrolling (assumed when nothing else was set)
    #[default]
    Visible,
    /// Scrolling suppressed
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
            Overflow::Scroll => "scroll",
        }
    }

    /// Whether the page may scroll
    pub fn allows_scroll(&self) -> bool {
        !matches!(self, Overflow::Hidden)
    }
}

/// Document-level collaborator injected into modal controllers
///
/// Methods take `&self`: the environment is shared (`Rc`) between the host
/// that dispatches events and every controller that subscribes, so
/// implementations use interior mutability.
pub trait Environment {
    /// Current body overflow
    fn overflow(&self) -> Overflow;

    /// Replace the body overflow
    fn set_overflow(&self, overflow: Overflow);

    /// Register a document-wide key handler
    fn subscribe_key(&self, handler: KeyHandler) -> ListenerId;

    /// Remove a handler. Returns false if the id was not registered.
    fn unsubscribe_key(&self, id: ListenerId) -> bool;

    /// Suppress background scrolling, returning the value to restore later
    fn lock_scroll(&self) -> Overflow {
        let prior = self.overflow();
        self.set_overflow(Overflow::Hidden);
        prior
    }

    /// Undo `lock_scroll` by restoring what it returned
    fn unlock_scroll(&self, prior: Overflow) {
        self.set_overflow(prior);
    }
}

/// In-memory document: overflow flag plus key listener registry
pub struct Document {
    overflow: Cell<Overflow>,
    listeners: RefCell<Vec<(ListenerId, KeyHandler)>>,
    next_id: Cell<u64>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            overflow: Cell::new(Overflow::Visible),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Number of currently registered key listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_scroll_locked(&self) -> bool {
        !self.overflow.get().allows_scroll()
    }

    /// Offer a key press to every listener, in subscription order
    ///
    /// The listener list is snapshotted first, so a handler may subscribe or
    /// unsubscribe (e.g. a dialog closing synchronously) while we iterate.
    /// Returns how many handlers were invoked.
    pub fn dispatch_key(&self, key: &KeyCode) -> usize {
        let snapshot: Vec<KeyHandler> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in &snapshot {
            handler(key);
        }
        snapshot.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("overflow", &self.overflow.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Environment for Document {
    fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    fn set_overflow(&self, overflow: Overflow) {
        trace!(overflow = overflow.as_str(), "document overflow set");
        self.overflow.set(overflow);
    }

    fn subscribe_key(&self, handler: KeyHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe_key(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_and_unsubscribe_exactly_once() {
        let doc = Document::new();
        let id = doc.subscribe_key(Rc::new(|_: &KeyCode| {}));
        assert_eq!(doc.listener_count(), 1);

        assert!(doc.unsubscribe_key(id));
        assert!(!doc.unsubscribe_key(id));
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn listener_ids_are_unique() {
        let doc = Document::new();
        let a = doc.subscribe_key(Rc::new(|_: &KeyCode| {}));
        let b = doc.subscribe_key(Rc::new(|_: &KeyCode| {}));
        assert_ne!(a, b);

        doc.unsubscribe_key(a);
        let c = doc.subscribe_key(Rc::new(|_: &KeyCode| {}));
        assert_ne!(a, c);
    }

    #[test]
    fn dispatch_reaches_every_listener() {
        let doc = Document::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = seen.clone();
            doc.subscribe_key(Rc::new(move |key: &KeyCode| {
                seen.borrow_mut().push((tag, *key));
            }));
        }

        assert_eq!(doc.dispatch_key(&KeyCode::Esc), 2);
        assert_eq!(
            *seen.borrow(),
            vec![("first", KeyCode::Esc), ("second", KeyCode::Esc)]
        );
    }

    #[test]
    fn handler_may_unsubscribe_itself_during_dispatch() {
        let doc = Rc::new(Document::new());
        let slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let handler_doc = doc.clone();
        let handler_slot = slot.clone();
        let id = doc.subscribe_key(Rc::new(move |_: &KeyCode| {
            if let Some(id) = handler_slot.take() {
                handler_doc.unsubscribe_key(id);
            }
        }));
        slot.set(Some(id));

        doc.dispatch_key(&KeyCode::Char('x'));
        assert_eq!(doc.listener_count(), 0);
        assert_eq!(doc.dispatch_key(&KeyCode::Char('x')), 0);
    }

    #[test]
    fn lock_scroll_returns_prior_value() {
        let doc = Document::new();
        doc.set_overflow(Overflow::Auto);

        let prior = doc.lock_scroll();
        assert_eq!(prior, Overflow::Auto);
        assert!(doc.is_scroll_locked());

        doc.unlock_scroll(prior);
        assert_eq!(doc.overflow(), Overflow::Auto);
    }
}
