//! Modal lifecycle
//!
//! [`ModalController`] owns the open/closed state of one dialog and the
//! document-level side effects that go with it. Those side effects go through
//! an injected [`Environment`] so hosts and tests supply their own document.

pub mod controller;
pub mod environment;

pub use controller::{ModalController, ModalGuard, ModalState, DISMISS_KEY};
pub use environment::{Document, Environment, KeyHandler, ListenerId, Overflow};
