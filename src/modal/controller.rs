//! Modal lifecycle controller
//!
//! Two states, driven only by the `is_open` flag the caller passes on every
//! render:
//!
//! ```text
//!            is_open = true
//!   Closed ─────────────────────▶ Open ──┐ Esc / overlay click:
//!     ▲                            │  ◀──┘ call on_close (no state change)
//!     └────────────────────────────┘
//!      is_open = false, unmount or drop
//! ```
//!
//! Entering Open acquires a [`ModalGuard`]: one document key listener plus
//! one scroll lock. Leaving Open drops the guard, and `Drop` releases both,
//! so every exit path (flag flip, explicit unmount, the owner going out of
//! scope, unwinding) cleans up exactly once.
//!
//! The controller never closes itself. Esc only notifies the caller, who is
//! expected to pass `is_open = false` on a later render. Until then the
//! dialog stays open with its listener installed.

use super::environment::{Environment, KeyHandler, ListenerId, Overflow};
use crate::markup::Callback;
use crossterm::event::KeyCode;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// Key that asks an open modal to close
pub const DISMISS_KEY: KeyCode = KeyCode::Esc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Disposer for the side effects of one open period
///
/// Holds the key listener and the overflow value to restore. Released on
/// drop; `release` exists for call sites that want the hand-off spelled out.
pub struct ModalGuard {
    env: Rc<dyn Environment>,
    listener: Option<ListenerId>,
    prior_overflow: Overflow,
    armed: Rc<Cell<bool>>,
}

impl ModalGuard {
    /// Install the dismissal listener and lock scrolling
    ///
    /// `close` is read at key time, so swapping the callback later does not
    /// require a new subscription.
    pub fn acquire(env: Rc<dyn Environment>, close: Rc<RefCell<Callback>>) -> Self {
        let armed = Rc::new(Cell::new(true));

        let handler_armed = Rc::clone(&armed);
        let handler: KeyHandler = Rc::new(move |key: &KeyCode| {
            // A dispatch snapshot can outlive the release of this guard
            if *key != DISMISS_KEY || !handler_armed.get() {
                return;
            }
            debug!("dismiss key pressed, requesting close");
            let callback = close.borrow().clone();
            callback.call();
        });

        let listener = env.subscribe_key(handler);
        let prior_overflow = env.lock_scroll();
        debug!(
            ?listener,
            prior_overflow = prior_overflow.as_str(),
            "modal opened: key listener installed, scroll locked"
        );

        Self {
            env,
            listener: Some(listener),
            prior_overflow,
            armed,
        }
    }

    /// Whether the listener and lock are still held
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Release now instead of at end of scope
    pub fn release(self) {
        drop(self);
    }

    fn release_inner(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        self.armed.set(false);
        let removed = self.env.unsubscribe_key(listener);
        self.env.unlock_scroll(self.prior_overflow);
        debug!(
            ?listener,
            removed,
            restored_overflow = self.prior_overflow.as_str(),
            "modal closed: key listener removed, scroll restored"
        );
    }
}

impl Drop for ModalGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl std::fmt::Debug for ModalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalGuard")
            .field("listener", &self.listener)
            .field("prior_overflow", &self.prior_overflow)
            .finish()
    }
}

/// Lifecycle state machine for a single dialog instance
pub struct ModalController {
    env: Rc<dyn Environment>,
    close: Rc<RefCell<Callback>>,
    guard: Option<ModalGuard>,
}

impl ModalController {
    pub fn new(env: Rc<dyn Environment>) -> Self {
        Self {
            env,
            close: Rc::new(RefCell::new(Callback::noop())),
            guard: None,
        }
    }

    /// Reconcile with the caller's props for this render
    ///
    /// Re-rendering while already open is a no-op apart from picking up a
    /// new close callback.
    pub fn sync(&mut self, is_open: bool, on_close: &Callback) -> ModalState {
        if !self.close.borrow().ptr_eq(on_close) {
            *self.close.borrow_mut() = on_close.clone();
        }

        match (is_open, self.guard.is_some()) {
            (true, false) => {
                self.guard = Some(ModalGuard::acquire(
                    Rc::clone(&self.env),
                    Rc::clone(&self.close),
                ));
            }
            (false, true) => {
                self.guard = None;
            }
            _ => {}
        }

        self.state()
    }

    pub fn state(&self) -> ModalState {
        if self.guard.is_some() {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == ModalState::Open
    }

    /// Tear down, releasing anything held
    pub fn unmount(mut self) {
        if self.guard.take().is_some() {
            debug!("modal unmounted while open");
        }
    }
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("state", &self.state())
            .field("guard", &self.guard)
            .finish()
    }
}
