// Gallery application state
//
// The gallery is the caller of the design system: it owns `is_open` for the
// four demo dialogs and hands each dialog a close callback that clears it.
// The `Document` is the live environment, so the Esc handling and scroll lock
// seen on screen are the controllers' own, not reimplemented here.

use super::host::{self, HitRegion};
use super::scroll::ScrollState;
use crate::components::{Dialog, DialogProps};
use crate::config::{Config, GalleryConfig};
use crate::logging::LogBuffer;
use crate::markup::{Callback, Node};
use crate::modal::{Document, Environment};
use crate::showcase;
use crate::style::{DialogVariant, Stylesheet};
use crossterm::event::KeyCode;
use ratatui::text::Line;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Short-lived notice shown in the corner
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// One demo dialog: its props (caller state) and its lifecycle
struct DialogSlot {
    variant: DialogVariant,
    props: DialogProps,
    dialog: Dialog,
}

/// Main application state for the gallery
pub struct App {
    pub document: Rc<Document>,
    pub sheet: Stylesheet,
    pub gallery: GalleryConfig,
    pub log_buffer: LogBuffer,

    /// Gallery page, flowed once into styled lines
    pub page_lines: Vec<Line<'static>>,
    pub page_scroll: ScrollState,

    /// Click targets of the dialog drawn in the last frame
    pub hit_regions: Vec<HitRegion>,

    pub toast: Option<Toast>,
    pub should_quit: bool,

    /// Which dialog the caller wants open; written by dialog callbacks
    open: Rc<Cell<Option<DialogVariant>>>,
    /// Messages raised by callbacks, drained into toasts
    notices: Rc<RefCell<Vec<String>>>,
    dialogs: Vec<DialogSlot>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let document = Rc::new(Document::new());
        let sheet = config.stylesheet.sheet();
        let open: Rc<Cell<Option<DialogVariant>>> = Rc::new(Cell::new(None));
        let notices = Rc::new(RefCell::new(Vec::new()));

        // One shared close callback: every dialog closes the same way
        let close = {
            let open = Rc::clone(&open);
            Callback::new(move || open.set(None))
        };

        let dialogs = DialogVariant::all()
            .iter()
            .map(|&variant| {
                let confirm = {
                    let open = Rc::clone(&open);
                    let notices = Rc::clone(&notices);
                    Callback::new(move || {
                        notices
                            .borrow_mut()
                            .push(format!("{} confirmed", showcase::dialog_title(variant)));
                        open.set(None);
                    })
                };
                DialogSlot {
                    variant,
                    props: showcase::dialog_props(variant, close.clone(), confirm),
                    dialog: Dialog::new(document.clone()),
                }
            })
            .collect();

        let page = showcase::page(&config.gallery);
        let page_lines = host::lines(&page, &sheet);

        Self {
            document,
            sheet,
            gallery: config.gallery.clone(),
            log_buffer,
            page_lines,
            page_scroll: ScrollState::manual(),
            hit_regions: Vec::new(),
            toast: None,
            should_quit: false,
            open,
            notices,
            dialogs,
        }
    }

    /// Reconcile every dialog with the current open state
    ///
    /// Called once per frame, like a render pass. Returns the markup of the
    /// dialog that is open, if any.
    pub fn sync_dialogs(&mut self) -> Option<Node> {
        let wanted = self.open.get();
        for slot in &mut self.dialogs {
            slot.props.is_open = wanted == Some(slot.variant);
        }

        // Closing dialogs restore overflow before the next one records it
        let (opening, closing): (Vec<_>, Vec<_>) = self
            .dialogs
            .iter_mut()
            .partition(|slot| slot.props.is_open);
        for slot in closing {
            slot.dialog.render(&slot.props);
        }
        opening
            .into_iter()
            .filter_map(|slot| slot.dialog.render(&slot.props))
            .last()
    }

    /// Whether a dialog lifecycle is currently open
    pub fn dialog_open(&self) -> bool {
        self.dialogs.iter().any(|slot| slot.dialog.is_open())
    }

    pub fn open_dialog(&mut self, variant: DialogVariant) {
        info!(variant = variant.as_str(), "opening dialog");
        self.open.set(Some(variant));
    }

    /// Route a key press: document listeners first, then the gallery
    pub fn handle_key(&mut self, code: KeyCode) {
        let delivered = self.document.dispatch_key(&code);
        trace!(?code, delivered, "key offered to document listeners");

        // An open dialog captures everything else
        if self.dialog_open() {
            if code == KeyCode::Enter {
                self.activate_primary_action();
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('l') => self.gallery.show_logs = !self.gallery.show_logs,
            KeyCode::Char(c) => {
                if let Some(variant) = showcase::dialog_for_key(c) {
                    self.open_dialog(variant);
                } else if c == 'j' {
                    self.scroll_page(ScrollState::scroll_down);
                } else if c == 'k' {
                    self.scroll_page(ScrollState::scroll_up);
                }
            }
            KeyCode::Down => self.scroll_page(ScrollState::scroll_down),
            KeyCode::Up => self.scroll_page(ScrollState::scroll_up),
            KeyCode::PageDown => self.scroll_page(ScrollState::page_down),
            KeyCode::PageUp => self.scroll_page(ScrollState::page_up),
            KeyCode::Home => self.scroll_page(ScrollState::scroll_to_top),
            KeyCode::End => self.scroll_page(ScrollState::scroll_to_bottom),
            _ => {}
        }
    }

    /// Left click at a screen cell
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(action) = host::hit_test(&self.hit_regions, column, row)
            .and_then(|region| region.action.clone())
        {
            debug!(column, row, "click activated a dialog target");
            action.call();
        }
    }

    /// Mouse wheel: same rules as the scroll keys
    pub fn handle_wheel(&mut self, down: bool) {
        if down {
            self.scroll_page(ScrollState::scroll_down);
        } else {
            self.scroll_page(ScrollState::scroll_up);
        }
    }

    /// Page scrolling only happens while the document allows it
    fn scroll_page(&mut self, action: fn(&mut ScrollState)) {
        if !self.document.overflow().allows_scroll() {
            trace!("scroll ignored: document overflow is hidden");
            return;
        }
        action(&mut self.page_scroll);
    }

    /// Enter on an open dialog activates its last (primary) action
    fn activate_primary_action(&mut self) {
        let action = self
            .dialogs
            .iter()
            .find(|slot| slot.dialog.is_open())
            .and_then(|slot| slot.props.actions.last())
            .and_then(Node::as_element)
            .and_then(|button| button.attrs.on_click.clone());
        if let Some(action) = action {
            action.call();
        }
    }

    /// Periodic housekeeping: surface callback notices, expire the toast
    pub fn tick(&mut self) {
        if let Some(message) = self.notices.borrow_mut().pop() {
            info!("{}", message);
            self.toast = Some(Toast::new(message));
        }
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Tear down every dialog, releasing whatever is still held
    pub fn shutdown(self) {
        for slot in self.dialogs {
            slot.dialog.unmount();
        }
        debug!(
            listeners = self.document.listener_count(),
            "gallery dialogs unmounted"
        );
    }
}
