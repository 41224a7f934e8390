//! bemkit - a small design system with BEM class naming
//!
//! Components ([`components`]) turn props into declarative markup
//! ([`markup::Node`]) classed by the resolver in [`style`]. The dialog owns a
//! modal lifecycle ([`modal`]) that captures Esc and locks background scroll
//! while open, and gives both back when it closes.
//!
//! Hosts render the markup: [`markup::html`] as text, [`tui`] as an
//! interactive terminal gallery.

pub mod cli;
pub mod components;
pub mod config;
pub mod logging;
pub mod markup;
pub mod modal;
pub mod showcase;
pub mod style;
pub mod tui;
