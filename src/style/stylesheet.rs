// Stylesheet - class tokens to terminal styles
//
// The terminal host has no CSS engine, so each BEM token a component emits is
// looked up here and the matching style patches are applied in token order.
// Later tokens win, the same way a later CSS rule of equal specificity does.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// Available built-in stylesheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetKind {
    /// Colored sheet for true color / 16 color terminals
    #[default]
    Default,
    /// Modifier-only sheet (bold/reverse/underline) for monochrome terminals
    Mono,
}

impl SheetKind {
    pub fn all() -> &'static [SheetKind] {
        &[SheetKind::Default, SheetKind::Mono]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SheetKind::Default => "default",
            SheetKind::Mono => "mono",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" | "color" => Some(SheetKind::Default),
            "mono" | "monochrome" => Some(SheetKind::Mono),
            _ => None,
        }
    }

    pub fn sheet(&self) -> Stylesheet {
        match self {
            SheetKind::Default => Stylesheet::colored(),
            SheetKind::Mono => Stylesheet::mono(),
        }
    }
}

/// Token -> style table
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub name: String,
    rules: HashMap<String, Style>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::colored()
    }
}

impl Stylesheet {
    /// Empty sheet: every class string resolves to `Style::default()`
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: HashMap::new(),
        }
    }

    /// Add or replace the rule for a single token
    pub fn rule(mut self, token: &str, style: Style) -> Self {
        self.rules.insert(token.to_string(), style);
        self
    }

    /// Number of tokens with a rule
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Style for a whitespace separated class string
    pub fn style_for(&self, classes: &str) -> Style {
        classes
            .split_whitespace()
            .filter_map(|token| self.rules.get(token))
            .fold(Style::default(), |acc, rule| acc.patch(*rule))
    }

    /// Colored sheet (default)
    pub fn colored() -> Self {
        let bold = Modifier::BOLD;
        Self::empty("default")
            // Button
            .rule("button", Style::default().fg(Color::White))
            .rule(
                "button--primary",
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(bold),
            )
            .rule(
                "button--secondary",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )
            .rule(
                "button--outline",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            )
            .rule("button--large", Style::default().add_modifier(bold))
            .rule("button--disabled", Style::default().add_modifier(Modifier::DIM))
            // List
            .rule("list", Style::default().fg(Color::White))
            .rule("list--bordered", Style::default().fg(Color::Gray))
            .rule("list--card", Style::default().fg(Color::White).bg(Color::Black))
            .rule("list--primary", Style::default().fg(Color::Cyan))
            .rule("list--secondary", Style::default().fg(Color::Magenta))
            .rule("list__marker", Style::default().fg(Color::Yellow))
            // Form
            .rule("form", Style::default().fg(Color::White))
            .rule("form--primary", Style::default().fg(Color::Cyan))
            .rule("form--secondary", Style::default().fg(Color::Gray))
            // Dialog
            .rule("dialog-overlay", Style::default().bg(Color::Black))
            .rule("dialog", Style::default().fg(Color::White).bg(Color::Black))
            .rule("dialog--info", Style::default().fg(Color::Blue))
            .rule("dialog--warning", Style::default().fg(Color::Yellow))
            .rule("dialog--error", Style::default().fg(Color::Red))
            .rule("dialog__title", Style::default().add_modifier(bold))
            .rule("dialog__close", Style::default().fg(Color::Red))
            .rule("dialog__content", Style::default().fg(Color::White))
    }

    /// Monochrome sheet
    pub fn mono() -> Self {
        Self::empty("mono")
            .rule("button--primary", Style::default().add_modifier(Modifier::REVERSED))
            .rule("button--secondary", Style::default().add_modifier(Modifier::BOLD))
            .rule("button--outline", Style::default().add_modifier(Modifier::UNDERLINED))
            .rule("button--disabled", Style::default().add_modifier(Modifier::DIM))
            .rule("list--card", Style::default().add_modifier(Modifier::BOLD))
            .rule("dialog__title", Style::default().add_modifier(Modifier::BOLD))
            .rule("dialog--error", Style::default().add_modifier(Modifier::REVERSED))
    }
}
