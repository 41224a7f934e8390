//! Terminal host - materializes markup trees with ratatui
//!
//! Two entry points:
//!
//! - [`lines`] flows a tree into styled lines for a scrolling page. Inline
//!   elements (buttons, spans, inputs, text) share a line; block elements
//!   (headings, paragraphs, divs, lists, forms) start a new one.
//! - [`render_dialog`] draws an open dialog's markup as a centered box over a
//!   cleared backdrop and returns the clickable regions it drew.
//!
//! Styling comes only from class tokens looked up in a [`Stylesheet`].

use crate::components::dialog::{
    ACTIONS_CLASS, CLOSE_CLASS, CONTENT_CLASS, OVERLAY_CLASS, TITLE_CLASS,
};
use crate::components::list::{ITEM_CLASS, MARKER_CLASS};
use crate::markup::{Callback, Element, Node, Tag};
use crate::style::{ComponentKind, Stylesheet};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const BULLET: &str = "  • ";
const FORM_RULE: &str = "────────────────────────────";

/// Screen area that reacts to a mouse click
///
/// Regions without an action swallow the click (the dialog body must not
/// fall through to the backdrop).
#[derive(Debug, Clone)]
pub struct HitRegion {
    pub area: Rect,
    pub action: Option<Callback>,
}

/// Topmost region containing the point (later regions are drawn on top)
pub fn hit_test(regions: &[HitRegion], column: u16, row: u16) -> Option<&HitRegion> {
    regions
        .iter()
        .rev()
        .find(|region| region.area.contains(Position::new(column, row)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Flow layout
// ─────────────────────────────────────────────────────────────────────────────

/// Flow a tree into styled lines
pub fn lines(node: &Node, sheet: &Stylesheet) -> Vec<Line<'static>> {
    let mut flow = Flow::new(sheet);
    flow.node(node, Style::default(), false);
    flow.finish()
}

struct Flow<'s> {
    sheet: &'s Stylesheet,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl<'s> Flow<'s> {
    fn new(sheet: &'s Stylesheet) -> Self {
        Self {
            sheet,
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn blank(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn style_of(&self, el: &Element, inherited: Style) -> Style {
        let own = el
            .class
            .as_deref()
            .map(|c| self.sheet.style_for(c))
            .unwrap_or_default();
        inherited.patch(own)
    }

    /// `inline` forces block elements to stay on the current line (list items)
    fn node(&mut self, node: &Node, inherited: Style, inline: bool) {
        match node {
            Node::Text { text } => self.current.push(Span::styled(text.clone(), inherited)),
            Node::Fragment { children } => self.children(children, inherited, inline),
            Node::Element(el) => self.element(el, inherited, inline),
        }
    }

    fn children(&mut self, children: &[Node], style: Style, inline: bool) {
        for child in children {
            self.node(child, style, inline);
        }
    }

    fn element(&mut self, el: &Element, inherited: Style, inline: bool) {
        let style = self.style_of(el, inherited);
        match el.tag {
            Tag::Button => {
                let button_style = self.button_style(el, style);
                self.current.push(Span::styled(button_label(el), button_style));
                self.current.push(Span::raw(" "));
            }
            Tag::Input => {
                let placeholder = el.attrs.extra.get("placeholder").map(String::as_str);
                self.current.push(Span::styled(
                    format!("[ {:<20} ]", placeholder.unwrap_or("")),
                    style.add_modifier(Modifier::DIM),
                ));
                self.current.push(Span::raw(" "));
            }
            Tag::Span => self.children(&el.children, style, true),
            Tag::Ul => {
                self.flush();
                for item in &el.children {
                    self.list_item(item, style);
                }
            }
            Tag::Li => self.list_item(&Node::Element(el.clone()), inherited),
            Tag::Form => self.form(el, style),
            Tag::H1 | Tag::H2 | Tag::H3 if !inline => {
                if el.tag != Tag::H3 {
                    self.blank();
                } else {
                    self.flush();
                }
                let heading = match el.tag {
                    Tag::H1 => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    _ => style.add_modifier(Modifier::BOLD),
                };
                self.children(&el.children, heading, true);
                self.flush();
            }
            _ if inline => self.children(&el.children, style, true),
            _ => {
                self.flush();
                self.children(&el.children, style, false);
                self.flush();
            }
        }
    }

    fn button_style(&self, el: &Element, style: Style) -> Style {
        if el.attrs.disabled {
            style.patch(self.sheet.style_for("button--disabled"))
        } else {
            style
        }
    }

    fn list_item(&mut self, item: &Node, list_style: Style) {
        self.flush();
        let style = match item.as_element() {
            Some(li) if li.has_class(ITEM_CLASS) => self.style_of(li, list_style),
            _ => list_style,
        };
        self.current.push(Span::styled(BULLET, style));
        for child in item.children() {
            match child.as_element() {
                Some(marker) if marker.has_class(MARKER_CLASS) => {
                    let marker_style = self.style_of(marker, style);
                    self.current
                        .push(Span::styled(format!(" {}", child.text_content()), marker_style));
                }
                _ => self.node(child, style, true),
            }
        }
        self.flush();
    }

    fn form(&mut self, el: &Element, style: Style) {
        self.flush();
        let mut inner = Flow::new(self.sheet);
        inner.children(&el.children, style, false);
        let body = inner.finish();

        self.lines
            .push(Line::from(Span::styled(format!("╭{FORM_RULE}"), style)));
        for line in body {
            let mut spans = vec![Span::styled("│ ", style)];
            spans.extend(line.spans);
            self.lines.push(Line::from(spans));
        }
        self.lines
            .push(Line::from(Span::styled(format!("╰{FORM_RULE}"), style)));
    }
}

/// Bracketed label, padded by the size token
fn button_label(el: &Element) -> String {
    let text = Node::Element(el.clone()).text_content();
    let pad = if el.has_class("button--small") {
        ""
    } else if el.has_class("button--large") {
        "  "
    } else {
        " "
    };
    format!("[{pad}{text}{pad}]")
}

// ─────────────────────────────────────────────────────────────────────────────
// Dialog overlay
// ─────────────────────────────────────────────────────────────────────────────

/// Width of the dialog box as a share of the screen, by size token
fn dialog_width(container: &Element, area: Rect) -> u16 {
    let percent: u32 = if container.has_class("dialog--small") {
        40
    } else if container.has_class("dialog--large") {
        80
    } else {
        60
    };
    let width = (u32::from(area.width) * percent / 100) as u16;
    width.max(24).min(area.width)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Draw an open dialog and return its click targets
///
/// Returns no regions (and draws nothing) if `node` is not dialog markup.
pub fn render_dialog(
    f: &mut Frame,
    area: Rect,
    node: &Node,
    sheet: &Stylesheet,
) -> Vec<HitRegion> {
    let Some(container) = node
        .children()
        .iter()
        .filter_map(Node::as_element)
        .find(|el| el.has_class(ComponentKind::Dialog.as_str()))
    else {
        return Vec::new();
    };
    let mut regions = Vec::new();

    // Backdrop: everything outside the box, clicking it activates the overlay
    if let Some(overlay) = node.find_by_class(OVERLAY_CLASS) {
        f.render_widget(
            Block::default().style(sheet.style_for(OVERLAY_CLASS)),
            area,
        );
        regions.push(HitRegion {
            area,
            action: overlay.attrs.on_click.clone(),
        });
    }

    let box_style = sheet.style_for(container.class.as_deref().unwrap_or_default());
    let width = dialog_width(container, area);

    let content_lines = node
        .find_by_class(CONTENT_CLASS)
        .map(|content| lines(&Node::Element(content.clone()), sheet))
        .unwrap_or_default();
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let wrapped_height: usize = content_lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(inner_width))
        .sum();
    let height = (wrapped_height as u16).saturating_add(4);
    let rect = centered_rect(width, height, area);

    f.render_widget(Clear, rect);

    // Header: title on the left of the top border, close glyph on the right
    let title = node
        .find_by_class(TITLE_CLASS)
        .map(|el| Node::Element(el.clone()).text_content())
        .unwrap_or_default();
    let title_style = box_style.patch(sheet.style_for(TITLE_CLASS));
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(box_style)
        .title(Line::from(Span::styled(format!(" {title} "), title_style)));

    // The dialog body swallows clicks so they never reach the backdrop
    regions.push(HitRegion {
        area: rect,
        action: None,
    });

    if let Some(close) = node.find_by_class(CLOSE_CLASS) {
        let glyph = format!(" {} ", Node::Element(close.clone()).text_content());
        let glyph_width = glyph.width() as u16;
        block = block.title(
            Line::from(Span::styled(
                glyph,
                box_style.patch(sheet.style_for(CLOSE_CLASS)),
            ))
            .right_aligned(),
        );
        regions.push(HitRegion {
            area: Rect::new(
                rect.right().saturating_sub(glyph_width + 1),
                rect.y,
                glyph_width,
                1,
            ),
            action: close.attrs.on_click.clone(),
        });
    }

    // Footer: action buttons right-aligned on the bottom border
    if let Some(actions) = node.find_by_class(ACTIONS_CLASS) {
        let buttons: Vec<&Element> = actions
            .children
            .iter()
            .filter_map(Node::as_element)
            .collect();
        let labels: Vec<String> = buttons.iter().map(|b| button_label(b)).collect();
        let total: u16 = labels.iter().map(|l| l.width() as u16 + 1).sum();

        let mut x = rect.right().saturating_sub(total + 1);
        let mut spans = Vec::new();
        for (button, label) in buttons.iter().zip(labels) {
            let label_width = label.width() as u16;
            let style = sheet.style_for(button.class.as_deref().unwrap_or_default());
            regions.push(HitRegion {
                area: Rect::new(x, rect.bottom().saturating_sub(1), label_width, 1),
                action: button.attrs.on_click.clone(),
            });
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(" ", box_style));
            x += label_width + 1;
        }
        block = block.title_bottom(Line::from(spans).right_aligned());
    }

    let inner = block.inner(rect);
    f.render_widget(block, rect);
    f.render_widget(
        Paragraph::new(content_lines).wrap(Wrap { trim: false }),
        Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        ),
    );

    regions
}
