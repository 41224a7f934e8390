// UI rendering logic
//
// One frame: reconcile the dialogs (this is where lifecycles open and close),
// then draw title, gallery page, logs and status, and finally the open dialog
// on top of everything.

use super::app::{App, Toast};
use super::host;
use crate::logging::{LogEntry, LogLevel};
use crate::modal::Environment;
use crate::showcase;
use crate::style::DialogVariant;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const LOGS_HEIGHT: u16 = 7;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let open_dialog = app.sync_dialogs();
    let area = f.area();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    if app.gallery.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_title(f, chunks[0], app);
    render_page(f, chunks[1], app);
    if app.gallery.show_logs {
        render_logs_panel(f, chunks[2], app);
    }
    render_status(f, chunks[chunks.len() - 1], app);

    if let Some(toast) = &app.toast {
        render_toast(f, area, toast);
    }

    // The dialog goes last so it covers everything, toast included
    app.hit_regions = match open_dialog {
        Some(node) => host::render_dialog(f, area, &node, &app.sheet),
        None => Vec::new(),
    };
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(format!(" {}", showcase::PAGE_TITLE))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_top(Line::from(format!(" {} ", app.sheet.name)).right_aligned()),
        );
    f.render_widget(title, area);
}

fn render_page(f: &mut Frame, area: Rect, app: &mut App) {
    let viewport = area.height.saturating_sub(2) as usize;
    app.page_scroll
        .update_dimensions(app.page_lines.len(), viewport);

    let locked = !app.document.overflow().allows_scroll();
    let mut block = Block::default().borders(Borders::ALL);
    if locked {
        block = block.title_top(Line::from(" scroll locked ").right_aligned());
    }

    let offset = u16::try_from(app.page_scroll.offset()).unwrap_or(u16::MAX);
    let page = Paragraph::new(app.page_lines.clone())
        .block(block)
        .scroll((offset, 0));
    f.render_widget(page, area);
}

/// Most recent log entries, newest at the bottom
fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .log_buffer
        .tail(height)
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Logs "));
    f.render_widget(list, area);
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Info => Style::default().fg(Color::Blue),
        LogLevel::Debug => Style::default().fg(Color::Gray),
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let text = if app.dialog_open() {
        " Esc close │ Enter confirm │ click outside to dismiss".to_string()
    } else {
        let dialogs: Vec<String> = DialogVariant::all()
            .iter()
            .map(|v| format!("{} {}", showcase::dialog_key(*v), v.as_str()))
            .collect();
        format!(
            " {} │ j/k scroll │ l logs │ q quit",
            dialogs.join("  ")
        )
    };
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

/// Toast in the bottom-right corner
fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    let width = (toast.message.chars().count() as u16 + 4).min(area.width.saturating_sub(4));
    let height = 3;
    let x = area.right().saturating_sub(width + 2);
    let y = area.bottom().saturating_sub(height + 2);
    let toast_area = Rect::new(x, y, width, height);

    let text = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, toast_area);
    f.render_widget(text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn frame(terminal: &mut Terminal<TestBackend>, app: &mut App) {
        terminal.draw(|f| draw(f, app)).unwrap();
    }

    #[test]
    fn draws_gallery_page() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = App::new(&Config::default(), LogBuffer::new());
        frame(&mut terminal, &mut app);

        let text = screen(&terminal);
        assert!(text.contains(showcase::PAGE_TITLE));
        assert!(text.contains("Button Examples"));
        assert!(text.contains("q quit"));
        assert!(app.hit_regions.is_empty());
    }

    #[test]
    fn open_dialog_is_drawn_with_hit_regions() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.handle_key(KeyCode::Char('3'));
        frame(&mut terminal, &mut app);

        let text = screen(&terminal);
        assert!(text.contains("Warning"));
        assert!(text.contains("Proceed"));
        assert!(text.contains("Esc close"));
        assert!(text.contains("scroll locked"));
        assert!(!app.hit_regions.is_empty());
    }

    #[test]
    fn clicking_the_backdrop_closes_the_dialog() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.handle_key(KeyCode::Char('1'));
        frame(&mut terminal, &mut app);
        assert!(app.document.is_scroll_locked());

        app.handle_click(0, 0);
        frame(&mut terminal, &mut app);

        assert!(!app.dialog_open());
        assert!(!app.document.is_scroll_locked());
        assert!(app.hit_regions.is_empty());
    }

    #[test]
    fn clicking_inside_the_dialog_keeps_it_open() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.handle_key(KeyCode::Char('1'));
        frame(&mut terminal, &mut app);

        // Centre of the screen is inside the dialog box
        app.handle_click(50, 20);
        frame(&mut terminal, &mut app);
        assert!(app.dialog_open());
    }
}
