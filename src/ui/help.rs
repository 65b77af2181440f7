//! Key binding help overlay for kupo.
//!
//! Renders a centered full-screen overlay listing the default key
//! bindings. Toggled with `?`, dismissed with `Esc`/`q`.

use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help rows, built once. The left column is padded so the descriptions
/// line up.
static HELP_ROWS: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    let rows = [
        ("k / Up", "move highlight up"),
        ("j / Down", "move highlight down"),
        ("g", "go to top of listing"),
        ("G", "go to bottom of listing"),
        ("l / Right / Enter", "enter highlighted directory"),
        ("h / Left / Backspace", "go to parent directory"),
        ("?", "toggle this help"),
        ("q / Ctrl+c", "quit"),
    ];

    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, d)| (format!("{k:<key_width$}"), *d))
        .collect()
});

/// Draws the help overlay over the whole frame.
pub fn draw_help(frame: &mut Frame, area: Rect, accent: Style, text_style: Style) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(area);

    let popup_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical[1])[1];

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(accent);

    let mut lines = vec![Line::default()];
    lines.extend(HELP_ROWS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key}  "), accent),
            Span::styled(*desc, text_style),
        ])
    }));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc/q to close",
        text_style,
    )));

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Left),
        popup_area,
    );
}
