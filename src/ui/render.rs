//! UI renderer implementation for kupo.
//!
//! Contains the top-level `render` entry point used by the terminal loop
//! and the layout helpers that split the screen into parent/current/preview
//! chunks.
//!
//! This module stays mostly pure rendering: it reads state + config and
//! produces widgets, without owning navigation logic.

use crate::{
    app::{AppState, LayoutMetrics},
    ui::{
        help,
        panes::{self, PaneStyles, PreviewStyles},
    },
    utils::shorten_home_path,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the entire terminal UI for kupo on each frame.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let root_area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(root_area);

    let chunks = layout_chunks(rows[1]);
    app.update_layout_metrics(metrics_for(&chunks));

    let theme = app.config().theme();
    let accent = theme.accent_style();

    // Header: current directory path.
    let header = Line::from(Span::styled(
        shorten_home_path(app.current().source_dir()),
        theme.path_style(),
    ));
    frame.render_widget(Paragraph::new(header), rows[0]);

    // Parent pane
    panes::draw_listing(
        frame,
        chunks[0],
        pane_block("Parent", accent),
        app.parent().entries(),
        app.parent().selected_idx(),
        &PaneStyles {
            item: theme.entry_style(),
            dir: theme.directory_style(),
            selection: theme.parent_selection_style(),
        },
    );

    // Current pane
    panes::draw_listing(
        frame,
        chunks[1],
        pane_block("Files", accent),
        app.current().entries(),
        app.current().selected_idx(),
        &PaneStyles {
            item: theme.entry_style(),
            dir: theme.directory_style(),
            selection: theme.selection_style(),
        },
    );

    // Preview pane
    panes::draw_preview(
        frame,
        chunks[2],
        pane_block("Preview", accent),
        app.preview().data(),
        &PreviewStyles {
            text: theme.entry_style(),
            dir: theme.directory_style(),
            stamp: theme.preview_stamp_style(),
            error: theme.error_style(),
        },
    );

    // Footer: key hints.
    let footer = Line::from(Span::styled(
        " j/k move   enter open   h parent   g/G top/bottom   ? help   q quit",
        theme.status_line_style(),
    ));
    frame.render_widget(Paragraph::new(footer), rows[2]);

    if app.show_help() {
        help::draw_help(frame, root_area, accent, theme.entry_style());
    }
}

/// Splits the body row into parent/current/preview chunks.
pub fn layout_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(area)
        .to_vec()
}

/// Derives the content metrics the app feeds to the preview loader.
fn metrics_for(chunks: &[Rect]) -> LayoutMetrics {
    LayoutMetrics {
        parent_width: chunks[0].width.saturating_sub(2) as usize,
        current_width: chunks[1].width.saturating_sub(2) as usize,
        preview_width: chunks[2].width.saturating_sub(2) as usize,
        preview_height: chunks[2].height.saturating_sub(2) as usize,
    }
}

fn pane_block(title: &str, accent: ratatui::style::Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .title(title.to_string())
}
