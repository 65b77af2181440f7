//! UI pane drawing module for kupo.
//!
//! Provides the renderers for the parent, current and preview panes. All
//! highlighting and file type coloring for listings is handled here.
//!
//! Used internally by ui::render.

use crate::app::PreviewData;
use crate::core::FileEntry;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

/// Styles used for rendering items in a listing pane.
pub struct PaneStyles {
    pub item: Style,
    pub dir: Style,
    pub selection: Style,
}

impl PaneStyles {
    pub fn get_style(&self, is_dir: bool, is_selected: bool) -> Style {
        let mut style = if is_dir && self.dir.fg != Some(Color::Reset) {
            self.dir
        } else {
            self.item
        };

        if is_selected {
            if let Some(bg) = self.selection.bg
                && bg != Color::Reset
            {
                style = style.bg(bg);
            }
            if let Some(fg) = self.selection.fg
                && fg != Color::Reset
            {
                style = style.fg(fg);
            }
        }
        style
    }
}

/// Styles for the preview pane content.
pub struct PreviewStyles {
    pub text: Style,
    pub dir: Style,
    pub stamp: Style,
    pub error: Style,
}

/// Draws a directory listing pane (parent or current).
pub fn draw_listing(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    entries: &[FileEntry],
    selected: Option<usize>,
    styles: &PaneStyles,
) {
    if entries.is_empty() {
        let line = Line::from(Span::styled(" [empty]", styles.item));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_selected = Some(idx) == selected;
            let style = styles.get_style(entry.is_dir(), is_selected);
            let name = if entry.is_dir() {
                format!("{}/", entry.name_str())
            } else {
                entry.name_str().into_owned()
            };
            ListItem::new(Line::from(Span::styled(format!(" {name}"), style)))
        })
        .collect();

    let mut state = ListState::default();
    state.select(selected);

    frame.render_stateful_widget(
        List::new(items).block(block).highlight_style(Style::default()),
        area,
        &mut state,
    );
}

/// Draws the preview pane: file content with its stamp line, a directory
/// summary, an error placeholder or nothing.
pub fn draw_preview(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    preview: &PreviewData,
    styles: &PreviewStyles,
) {
    let lines: Vec<Line> = match preview {
        PreviewData::File { stamp, lines } => {
            let mut out = Vec::with_capacity(lines.len() + 2);
            out.push(Line::from(Span::styled(stamp.clone(), styles.stamp)));
            out.push(Line::default());
            out.extend(
                lines
                    .iter()
                    .map(|l| Line::from(Span::styled(l.clone(), styles.text))),
            );
            out
        }
        PreviewData::Directory(lines) => lines
            .iter()
            .map(|l| {
                let style = if l.trim_end().ends_with('/') {
                    styles.dir
                } else {
                    styles.text
                };
                Line::from(Span::styled(l.clone(), style))
            })
            .collect(),
        PreviewData::Error(reason) => {
            vec![Line::from(Span::styled(
                format!("[preview unavailable: {reason}]"),
                styles.error,
            ))]
        }
        PreviewData::Empty => Vec::new(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
