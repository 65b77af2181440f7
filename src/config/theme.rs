//! Theme configuration options for kupo.
//!
//! Defines the color/style options read from the `[theme]` section of
//! kupo.toml. Colors are written as names ("blue", "darkgray") or hex
//! values ("#87af87") and parsed into ratatui colors.

use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Deserializer};

/// A foreground/background pair for one UI element.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct ColorPair {
    #[serde(deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        ColorPair {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    fn style(&self) -> Style {
        let mut style = Style::default();
        if self.fg != Color::Reset {
            style = style.fg(self.fg);
        }
        if self.bg != Color::Reset {
            style = style.bg(self.bg);
        }
        style
    }
}

/// Theme configuration options.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    entry: ColorPair,
    directory: ColorPair,
    selection: ColorPair,
    parent_selection: ColorPair,
    accent: ColorPair,
    path: ColorPair,
    status_line: ColorPair,
    preview_stamp: ColorPair,
    error: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            entry: ColorPair::default(),
            directory: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            parent_selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            accent: ColorPair {
                fg: Color::Indexed(238),
                ..ColorPair::default()
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            status_line: ColorPair::default(),
            preview_stamp: ColorPair {
                fg: Color::Indexed(244),
                ..ColorPair::default()
            },
            error: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
        }
    }
}

impl Theme {
    #[inline]
    pub fn entry_style(&self) -> Style {
        self.entry.style()
    }

    #[inline]
    pub fn directory_style(&self) -> Style {
        self.directory.style()
    }

    #[inline]
    pub fn selection_style(&self) -> Style {
        self.selection.style()
    }

    #[inline]
    pub fn parent_selection_style(&self) -> Style {
        self.parent_selection.style()
    }

    #[inline]
    pub fn accent_style(&self) -> Style {
        self.accent.style()
    }

    #[inline]
    pub fn path_style(&self) -> Style {
        self.path.style()
    }

    #[inline]
    pub fn status_line_style(&self) -> Style {
        self.status_line.style()
    }

    #[inline]
    pub fn preview_stamp_style(&self) -> Style {
        self.preview_stamp.style()
    }

    #[inline]
    pub fn error_style(&self) -> Style {
        self.error.style()
    }
}

/// Deserializes a color name/hex string into a ratatui Color.
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
