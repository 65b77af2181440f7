//! General configuration settings for kupo.
//!
//! Defines the [General] struct deserialized from the `[general]` section
//! of kupo.toml: listing order, hidden-file visibility and preview timing.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
    instant_preview: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            dirs_first: true,
            show_hidden: false,
            case_insensitive: true,
            instant_preview: true,
        }
    }
}

impl General {
    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// When false, rapid highlight movement defers the preview request to
    /// the debounced tick path.
    #[inline]
    pub fn instant_preview(&self) -> bool {
        self.instant_preview
    }
}
