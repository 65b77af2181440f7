//! Configuration for kupo.
//!
//! Settings are read from `kupo.toml` in the user configuration directory.
//! [load] owns the raw-to-internal conversion, [general] the behavior
//! switches, [input] the key bindings and [theme] the colors.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use general::General;
pub use input::Keys;
pub use load::{Config, RawConfig};
pub use theme::Theme;
