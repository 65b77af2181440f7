//! Input configuration options for kupo.
//!
//! Defines the key binding lists read from the `[keys]` section of
//! kupo.toml. Each action maps to one or more key descriptions parsed by
//! the keymap module.

use serde::Deserialize;

/// Key binding lists for every action.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_parent: Vec<String>,
    go_into_dir: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    help: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    go_up,
    go_down,
    go_parent,
    go_into_dir,
    go_to_top,
    go_to_bottom,
    help,
    quit,
);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_parent: vec!["h".into(), "Left".into(), "Backspace".into()],
            go_into_dir: vec!["l".into(), "Right".into(), "Enter".into()],
            go_to_top: vec!["g".into()],
            go_to_bottom: vec!["G".into()],
            help: vec!["?".into()],
            quit: vec!["q".into(), "Ctrl+c".into()],
        }
    }
}
