//! Key mapping and action dispatch for kupo.
//!
//! Maps key events to actions, parsing key names from the configuration.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Any action in the app: navigation or system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Nav(NavAction),
    System(SystemAction),
}

/// Navigation actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavAction {
    GoParent,
    GoIntoDir,
    GoUp,
    GoDown,
    GoToTop,
    GoToBottom,
}

/// System actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SystemAction {
    Quit,
    Help,
}

/// Key + modifiers as used in the keymap.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, built from the config.
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config.
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use SystemAction as S;

        bind!(keys.go_parent(),    Action::Nav(N::GoParent));
        bind!(keys.go_into_dir(),  Action::Nav(N::GoIntoDir));
        bind!(keys.go_up(),        Action::Nav(N::GoUp));
        bind!(keys.go_down(),      Action::Nav(N::GoDown));
        bind!(keys.go_to_top(),    Action::Nav(N::GoToTop));
        bind!(keys.go_to_bottom(), Action::Nav(N::GoToBottom));

        bind!(keys.help(),         Action::System(S::Help));
        bind!(keys.quit(),         Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event.
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        // Terminals report "G" as Char('G') + SHIFT; retry without the
        // modifier so shifted character bindings resolve.
        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses a key description like "k", "Up", "Ctrl+c" or "Shift+g".
fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    for part in s.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    code = part.chars().next().map(KeyCode::Char);
                } else {
                    return None;
                }
            }
        }
    }

    code.map(|code| Key { code, modifiers })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, action);
        }
    }
}
