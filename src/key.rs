//! Key bindings for atomic controls.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with optional help text.
//! Bindings are usually built from human readable key specs such as
//! `"ctrl+a"` or `"alt+backspace"`:
//!
//! ```rust
//! use atomic_controls::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let submit = new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "submit")]);
//! let msg = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &submit));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key spec like `"ctrl+w"`, `"alt+left"` or `"x"`.
    ///
    /// Returns `None` for specs naming a key this module does not know.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = spec;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Whether this key press is the one carried by `msg`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Shift is folded into the character case for printable keys.
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        if matches!(self.code, KeyCode::Char(_)) {
            msg.modifiers & relevant == self.modifiers & relevant
        } else {
            msg.modifiers == self.modifiers
        }
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"ctrl+v"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible to key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Adds keys given as specs. Unknown specs are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys.extend(presses))
}

/// Adds keys given as key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys.extend(keys))
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| matches_binding(msg, b))
}

/// Key maps that can describe themselves for a help view.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped in columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_modifiers() {
        let press = KeyPress::parse("ctrl+alt+w").unwrap();
        assert_eq!(press.code, KeyCode::Char('w'));
        assert!(press.modifiers.contains(KeyModifiers::CONTROL));
        assert!(press.modifiers.contains(KeyModifiers::ALT));

        assert_eq!(KeyPress::parse("home").unwrap().code, KeyCode::Home);
        assert!(KeyPress::parse("hyper+x").is_none());
        assert!(KeyPress::parse("nonsense").is_none());
    }

    #[test]
    fn test_char_binding_ignores_shift() {
        let binding = new_binding(vec![with_keys_str(&["A"])]);
        assert!(matches_binding(
            &key(KeyCode::Char('A'), KeyModifiers::SHIFT),
            &binding
        ));
        assert!(!matches_binding(
            &key(KeyCode::Char('A'), KeyModifiers::CONTROL),
            &binding
        ));
    }

    #[test]
    fn test_modifiers_must_match_for_named_keys() {
        let binding = new_binding(vec![with_keys_str(&["alt+left"])]);
        assert!(matches_binding(
            &key(KeyCode::Left, KeyModifiers::ALT),
            &binding
        ));
        assert!(!matches_binding(
            &key(KeyCode::Left, KeyModifiers::NONE),
            &binding
        ));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!matches_binding(&enter, &binding));

        binding.set_enabled(true);
        assert!(matches_binding(&enter, &binding));
        assert!(matches(&enter, &[&Binding::default(), &binding]));
    }

    #[test]
    fn test_with_keys_takes_presses() {
        let binding = new_binding(vec![
            with_keys(vec![
                KeyPress::from(KeyCode::Enter),
                KeyPress::from((KeyCode::Char('m'), KeyModifiers::CONTROL)),
            ]),
            with_help("enter", "submit"),
        ]);
        assert_eq!(binding.keys().len(), 2);
        assert!(matches_binding(
            &key(KeyCode::Char('m'), KeyModifiers::CONTROL),
            &binding
        ));
        assert!(!matches_binding(
            &key(KeyCode::Char('m'), KeyModifiers::NONE),
            &binding
        ));
    }

    #[test]
    fn test_help_text() {
        let binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit");
        assert_eq!(binding.help().key, "enter");
        assert_eq!(binding.help().desc, "submit");
        assert_eq!(binding.keys().len(), 1);
    }
}
