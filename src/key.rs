//! Type-safe key bindings with help metadata.
//!
//! A [`Binding`] couples one or more [`KeyCode`]s with the short help text
//! shown by components that render contextual key hints. The [`KeyMap`] trait
//! lets a component expose its bindings in compact or expanded form.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A single key binding: the key codes that trigger it plus help metadata.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
/// assert_eq!(confirm.help.key, "enter");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that activate this binding.
    pub keys: Vec<KeyCode>,
    /// Help text shown for this binding.
    pub help: Help,
}

/// Help metadata for a key binding: the key label and a short description.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// The key label, e.g. `"enter"` or `"←/h"`.
    pub key: String,
    /// What the key does, e.g. `"commit edit"`.
    pub desc: String,
}

impl Binding {
    /// Creates a binding for the given key codes with empty help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns true if the key message matches one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.contains(&msg.key)
    }
}

/// Trait for keymaps that can describe their bindings for help displays.
pub trait KeyMap {
    /// Returns the most important bindings for a compact help line.
    fn short_help(&self) -> Vec<&Binding>;

    /// Returns all bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn binding_matches_any_of_its_keys() {
        let b = Binding::new(vec![KeyCode::Enter, KeyCode::Tab]);
        let enter = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
        };
        let esc = KeyMsg {
            key: KeyCode::Esc,
            modifiers: KeyModifiers::empty(),
        };
        assert!(b.matches(&enter));
        assert!(!b.matches(&esc));
    }
}
