//! Key bindings for grid navigation and inline editing.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for page navigation and the edit session.
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Go to the next page of rows.
    pub next_page: key::Binding,
    /// Go to the previous page of rows.
    pub prev_page: key::Binding,
    /// Commit the open edit session.
    pub commit_edit: key::Binding,
    /// Cancel the open edit session.
    pub cancel_edit: key::Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l/pgdn", "next page"),
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h/pgup", "prev page"),
            commit_edit: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "save cell"),
            cancel_edit: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "discard edit"),
        }
    }
}

impl key::KeyMap for GridKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.commit_edit, &self.cancel_edit],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;

    #[test]
    fn help_covers_every_binding() {
        let keymap = GridKeyMap::default();
        assert_eq!(keymap.short_help().len(), 2);
        let total: usize = keymap.full_help().iter().map(Vec::len).sum();
        assert_eq!(total, 4);
    }
}
