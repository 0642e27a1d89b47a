//! Data grid component: filterable, sortable, paginated, resizable, and
//! inline-editable views over an in-memory record set.
//!
//! ## Architecture overview
//!
//! The grid is built around three ideas:
//!
//! 1. **Stable row keys.** Rows are ingested into an arena and assigned a
//!    [`RowKey`] per snapshot. Filtering, sorting, and paging all produce and
//!    consume key-ordered lists, and the edit controller addresses rows by
//!    key, so nothing ever re-locates a row by position across derived views.
//! 2. **A pure projection pipeline.** Date-range filter, categorical filter,
//!    free-text filter, then a stable comparator sort, in that fixed order.
//!    The pipeline is a pure function from (rows, filter state, sort state)
//!    to an ordered key list; the paginator slices it.
//! 3. **Explicit interaction sessions.** Both mutable gestures are modeled
//!    as owned session values rather than ambient state: a drag session for
//!    column resizing (created on press, disposed on release) and a
//!    single-slot edit session for inline editing (created on open,
//!    destroyed on commit or cancel).
//!
//! ## Editing
//!
//! Per-field editor behavior comes from a declarative [`FieldRegistry`]:
//! each field path maps to a [`FieldType`] that decides how the editor
//! seeds, how the pending value is coerced at commit, and which values an
//! enumerated field offers. Commits write the grid's local working copy
//! optimistically and notify the host through a fire-and-forget callback
//! carrying only the delta: `(row identity, field, value)`. Rows without a
//! resolvable identity keep the local update and notify nobody.
//!
//! ## Integration with bubbletea-rs
//!
//! [`Model`] implements `bubbletea_rs::Model`: `update` handles page
//! navigation and the commit/cancel keys of an open edit session, and
//! `view` renders header, rows, and footer. All other gestures (header
//! clicks, resize drags, cell opens, typing) arrive through explicit method
//! calls from the host, which owns the pointer and focus story.

/// Visual styling for the grid.
pub mod style;

/// Key bindings for grid navigation and editing.
pub mod keys;

// Internal modules
mod editing;
mod model;
mod projection;
mod rendering;
mod resize;
mod types;


pub use editing::EditError;
pub use keys::GridKeyMap;
pub use model::Model;
pub use style::GridStyles;
pub use types::{
    Action, ActionFn, Align, CellCommitFn, Column, Direction, FieldRegistry, FieldType,
    Pagination, Row, RowId, RowKey, Sort,
};

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl BubbleTeaModel for Model {
    /// Initializes an empty grid with no columns.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(vec![]), None)
    }

    /// Handles key input.
    ///
    /// While an edit session is open, enter commits and esc cancels; page
    /// navigation is suspended so arrow keys can belong to the host's
    /// editor. Otherwise the page navigation bindings apply.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.is_editing() {
                if self.keymap.commit_edit.matches(key_msg) {
                    self.commit_edit();
                } else if self.keymap.cancel_edit.matches(key_msg) {
                    self.cancel_edit();
                }
            } else if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
        None
    }

    /// Renders the grid: header, separator, current page of rows, footer.
    fn view(&self) -> String {
        vec![
            self.view_header(),
            self.view_separator(),
            self.view_rows(),
            self.view_footer(),
        ]
        .join("\n")
    }
}
