//! Column width state and the drag-resize protocol.
//!
//! A resize is modeled as an explicit session value owned by the controller:
//! created on press, consumed by drags, disposed on release. Nothing hangs
//! off global event listeners, and the whole protocol is testable without a
//! pointer device.

use super::types::{Column, FieldRegistry};

/// Width floor used when the host does not configure one.
pub(crate) const DEFAULT_MIN_WIDTH: u16 = 6;

/// Default width for columns without a registered field kind.
const DEFAULT_COLUMN_WIDTH: u16 = 18;

/// Width of the trailing actions column, when present.
const ACTIONS_COLUMN_WIDTH: u16 = 10;

/// An in-flight drag: which column, where the pointer started, and the
/// width the column had at press time.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    column: usize,
    origin_x: u16,
    origin_width: u16,
}

/// Per-column width vector plus the active drag session, if any.
#[derive(Debug)]
pub(crate) struct WidthController {
    widths: Vec<u16>,
    min_width: u16,
    drag: Option<DragSession>,
}

impl WidthController {
    pub(crate) fn new(min_width: u16) -> Self {
        Self {
            widths: Vec::new(),
            min_width: min_width.max(1),
            drag: None,
        }
    }

    /// Rebuilds the vector from column-kind defaults. One entry per column,
    /// plus one for the actions column when present. Any active drag is
    /// cancelled because its column index may no longer exist.
    pub(crate) fn rebuild(&mut self, columns: &[Column], registry: &FieldRegistry, has_actions: bool) {
        self.drag = None;
        self.widths = columns
            .iter()
            .map(|col| {
                registry
                    .kind(&col.field)
                    .map_or(DEFAULT_COLUMN_WIDTH, |kind| kind.default_width())
                    .max(self.min_width)
            })
            .collect();
        if has_actions {
            self.widths.push(ACTIONS_COLUMN_WIDTH.max(self.min_width));
        }
    }

    pub(crate) fn widths(&self) -> &[u16] {
        &self.widths
    }

    /// Starts a drag session on a column handle. Out-of-range columns are
    /// ignored. A press while another session is live replaces it.
    pub(crate) fn press(&mut self, column: usize, x: u16) {
        if column < self.widths.len() {
            self.drag = Some(DragSession {
                column,
                origin_x: x,
                origin_width: self.widths[column],
            });
        }
    }

    /// Applies pointer movement to the dragged column. The new width is the
    /// press-time width plus the signed pointer delta, clamped at the floor.
    /// No-op without an active session.
    pub(crate) fn drag_to(&mut self, x: u16) {
        let Some(session) = self.drag else {
            return;
        };
        let delta = i32::from(x) - i32::from(session.origin_x);
        let width = i32::from(session.origin_width) + delta;
        self.widths[session.column] = width.max(i32::from(self.min_width)) as u16;
    }

    /// Ends the active drag session. Later drags are ignored until the next
    /// press.
    pub(crate) fn release(&mut self) {
        self.drag = None;
    }

    /// True while a drag session is live. The grid uses this to keep the
    /// resize gesture from also toggling the header's sort.
    pub(crate) fn dragging(&self) -> bool {
        self.drag.is_some()
    }
}
