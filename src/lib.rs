#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datagrid/")]

//! # bubbletea-datagrid
//!
//! A data grid component for building terminal applications with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs), in the style of
//! the bubbletea-widgets component collection.
//!
//! The grid takes an arbitrary in-memory record set (JSON-shaped rows) plus
//! a column/action description and produces a filtered, sorted, paginated,
//! resizable, inline-editable projection of it. When a cell edit is
//! committed, the grid emits only the minimal delta needed to persist it
//! upstream: `(row identity, field, value)`.
//!
//! ## Features
//!
//! - **Projection pipeline**: date-range, categorical, and free-text
//!   filters followed by a stable, type-aware comparator sort
//! - **Tri-state column sort**: none → ascending → descending → none
//! - **Pagination** with clamp-down semantics when filters shrink the data
//! - **Drag-based column resizing** modeled as an explicit session value
//! - **Inline cell editing** with a declarative per-field type registry,
//!   commit-time coercion, and optimistic local updates
//! - **Theming** through lipgloss styles with adaptive colors
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_datagrid::prelude::*;
//! use serde_json::{json, Map, Value};
//!
//! fn row(v: Value) -> Map<String, Value> {
//!     match v {
//!         Value::Object(m) => m,
//!         _ => unreachable!(),
//!     }
//! }
//!
//! let mut grid = DataGrid::new(vec![
//!     Column::new("name", "Name"),
//!     Column::new("head_count", "Heads").with_align(Align::Right),
//!     Column::new("created_at", "Created"),
//! ])
//! .with_field_types(
//!     FieldRegistry::new()
//!         .register("head_count", FieldType::Number)
//!         .register("created_at", FieldType::Date),
//! )
//! .with_date_filter_field("created_at")
//! .with_pagination(Pagination::default())
//! .on_cell_commit(|id, field, value| {
//!     // Forward the delta to the persistence layer.
//!     let _ = (id, field, value);
//! })
//! .with_rows(vec![
//!     row(json!({"id": "a1", "name": "Ana", "head_count": 120,
//!                "created_at": "2024-01-10T00:00:00.000Z"})),
//!     row(json!({"id": "a2", "name": "Bruno", "head_count": 45,
//!                "created_at": "2024-02-10T00:00:00.000Z"})),
//! ]);
//!
//! // Sort by clicking the header, edit a cell, commit.
//! grid.toggle_sort("head_count");
//! grid.open_cell(0, "head_count").unwrap();
//! grid.set_pending(json!("60"));
//! grid.commit_edit();
//! ```
//!
//! ## Interaction model
//!
//! The grid implements `bubbletea_rs::Model`, handling page-navigation and
//! edit-session keys in `update` and rendering in `view`. Pointer-shaped
//! gestures (header activation, resize handles, cell opens) are explicit
//! method calls, so the host decides how they map onto its input story and
//! the whole engine stays testable without a terminal.

pub mod grid;
pub mod key;
pub mod paginator;
pub mod runeutil;

pub use grid::Model as DataGrid;
pub use grid::{
    Action, ActionFn, Align, CellCommitFn, Column, Direction, EditError, FieldRegistry,
    FieldType, GridKeyMap, GridStyles, Pagination, Row, RowId, RowKey, Sort,
};
pub use key::{Binding, KeyMap};
pub use paginator::Model as Paginator;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_datagrid::prelude::*;
///
/// let grid = DataGrid::new(vec![Column::new("name", "Name")]);
/// assert_eq!(grid.page_count(), 1);
/// ```
pub mod prelude {
    pub use crate::grid::{
        Action, Align, Column, Direction, EditError, FieldRegistry, FieldType, GridKeyMap,
        GridStyles, Model as DataGrid, Pagination, Row, RowId, RowKey, Sort,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::Model as Paginator;
}
