//! Core types for the data grid: columns, rows, identities, field kinds,
//! sort and filter state, and the callback signatures the grid invokes.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A data row: an opaque mapping from field name to JSON value.
///
/// Values may be strings, numbers, booleans, ISO-8601 timestamp strings, or
/// one level of nested object reached through a dotted field path such as
/// `"place.display_name"`. The grid never requires a schema; it reads the
/// fields the columns and filters name and leaves the rest untouched.
pub type Row = Map<String, Value>;

/// Horizontal alignment of a column's cells and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left (the default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right, typical for numeric columns.
    Right,
}

/// Describes one visible column: the field path it reads, its header title,
/// and an alignment hint.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::grid::{Align, Column};
///
/// let col = Column::new("head_count", "Heads").with_align(Align::Right);
/// assert_eq!(col.field, "head_count");
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Field path to read from each row; one dot level of nesting allowed.
    pub field: String,
    /// Header title.
    pub title: String,
    /// Alignment hint for header and cells.
    pub align: Align,
}

impl Column {
    /// Creates a left-aligned column for the given field path and title.
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            align: Align::default(),
        }
    }

    /// Sets the alignment hint (builder pattern).
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A row-level action button descriptor.
///
/// Actions carry no behavior of their own; activating one forwards
/// `(action, row)` verbatim to the host's action callback.
#[derive(Debug, Clone)]
pub struct Action {
    /// Short name, also used as the rendered label.
    pub name: String,
    /// Tooltip / help text.
    pub tooltip: String,
}

impl Action {
    /// Creates an action descriptor.
    pub fn new(name: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tooltip: tooltip.into(),
        }
    }
}

/// Stable surrogate key for a row within the current snapshot.
///
/// Keys are assigned when a row array is ingested and remain valid until the
/// next snapshot replaces it. Filtering, sorting, and paging all operate on
/// key-ordered lists, and the edit controller addresses rows by key, so no
/// component ever has to re-locate a row by position or reference equality
/// in a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(pub(crate) usize);

/// A row's durable external identity, read from the primary id field or the
/// fallback secondary id field.
#[derive(Debug, Clone, PartialEq)]
pub enum RowId {
    /// String identity.
    Text(String),
    /// Numeric identity.
    Number(serde_json::Number),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Text(s) => f.write_str(s),
            RowId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The active sort: a field path plus a direction.
///
/// The grid stores this as `Option<Sort>`, so "some field without a
/// direction" and "a direction without a field" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Field path being sorted on.
    pub field: String,
    /// Sort direction.
    pub direction: Direction,
}

/// Editor domain and coercion rule for a field, registered by path.
///
/// The registry is the single place that decides how a field seeds its
/// editor, how a pending value is coerced at commit, and which values an
/// enumerated field offers. Fields without an entry edit as free text and
/// commit their value unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Free text. With `trim: true` the committed string is trimmed.
    Text {
        /// Trim surrounding whitespace at commit time.
        trim: bool,
    },
    /// Numeric field: commits a JSON number (integer when fractionless).
    Number,
    /// Date field stored as an ISO-8601 instant. The editor works in date
    /// granularity: seeding strips the time of day, and commit anchors the
    /// date to UTC midnight.
    Date,
    /// Enumerated field with a fixed option list.
    Select {
        /// The allowed values, in display order.
        options: Vec<String>,
    },
    /// A geocoded place stored as a nested object. Registering this kind
    /// under a dotted path whitelists that path for inline editing; commit
    /// merges the pending object into the existing nested value.
    Location,
    /// Never editable; open attempts are refused.
    ReadOnly,
}

impl FieldType {
    /// Default column width in terminal cells for this field kind.
    pub(crate) fn default_width(&self) -> u16 {
        match self {
            FieldType::Number => 8,
            FieldType::Date => 12,
            FieldType::Select { .. } => 14,
            FieldType::Location => 24,
            FieldType::Text { .. } | FieldType::ReadOnly => 18,
        }
    }
}

/// Declarative mapping from field path to [`FieldType`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::grid::{FieldRegistry, FieldType};
///
/// let registry = FieldRegistry::new()
///     .register("created_at", FieldType::Date)
///     .register("head_count", FieldType::Number)
///     .register("status", FieldType::Select {
///         options: vec!["PENDING".into(), "BOUGHT".into()],
///     });
/// assert_eq!(registry.kind("created_at"), Some(&FieldType::Date));
/// assert_eq!(registry.kind("notes"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    entries: BTreeMap<String, FieldType>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field kind under a field path (builder pattern).
    pub fn register(mut self, field: impl Into<String>, kind: FieldType) -> Self {
        self.entries.insert(field.into(), kind);
        self
    }

    /// Looks up the kind registered for a field path.
    pub fn kind(&self, field: &str) -> Option<&FieldType> {
        self.entries.get(field)
    }
}

/// Pagination configuration. Absence of this config disables paging and the
/// grid renders the whole projection as a single page.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Rows per page.
    pub per_page: usize,
    /// Page sizes offered to the user.
    pub per_page_options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            per_page: 7,
            per_page_options: vec![7, 10, 25],
        }
    }
}

/// Callback invoked after a successful commit with a resolved identity.
///
/// Receives `(row identity, field path, committed value)`. The grid fires
/// this and moves on; it does not await, inspect, retry, or roll back.
pub type CellCommitFn = Box<dyn Fn(RowId, &str, &Value) + Send + Sync>;

/// Callback invoked when a row action is activated, with the action
/// descriptor and the row it was activated on.
pub type ActionFn = Box<dyn Fn(&Action, &Row) + Send + Sync>;

/// The grid's filter inputs. All predicates are conjunctive.
#[derive(Debug, Clone, Default)]
pub(crate) struct FilterState {
    /// Column to search in; free-text filtering is off while `None`.
    pub search_field: Option<String>,
    /// Needle for the free-text filter; matched case-insensitively after
    /// trimming.
    pub search_term: String,
    /// Inclusive lower date bound, anchored to UTC midnight.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound, anchored to UTC 23:59:59.
    pub date_to: Option<NaiveDate>,
    /// Selected values for the categorical filter. Empty means no filter,
    /// not "exclude everything".
    pub categories: BTreeSet<String>,
}
