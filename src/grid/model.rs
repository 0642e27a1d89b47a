//! The grid model: state ownership, configuration builders, filter and sort
//! mutators, and page access.

use super::editing::EditSession;
use super::keys::GridKeyMap;
use super::projection;
use super::resize::{WidthController, DEFAULT_MIN_WIDTH};
use super::style::GridStyles;
use super::types::{
    Action, ActionFn, CellCommitFn, Column, Direction, FieldRegistry, FilterState, Pagination,
    Row, RowId, RowKey, Sort,
};
use crate::paginator;
use chrono::NaiveDate;
use serde_json::Value;

/// Default primary identity field.
const PRIMARY_ID_FIELD: &str = "id";
/// Default fallback identity field.
const FALLBACK_ID_FIELD: &str = "_id";

/// An interactive data grid over an in-memory record set.
///
/// The grid ingests a row snapshot, projects it through its filter and sort
/// state, pages the projection, and exposes inline cell editing and column
/// resizing. State the grid owns (filters, sort, widths, page, edit session)
/// resets to defaults whenever a new snapshot arrives.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::grid::{Column, Model, Pagination};
/// use serde_json::{json, Map, Value};
///
/// fn row(v: Value) -> Map<String, Value> {
///     match v {
///         Value::Object(m) => m,
///         _ => unreachable!(),
///     }
/// }
///
/// let mut grid = Model::new(vec![
///     Column::new("name", "Name"),
///     Column::new("phone", "Phone"),
/// ])
/// .with_rows(vec![
///     row(json!({"id": "1", "name": "Ana", "phone": "555-0101"})),
///     row(json!({"id": "2", "name": "Bruno", "phone": "555-0102"})),
/// ])
/// .with_pagination(Pagination::default());
///
/// grid.set_search(Some("name"), "bru");
/// assert_eq!(grid.page_rows().len(), 1);
/// ```
pub struct Model {
    pub(super) columns: Vec<Column>,
    pub(super) actions: Vec<Action>,

    /// Local working copy of the ingested snapshot. Commits mutate this
    /// optimistically; the upstream source of truth is only notified through
    /// the commit callback.
    pub(super) rows: Vec<Row>,
    /// Key-ordered output of the projection pipeline.
    pub(super) projected: Vec<RowKey>,

    pub(super) filter: FilterState,
    pub(super) sort: Option<Sort>,
    pub(super) date_field: Option<String>,
    pub(super) category_field: Option<String>,

    pub(super) field_types: FieldRegistry,
    pub(super) id_field: String,
    pub(super) fallback_id_field: String,

    pub(super) pagination: Option<Pagination>,
    pub(super) paginator: paginator::Model,
    pub(super) widths: WidthController,
    pub(super) edit: Option<EditSession>,

    pub(super) on_commit: Option<CellCommitFn>,
    pub(super) on_action: Option<ActionFn>,

    pub(super) styles: GridStyles,
    pub(super) keymap: GridKeyMap,
}

impl Model {
    /// Creates a grid for the given columns with no rows, no pagination,
    /// and an empty field registry.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut model = Self {
            columns,
            actions: Vec::new(),
            rows: Vec::new(),
            projected: Vec::new(),
            filter: FilterState::default(),
            sort: None,
            date_field: None,
            category_field: None,
            field_types: FieldRegistry::new(),
            id_field: PRIMARY_ID_FIELD.to_string(),
            fallback_id_field: FALLBACK_ID_FIELD.to_string(),
            pagination: None,
            paginator: paginator::Model::new(),
            widths: WidthController::new(DEFAULT_MIN_WIDTH),
            edit: None,
            on_commit: None,
            on_action: None,
            styles: GridStyles::default(),
            keymap: GridKeyMap::default(),
        };
        model.rebuild_widths();
        model.refresh(true);
        model
    }

    /// Supplies the initial row snapshot (builder pattern).
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Adds a trailing actions column (builder pattern).
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self.rebuild_widths();
        self
    }

    /// Enables pagination with the given configuration (builder pattern).
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self.refresh(true);
        self
    }

    /// Installs the field-type registry (builder pattern). Column widths are
    /// rebuilt because kind-specific defaults may change.
    pub fn with_field_types(mut self, registry: FieldRegistry) -> Self {
        self.field_types = registry;
        self.rebuild_widths();
        self
    }

    /// Designates the timestamp field the date-range filter reads
    /// (builder pattern).
    pub fn with_date_filter_field(mut self, field: impl Into<String>) -> Self {
        self.date_field = Some(field.into());
        self
    }

    /// Designates the field the categorical filter reads (builder pattern).
    pub fn with_category_filter_field(mut self, field: impl Into<String>) -> Self {
        self.category_field = Some(field.into());
        self
    }

    /// Overrides the identity fields used at commit time (builder pattern).
    /// Defaults are `"id"` with `"_id"` as fallback.
    pub fn with_identity_fields(
        mut self,
        primary: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.id_field = primary.into();
        self.fallback_id_field = fallback.into();
        self
    }

    /// Sets the width floor for drag resizing (builder pattern).
    pub fn with_min_column_width(mut self, min_width: u16) -> Self {
        self.widths = WidthController::new(min_width);
        self.rebuild_widths();
        self
    }

    /// Replaces the visual styles (builder pattern).
    pub fn with_styles(mut self, styles: GridStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Installs the commit callback invoked with `(identity, field, value)`
    /// after a successful inline edit (builder pattern).
    pub fn on_cell_commit<F>(mut self, f: F) -> Self
    where
        F: Fn(RowId, &str, &Value) + Send + Sync + 'static,
    {
        self.on_commit = Some(Box::new(f));
        self
    }

    /// Installs the callback invoked when a row action is activated
    /// (builder pattern).
    pub fn on_action<F>(mut self, f: F) -> Self
    where
        F: Fn(&Action, &Row) + Send + Sync + 'static,
    {
        self.on_action = Some(Box::new(f));
        self
    }

    /// Ingests a fresh row snapshot.
    ///
    /// The arena is rebuilt with new keys and all grid-owned state resets:
    /// filters clear, sort clears, widths return to defaults, the page
    /// returns to 0, and any open edit session is abandoned.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.filter = FilterState::default();
        self.sort = None;
        self.edit = None;
        if let Some(cfg) = &self.pagination {
            self.paginator.set_per_page(cfg.per_page);
        }
        self.rebuild_widths();
        self.refresh(true);
    }

    /// Replaces the column set.
    ///
    /// The width vector is rebuilt from kind defaults, and the active sort
    /// is cleared if its field no longer appears among the columns.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.rebuild_widths();
        let dangling = self
            .sort
            .as_ref()
            .is_some_and(|s| !self.columns.iter().any(|c| c.field == s.field));
        if dangling {
            self.sort = None;
            self.refresh(true);
        }
    }

    /// Sets the free-text filter: the column to search and the term.
    /// Passing `None` or an empty term disables the stage.
    pub fn set_search(&mut self, field: Option<&str>, term: &str) {
        self.filter.search_field = field.map(str::to_string);
        self.filter.search_term = term.to_string();
        self.refresh(true);
    }

    /// Sets the inclusive date-range bounds. Either bound may be absent.
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filter.date_from = from;
        self.filter.date_to = to;
        self.refresh(true);
    }

    /// Toggles one value in the categorical selection set.
    pub fn toggle_category(&mut self, value: &str) {
        if !self.filter.categories.remove(value) {
            self.filter.categories.insert(value.to_string());
        }
        self.refresh(true);
    }

    /// Clears the categorical selection set entirely.
    pub fn clear_categories(&mut self) {
        self.filter.categories.clear();
        self.refresh(true);
    }

    /// Cycles the sort state for a column header activation.
    ///
    /// A column with no active sort (or a different active column) starts
    /// ascending; a second activation flips to descending; a third clears
    /// the sort. Ignored while a resize drag is in progress so the handle
    /// gesture cannot double as a sort toggle.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.widths.dragging() {
            return;
        }
        self.sort = match self.sort.take() {
            Some(s) if s.field == field => match s.direction {
                Direction::Ascending => Some(Sort {
                    field: s.field,
                    direction: Direction::Descending,
                }),
                Direction::Descending => None,
            },
            _ => Some(Sort {
                field: field.to_string(),
                direction: Direction::Ascending,
            }),
        };
        self.refresh(true);
    }

    /// Changes the page size and returns to the first page. No-op when
    /// pagination is disabled.
    pub fn set_per_page(&mut self, per_page: usize) {
        let Some(cfg) = &mut self.pagination else {
            return;
        };
        cfg.per_page = per_page.max(1);
        self.paginator.set_per_page(per_page.max(1));
        self.refresh(true);
    }

    /// Advances to the next page, if any.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    /// Returns to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    // Resize protocol. See `resize::WidthController` for the session rules.

    /// Starts a drag on the given column's resize handle at pointer
    /// position `x`.
    pub fn resize_press(&mut self, column: usize, x: u16) {
        self.widths.press(column, x);
    }

    /// Continues the active drag at pointer position `x`.
    pub fn resize_drag(&mut self, x: u16) {
        self.widths.drag_to(x);
    }

    /// Ends the active drag.
    pub fn resize_release(&mut self) {
        self.widths.release();
    }

    /// Activates a row action by action index and page-relative row index,
    /// forwarding `(action, row)` to the host callback.
    pub fn invoke_action(&self, action_index: usize, page_row: usize) {
        let (Some(action), Some(key)) = (
            self.actions.get(action_index),
            self.page_keys().get(page_row).copied(),
        ) else {
            return;
        };
        if let (Some(cb), Some(row)) = (&self.on_action, self.rows.get(key.0)) {
            cb(action, row);
        }
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the current working copy of the rows in ingestion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row behind a key, if the key belongs to this snapshot.
    pub fn row(&self, key: RowKey) -> Option<&Row> {
        self.rows.get(key.0)
    }

    /// Returns the active sort, if any.
    pub fn sort_state(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Returns the number of rows that survive the current filters.
    pub fn projected_len(&self) -> usize {
        self.projected.len()
    }

    /// Returns the current zero-indexed page.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// Returns the total page count (always at least 1).
    pub fn page_count(&self) -> usize {
        self.paginator.total_pages
    }

    /// Returns the current column width vector, including the actions slot
    /// when an actions column is present.
    pub fn column_widths(&self) -> &[u16] {
        self.widths.widths()
    }

    /// Returns the keys of the rows on the current page, in display order.
    pub fn page_keys(&self) -> &[RowKey] {
        let (start, end) = self.paginator.get_slice_bounds(self.projected.len());
        &self.projected[start..end]
    }

    /// Returns the rows on the current page, in display order.
    pub fn page_rows(&self) -> Vec<&Row> {
        self.page_keys()
            .iter()
            .filter_map(|key| self.rows.get(key.0))
            .collect()
    }

    /// Reruns the projection pipeline and resynchronizes the paginator.
    ///
    /// `reset_page` is set by every filter/sort mutation; commits and
    /// snapshot-internal updates keep the current page, which the paginator
    /// still clamps down if the projection shrank.
    pub(super) fn refresh(&mut self, reset_page: bool) {
        self.projected = projection::project(
            &self.rows,
            &self.filter,
            self.sort.as_ref(),
            self.date_field.as_deref(),
            self.category_field.as_deref(),
        );
        if reset_page {
            self.paginator.page = 0;
        }
        match &self.pagination {
            Some(cfg) => self.paginator.set_per_page(cfg.per_page),
            // Paging disabled: the whole projection is one page.
            None => self.paginator.set_per_page(self.projected.len().max(1)),
        }
        self.paginator.set_total_items(self.projected.len());
    }

    pub(super) fn rebuild_widths(&mut self) {
        self.widths
            .rebuild(&self.columns, &self.field_types, !self.actions.is_empty());
    }
}
