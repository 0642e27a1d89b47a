//! View rendering for the grid: header, data rows, and footer.
//!
//! Rendering consumes the projection, the width vector, and the edit session
//! state; it owns no behavior of its own.

use super::model::Model;
use super::projection::{display_string, field_value};
use super::style::{ELLIPSIS, SORT_ASC_ARROW, SORT_DESC_ARROW};
use super::types::{Align, Direction, FieldType, Row, RowKey};
use crate::runeutil;
use chrono::DateTime;
use serde_json::Value;

/// Placeholder shown for missing or null cell values.
const MISSING_CELL: &str = "-";

impl Model {
    /// Renders the header row: column titles, the sort arrow on the active
    /// column, and the actions column when present.
    pub(super) fn view_header(&self) -> String {
        let widths = self.column_widths();
        let mut cells = Vec::with_capacity(self.columns.len() + 1);
        for (i, col) in self.columns.iter().enumerate() {
            let width = usize::from(widths.get(i).copied().unwrap_or_default());
            let mut title = col.title.clone();
            if let Some(sort) = &self.sort {
                if sort.field == col.field {
                    let arrow = match sort.direction {
                        Direction::Ascending => SORT_ASC_ARROW,
                        Direction::Descending => SORT_DESC_ARROW,
                    };
                    title.push(' ');
                    title.push_str(arrow);
                }
            }
            cells.push(fit(&title, width, col.align));
        }
        if !self.actions.is_empty() {
            let width = usize::from(
                widths
                    .get(self.columns.len())
                    .copied()
                    .unwrap_or_default(),
            );
            cells.push(fit("Actions", width, Align::Center));
        }
        self.styles.header.clone().render(&cells.join(" | "))
    }

    /// Renders the separator line between the header and the data rows.
    pub(super) fn view_separator(&self) -> String {
        self.column_widths()
            .iter()
            .map(|w| "-".repeat(usize::from(*w)))
            .collect::<Vec<_>>()
            .join("-+-")
    }

    /// Renders the current page of data rows, or the empty-state message.
    pub(super) fn view_rows(&self) -> String {
        if self.projected.is_empty() {
            return self.styles.no_rows.clone().render("No records.");
        }
        self.page_keys()
            .iter()
            .map(|key| self.view_row(*key))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn view_row(&self, key: RowKey) -> String {
        let widths = self.column_widths();
        let Some(row) = self.row(key) else {
            return String::new();
        };
        let mut cells = Vec::with_capacity(self.columns.len() + 1);
        for (i, col) in self.columns.iter().enumerate() {
            let width = usize::from(widths.get(i).copied().unwrap_or_default());
            let editing_here = self
                .editing_cell()
                .is_some_and(|(k, field)| k == key && field == col.field);
            if editing_here {
                let pending = display_string(self.pending_value());
                let marked = format!("[{}]", pending);
                cells.push(
                    self.styles
                        .cell_editing
                        .clone()
                        .render(&fit(&marked, width, col.align)),
                );
            } else {
                cells.push(fit(&self.cell_text(row, &col.field), width, col.align));
            }
        }
        if !self.actions.is_empty() {
            let width = usize::from(
                widths
                    .get(self.columns.len())
                    .copied()
                    .unwrap_or_default(),
            );
            let labels = self
                .actions
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join("/");
            cells.push(fit(&labels, width, Align::Center));
        }
        self.styles.cell.clone().render(&cells.join(" | "))
    }

    /// Renders the footer: surviving row count plus the page indicator when
    /// more than one page exists.
    pub(super) fn view_footer(&self) -> String {
        let n = self.projected_len();
        let mut footer = format!("{} {}", n, if n == 1 { "row" } else { "rows" });
        if self.pagination.is_some() && self.page_count() > 1 {
            footer.push_str("  ");
            footer.push_str(
                &self
                    .styles
                    .pagination
                    .clone()
                    .render(&format!("page {}", self.paginator.view())),
            );
        }
        self.styles.footer.clone().render(&footer)
    }

    /// Formats a cell's display text: `-` for missing values, `YYYY/MM/DD`
    /// for date fields, and the stringified value otherwise.
    pub(super) fn cell_text(&self, row: &Row, field: &str) -> String {
        let value = field_value(row, field);
        if matches!(value, None | Some(Value::Null)) {
            return MISSING_CELL.to_string();
        }
        let raw = display_string(value);
        if matches!(self.field_types.kind(field), Some(FieldType::Date)) && !raw.is_empty() {
            return format_date_display(&raw);
        }
        raw
    }
}

/// Formats an ISO instant as `YYYY/MM/DD` in UTC; unparsable input is shown
/// as-is.
fn format_date_display(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.naive_utc().format("%Y/%m/%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncates and pads text to an exact display width with the given
/// alignment.
fn fit(s: &str, width: usize, align: Align) -> String {
    let truncated = runeutil::truncate(s, width, ELLIPSIS);
    match align {
        Align::Left => runeutil::pad_right(&truncated, width),
        Align::Center => runeutil::pad_center(&truncated, width),
        Align::Right => runeutil::pad_left(&truncated, width),
    }
}
