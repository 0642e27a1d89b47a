//! Inline cell editing: the single-slot edit session, field-kind coercion at
//! commit time, identity resolution, and the fire-and-forget commit
//! notification.
//!
//! The machine has two states, idle and editing. Opening a cell seeds a
//! pending value from the working copy; edits replace the pending value
//! wholesale; commit coerces, writes the working copy optimistically, and
//! notifies the host if the row has a durable identity. Cancel discards
//! everything. Opening another cell while one is open silently abandons the
//! first session.

use super::model::Model;
use super::projection::field_value;
use super::types::{FieldType, RowId, RowKey};
use chrono::NaiveDate;
use log::{debug, trace};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key for the provenance tag inside a location object.
const LOCATION_SOURCE_KEY: &str = "source";
/// Provenance recorded when a merged location carries none.
const LOCATION_SOURCE_DEFAULT: &str = "manual";

/// Why a cell refused to open for editing.
///
/// These are the only errors the grid ever returns; everything downstream of
/// a successful open degrades to a defined fallback instead of failing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The field is registered as read-only.
    #[error("field `{0}` is read-only")]
    ReadOnly(String),
    /// The field is nested and not whitelisted by the registry.
    #[error("nested field `{0}` is not editable")]
    NestedField(String),
    /// The page-relative row index is not on the current page.
    #[error("row {0} is not on the current page")]
    RowOutOfRange(usize),
}

/// The live edit session: which row (by stable key), which field, and the
/// not-yet-committed value.
#[derive(Debug, Clone)]
pub(super) struct EditSession {
    pub key: RowKey,
    pub field: String,
    pub pending: Value,
}

impl Model {
    /// Opens an edit session on a cell, addressed by page-relative row index
    /// and field path.
    ///
    /// Refuses read-only fields and nested fields the registry does not
    /// whitelist. The pending value seeds from the cell's current value;
    /// date fields seed only the date portion because their editor works in
    /// date granularity. An already-open session is replaced without commit
    /// or cancel.
    pub fn open_cell(&mut self, page_row: usize, field: &str) -> Result<(), EditError> {
        let kind = self.field_types.kind(field);
        if matches!(kind, Some(FieldType::ReadOnly)) {
            return Err(EditError::ReadOnly(field.to_string()));
        }
        if field.contains('.') && kind.is_none() {
            return Err(EditError::NestedField(field.to_string()));
        }
        let key = self
            .page_keys()
            .get(page_row)
            .copied()
            .ok_or(EditError::RowOutOfRange(page_row))?;

        let current = self
            .row(key)
            .and_then(|row| field_value(row, field))
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        let pending = match kind {
            Some(FieldType::Date) => match current {
                Value::String(s) => {
                    Value::String(s.split('T').next().unwrap_or_default().to_string())
                }
                other => other,
            },
            _ => current,
        };

        if let Some(previous) = &self.edit {
            trace!(
                "abandoning pending edit on field `{}` without commit",
                previous.field
            );
        }
        self.edit = Some(EditSession {
            key,
            field: field.to_string(),
            pending,
        });
        Ok(())
    }

    /// Replaces the pending value wholesale. No validation happens here;
    /// coercion is a commit-time concern. No-op while idle.
    pub fn set_pending(&mut self, value: Value) {
        if let Some(session) = &mut self.edit {
            session.pending = value;
        }
    }

    /// Returns the pending value of the open session, if any.
    pub fn pending_value(&self) -> Option<&Value> {
        self.edit.as_ref().map(|s| &s.pending)
    }

    /// True while an edit session is open.
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Returns the open session's target as `(row key, field path)`.
    pub fn editing_cell(&self) -> Option<(RowKey, &str)> {
        self.edit.as_ref().map(|s| (s.key, s.field.as_str()))
    }

    /// Commits the open session.
    ///
    /// The pending value is coerced by field kind, written into the working
    /// copy at the session's row key, and, when the row has a resolvable
    /// identity, forwarded to the commit callback as
    /// `(identity, field, value)`. Rows without identity keep the local
    /// update but notify nobody. The projection reruns afterwards so a sort
    /// or filter on the edited field reflects the new value; the current
    /// page is kept (clamped if the projection shrank). No-op while idle.
    pub fn commit_edit(&mut self) {
        let Some(session) = self.edit.take() else {
            return;
        };
        let kind = self.field_types.kind(&session.field).cloned();
        let value = coerce_pending(kind.as_ref(), session.pending);

        self.write_cell(session.key, &session.field, value.clone(), kind.as_ref());

        match self.row_identity(session.key) {
            Some(id) => {
                if let Some(cb) = &self.on_commit {
                    cb(id, &session.field, &value);
                }
            }
            None => debug!(
                "commit on field `{}` kept locally: row has no identity",
                session.field
            ),
        }
        self.refresh(false);
    }

    /// Discards the open session without touching the working copy or
    /// notifying anyone. No-op while idle.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Resolves a row's durable identity: the primary id field first, then
    /// the fallback. Empty strings and non-scalar values do not count.
    pub(super) fn row_identity(&self, key: RowKey) -> Option<RowId> {
        let row = self.rows.get(key.0)?;
        for field in [&self.id_field, &self.fallback_id_field] {
            match row.get(field.as_str()) {
                Some(Value::String(s)) if !s.is_empty() => return Some(RowId::Text(s.clone())),
                Some(Value::Number(n)) => return Some(RowId::Number(n.clone())),
                _ => {}
            }
        }
        None
    }

    /// Writes a committed value into the working copy.
    ///
    /// Location fields registered under a dotted path merge object values
    /// into the nested object at the path's parent and default the
    /// provenance tag. Other whitelisted nested fields write the child key
    /// directly. Top-level fields replace their entry.
    fn write_cell(&mut self, key: RowKey, field: &str, value: Value, kind: Option<&FieldType>) {
        let Some(row) = self.rows.get_mut(key.0) else {
            return;
        };
        match field.split_once('.') {
            Some((parent, child)) => {
                let slot = row
                    .entry(parent.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                let Some(nested) = slot.as_object_mut() else {
                    return;
                };
                match (kind, value) {
                    (Some(FieldType::Location), Value::Object(fields)) => {
                        for (k, v) in fields {
                            nested.insert(k, v);
                        }
                        if !nested.contains_key(LOCATION_SOURCE_KEY) {
                            nested.insert(
                                LOCATION_SOURCE_KEY.to_string(),
                                Value::String(LOCATION_SOURCE_DEFAULT.to_string()),
                            );
                        }
                    }
                    (_, other) => {
                        nested.insert(child.to_string(), other);
                    }
                }
            }
            None => {
                row.insert(field.to_string(), value);
            }
        }
    }
}

/// Applies the field kind's coercion rule to a pending value.
fn coerce_pending(kind: Option<&FieldType>, pending: Value) -> Value {
    match kind {
        Some(FieldType::Date) => coerce_date(pending),
        Some(FieldType::Number) => coerce_number(pending),
        Some(FieldType::Text { trim: true }) => match pending {
            Value::String(s) => Value::String(s.trim().to_string()),
            other => other,
        },
        _ => pending,
    }
}

/// Combines a date-only string with UTC midnight as an ISO-8601 instant.
/// Input that is not a valid `YYYY-MM-DD` date passes through unchanged.
fn coerce_date(pending: Value) -> Value {
    match &pending {
        Value::String(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => {
            Value::String(format!("{s}T00:00:00.000Z"))
        }
        _ => pending,
    }
}

/// Coerces a pending value to a JSON number: integers stay integral, other
/// parsable input becomes a float. Unparsable text passes through trimmed.
fn coerce_number(pending: Value) -> Value {
    match pending {
        Value::Number(_) => pending,
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return Value::Number(n.into());
            }
            if let Ok(f) = trimmed.parse::<f64>() {
                if let Some(n) = serde_json::Number::from_f64(f) {
                    return Value::Number(n);
                }
            }
            Value::String(trimmed.to_string())
        }
        other => other,
    }
}
