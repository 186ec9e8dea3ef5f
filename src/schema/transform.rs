//! Column value transforms
//!
//! Upstream payloads keep Go-style PascalCase field names; columns are
//! snake_case. The default transform bridges the two, with explicit overrides
//! for acronym fields and epoch-nanosecond timestamps.

use super::Column;
use crate::query::Row;
use chrono::DateTime;
use serde_json::Value;

/// How a column value is derived from the upstream JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Look up the PascalCase form of the column name (`create_index` -> `CreateIndex`).
    FromCamel,
    /// Look up an explicitly named field.
    FromField(&'static str),
    /// Named int64 field holding epoch nanoseconds, rendered as RFC 3339 UTC.
    NanosToTimestamp(&'static str),
}

impl Transform {
    /// Pull the column value out of an upstream object. Missing fields and
    /// non-object payloads project as null; values are relayed as-is otherwise.
    pub fn apply(&self, column_name: &str, obj: &Value) -> Value {
        match self {
            Transform::FromCamel => field(obj, &camel_case(column_name)),
            Transform::FromField(name) => field(obj, name),
            Transform::NanosToTimestamp(name) => nanos_to_timestamp(field(obj, name)),
        }
    }
}

fn field(obj: &Value, name: &str) -> Value {
    obj.get(name).cloned().unwrap_or(Value::Null)
}

/// Convert a snake_case column name to the PascalCase upstream field name.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Epoch nanoseconds to an RFC 3339 timestamp string, truncated to seconds
/// the way the upstream submit-time conversion does it.
fn nanos_to_timestamp(value: Value) -> Value {
    match value.as_i64() {
        Some(nanos) => match DateTime::from_timestamp(nanos / 1_000_000_000, 0) {
            Some(ts) => Value::String(ts.to_rfc3339()),
            None => Value::Null,
        },
        None => Value::Null,
    }
}

/// Project an upstream JSON object into an ordered row following the table's
/// column declarations. Projection never fails: whatever the upstream relay
/// carries lands under the declared column, missing fields land as null.
pub fn project_row(columns: &[Column], obj: &Value) -> Row {
    Row::new(
        columns
            .iter()
            .map(|c| (c.name.to_string(), c.transform.apply(c.name, obj)))
            .collect(),
    )
}
