//! Table and column declarations
//!
//! A [`Table`] is a declarative mapping from one Nomad entity type to a set of
//! typed columns, backed by a paged list fetch and an optional single-item get
//! fetch. The declarations carry no behavior of their own; the connector
//! executor drives them.

mod transform;

pub use transform::{camel_case, project_row, Transform};

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::query::QueryContext;
use futures::future::LocalBoxFuture;
use serde_json::Value;

/// Wire type of a column as exposed to the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Int,
    Bool,
    Timestamp,
    Json,
}

/// Which retrieval function a column's source field appears in.
///
/// `Get` columns are only present in the single-item payload; they project as
/// null from list stubs unless the executor enriches the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydrate {
    List,
    Get,
}

/// A single column definition.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub description: &'static str,
    pub transform: Transform,
    pub hydrate: Hydrate,
}

impl Column {
    pub fn new(name: &'static str, column_type: ColumnType, description: &'static str) -> Self {
        Self {
            name,
            column_type,
            description,
            transform: Transform::FromCamel,
            hydrate: Hydrate::List,
        }
    }

    /// Override the source field (acronym-heavy upstream fields like `ID`).
    pub fn from_field(mut self, field: &'static str) -> Self {
        self.transform = Transform::FromField(field);
        self
    }

    /// Convert an epoch-nanosecond source field to an RFC 3339 timestamp.
    pub fn nanos_timestamp(mut self, field: &'static str) -> Self {
        self.transform = Transform::NanosToTimestamp(field);
        self
    }

    /// Mark the column as sourced from the get payload only.
    pub fn from_get(mut self) -> Self {
        self.hydrate = Hydrate::Get;
        self
    }

    /// The standard `title` column every table carries.
    pub fn title(field: &'static str) -> Self {
        Column::new("title", ColumnType::String, "The title of the item.").from_field(field)
    }
}

/// An equality qual a table accepts on its list path.
#[derive(Debug, Clone, Copy)]
pub struct KeyColumn {
    pub name: &'static str,
    pub required: bool,
}

impl KeyColumn {
    pub fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Fetches one page of list results.
pub type PageFn = for<'a> fn(
    &'a Client,
    &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>>;

/// Translates caller quals into upstream query options.
pub type QualsFn = fn(&QueryContext, &mut QueryOptions);

/// Fetches a single item by its key.
pub type GetFn = for<'a> fn(&'a Client, &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>>;

/// List-side configuration of a table.
pub struct ListConfig {
    pub key_columns: Vec<KeyColumn>,
    pub fetch: PageFn,
    pub apply_quals: Option<QualsFn>,
}

/// Get-side configuration of a table.
pub struct GetConfig {
    /// Column whose value keys the single-item lookup.
    pub key_column: &'static str,
    pub fetch: GetFn,
}

/// A named, column-typed view over one kind of Nomad entity.
pub struct Table {
    pub name: &'static str,
    pub description: &'static str,
    pub list: ListConfig,
    pub get: Option<GetConfig>,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether any column needs the get payload to be non-null.
    pub fn has_get_columns(&self) -> bool {
        self.columns.iter().any(|c| c.hydrate == Hydrate::Get)
    }
}
