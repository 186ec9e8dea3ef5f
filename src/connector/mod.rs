//! Connector assembly
//!
//! Holds the table registry plus the declarative error-class filters: `404`s
//! on single-item lookups are ignored (zero rows), `429`s are classified as
//! retryable for the caller's benefit. No retry is executed here; upstream
//! errors otherwise pass through verbatim.

mod executor;

use crate::api::ApiError;
use crate::schema::Table;
use crate::tables;
use std::collections::HashMap;

/// Query-time errors surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("table {0} does not support get")]
    GetNotSupported(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Matches upstream errors by HTTP status class, e.g. `"404"` or `"5"`.
#[derive(Debug, Clone)]
pub struct ErrorFilter {
    classes: Vec<&'static str>,
}

impl ErrorFilter {
    pub fn new(classes: &[&'static str]) -> Self {
        Self {
            classes: classes.to_vec(),
        }
    }

    pub fn matches(&self, err: &ApiError) -> bool {
        let Some(status) = err.status() else {
            return false;
        };
        let status = status.to_string();
        self.classes.iter().any(|class| status.starts_with(class))
    }
}

/// The connector: every registered table plus the default error filters.
pub struct Connector {
    tables: HashMap<&'static str, Table>,
    ignore: ErrorFilter,
    retryable: ErrorFilter,
}

impl Connector {
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        for table in tables::all_tables() {
            tables.insert(table.name, table);
        }
        Self {
            tables,
            ignore: ErrorFilter::new(&["404"]),
            retryable: ErrorFilter::new(&["429"]),
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Registered table names, sorted.
    pub fn table_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.tables.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Whether a failed call is worth retrying by the caller. Classification
    /// only; this crate never retries.
    pub fn is_retryable(&self, err: &ApiError) -> bool {
        self.retryable.matches(err)
    }

    pub(crate) fn is_ignored(&self, err: &ApiError) -> bool {
        self.ignore.matches(err)
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}
