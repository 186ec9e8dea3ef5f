//! Query execution
//!
//! Drives a table's hydrate functions: the list path pages through upstream
//! results on the continuation token and streams projected rows until the
//! pages run out, the row budget is exhausted, or the caller cancels. The get
//! path looks a single item up by key.

use super::{Connector, QueryError};
use crate::api::{ApiError, Client, QueryOptions};
use crate::query::{QueryContext, QueryData, Row, SinkState};
use crate::schema::{project_row, Table};
use serde_json::Value;

/// A streamed row must satisfy every equality qual naming a declared column,
/// whether or not the list call pushed that qual upstream.
fn quals_match(table: &Table, ctx: &QueryContext, row: &Row) -> bool {
    ctx.quals.iter().all(|(name, qual)| {
        if table.column(name).is_none() {
            return true;
        }
        row.get(name).is_some_and(|cell| cell_matches(cell, qual))
    })
}

// CLI quals arrive as strings; numeric and boolean cells compare by their
// canonical rendering.
fn cell_matches(cell: &Value, qual: &Value) -> bool {
    if cell == qual {
        return true;
    }
    match (cell, qual) {
        (Value::Number(n), Value::String(q)) => n.to_string() == *q,
        (Value::Bool(b), Value::String(q)) => b.to_string() == *q,
        _ => false,
    }
}

impl Connector {
    /// Run a table's list hydrate, streaming rows into the query data's sink.
    /// Rows failing an equality qual are skipped and do not spend budget.
    ///
    /// With `enrich` set, each list row is merged with its get payload so
    /// get-only columns are populated; without it they project as null.
    pub async fn run_list(
        &self,
        client: &Client,
        table_name: &str,
        data: &mut QueryData,
        enrich: bool,
    ) -> Result<(), QueryError> {
        let table = self
            .table(table_name)
            .ok_or_else(|| QueryError::TableNotFound(table_name.to_string()))?;

        // A zero budget streams nothing and performs no calls at all.
        if data.rows_remaining() == Some(0) {
            return Ok(());
        }

        let mut opts = QueryOptions {
            per_page: Some(data.page_size()),
            ..QueryOptions::default()
        };
        if let Some(apply) = table.list.apply_quals {
            apply(data.ctx(), &mut opts);
        }

        let enrich = enrich && table.has_get_columns() && table.get.is_some();

        loop {
            let (items, meta) = (table.list.fetch)(client, &opts)
                .await
                .map_err(|e| self.surface(table.name, e))?;

            for item in items {
                let item = if enrich {
                    self.enrich_item(client, table, item).await?
                } else {
                    item
                };
                let row = project_row(&table.columns, &item);
                if !quals_match(table, data.ctx(), &row) {
                    continue;
                }
                if data.stream_row(row) == SinkState::Done {
                    return Ok(());
                }
            }

            match meta.next_token {
                Some(token) if !token.is_empty() => opts.next_token = Some(token),
                _ => break,
            }
        }

        Ok(())
    }

    /// Run a table's get hydrate for one key. An empty key yields no row; an
    /// ignored error class (404) also yields no row.
    pub async fn run_get(
        &self,
        client: &Client,
        table_name: &str,
        key: &str,
        data: &mut QueryData,
    ) -> Result<(), QueryError> {
        let table = self
            .table(table_name)
            .ok_or_else(|| QueryError::TableNotFound(table_name.to_string()))?;
        let get = table
            .get
            .as_ref()
            .ok_or(QueryError::GetNotSupported(table.name))?;

        if key.is_empty() || data.rows_remaining() == Some(0) {
            return Ok(());
        }

        match (get.fetch)(client, key).await {
            Ok(item) => {
                data.stream_row(project_row(&table.columns, &item));
                Ok(())
            }
            Err(e) if self.is_ignored(&e) => {
                tracing::debug!(table = table.name, key, "get returned an ignored error class");
                Ok(())
            }
            Err(e) => Err(self.surface(table.name, e)),
        }
    }

    /// Merge a list stub with its get payload; get fields win. Lookup key is
    /// the get key column projected from the stub. Stubs without a key and
    /// ignored lookup errors leave the stub as-is.
    async fn enrich_item(
        &self,
        client: &Client,
        table: &Table,
        item: Value,
    ) -> Result<Value, QueryError> {
        let Some(get) = table.get.as_ref() else {
            return Ok(item);
        };
        let Some(column) = table.column(get.key_column) else {
            return Ok(item);
        };

        let key = match column.transform.apply(column.name, &item) {
            Value::String(key) if !key.is_empty() => key,
            _ => return Ok(item),
        };

        match (get.fetch)(client, &key).await {
            Ok(Value::Object(fields)) => {
                let mut merged = item;
                if let Value::Object(base) = &mut merged {
                    for (k, v) in fields {
                        base.insert(k, v);
                    }
                }
                Ok(merged)
            }
            Ok(_) => Ok(item),
            Err(e) if self.is_ignored(&e) => Ok(item),
            Err(e) => Err(self.surface(table.name, e)),
        }
    }

    /// Attach the retryable classification before an error propagates.
    fn surface(&self, table: &str, err: ApiError) -> QueryError {
        if self.is_retryable(&err) {
            tracing::warn!(table, error = %err, "upstream error is retryable");
        } else {
            tracing::error!(table, error = %err, "upstream error");
        }
        QueryError::Api(err)
    }
}
