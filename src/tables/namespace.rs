//! The `nomad_namespace` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, GetConfig, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_namespace",
        description: "Retrieve information about your namespaces.",
        list: ListConfig {
            key_columns: vec![],
            fetch: fetch_page,
            apply_quals: None,
        },
        get: Some(GetConfig {
            key_column: "name",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new(
                "name",
                ColumnType::String,
                "A string representing the name of the namespace.",
            ),
            Column::new(
                "description",
                ColumnType::String,
                "A string providing a description or summary of the namespace.",
            ),
            Column::new(
                "quota",
                ColumnType::String,
                "A string specifying the maximum usage limit for the namespace.",
            ),
            Column::new(
                "create_index",
                ColumnType::Int,
                "The index at which the namespace was created.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "The index at which the namespace was last modified.",
            ),
            Column::new(
                "capabilities",
                ColumnType::Json,
                "The capabilities granted within the namespace.",
            ),
            Column::new(
                "meta",
                ColumnType::Json,
                "A map containing additional metadata associated with the namespace.",
            ),
            Column::title("Name"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.namespaces(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, name: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.namespace(name).boxed_local()
}
