//! The `nomad_plugin` table (CSI plugins).

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, GetConfig, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_plugin",
        description: "Retrieve information about your CSI plugins.",
        list: ListConfig {
            key_columns: vec![],
            fetch: fetch_page,
            apply_quals: None,
        },
        get: Some(GetConfig {
            key_column: "id",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new("id", ColumnType::String, "The ID of the plugin.").from_field("ID"),
            Column::new(
                "provider",
                ColumnType::String,
                "The storage provider backing the plugin.",
            ),
            Column::new(
                "version",
                ColumnType::String,
                "The version of the plugin.",
            )
            .from_get(),
            Column::new(
                "controller_required",
                ColumnType::Bool,
                "Whether the plugin requires a controller.",
            ),
            Column::new(
                "controllers_healthy",
                ColumnType::Int,
                "The number of healthy controllers.",
            ),
            Column::new(
                "controllers_expected",
                ColumnType::Int,
                "The number of expected controllers.",
            ),
            Column::new(
                "nodes_healthy",
                ColumnType::Int,
                "The number of healthy nodes.",
            ),
            Column::new(
                "nodes_expected",
                ColumnType::Int,
                "The number of expected nodes.",
            ),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the plugin.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the plugin.",
            ),
            Column::new(
                "controllers",
                ColumnType::Json,
                "The controller fleet of the plugin.",
            )
            .from_get(),
            Column::new("nodes", ColumnType::Json, "The node fleet of the plugin.").from_get(),
            Column::new(
                "allocations",
                ColumnType::Json,
                "The allocations running the plugin.",
            )
            .from_get(),
            Column::title("ID"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.csi_plugins(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.csi_plugin(id).boxed_local()
}
