//! The `nomad_node` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, GetConfig, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_node",
        description: "Retrieve information about your client nodes.",
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
            Column::new("id", ColumnType::String, "The UUID of the node.").from_field("ID"),
            Column::new("name", ColumnType::String, "The name of the node."),
            Column::new("address", ColumnType::String, "The IP address of the node."),
            Column::new("status", ColumnType::String, "The status of the node."),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the node.",
            ),
            Column::new(
                "datacenter",
                ColumnType::String,
                "The datacenter the node is registered in.",
            ),
            Column::new(
                "drain",
                ColumnType::Bool,
                "Whether the node is draining allocations.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the node.",
            ),
            Column::new(
                "node_class",
                ColumnType::String,
                "The class assigned to the node.",
            ),
            Column::new(
                "scheduling_eligibility",
                ColumnType::String,
                "Whether the node is eligible for scheduling.",
            ),
            Column::new(
                "status_description",
                ColumnType::String,
                "The description of the node status.",
            ),
            Column::new(
                "version",
                ColumnType::String,
                "The Nomad version the node is running.",
            ),
            Column::new(
                "attributes",
                ColumnType::Json,
                "The attributes fingerprinted on the node.",
            ),
            Column::new(
                "drivers",
                ColumnType::Json,
                "The task drivers available on the node.",
            ),
            Column::new(
                "last_drain",
                ColumnType::Json,
                "Metadata about the most recent drain operation.",
            ),
            Column::new(
                "node_resources",
                ColumnType::Json,
                "The resources available on the node.",
            ),
            Column::new(
                "reserved_resources",
                ColumnType::Json,
                "The resources reserved on the node.",
            ),
            Column::title("Name"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.nodes(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.node(id).boxed_local()
}
