//! The `nomad_agent_member` table.
//!
//! List-only: the agent members endpoint has no paging and no single-item
//! lookup. Rows arrive pre-flattened with the serving agent's identity.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_agent_member",
        description: "Retrieve information about the serf cluster members known to the agent.",
        list: ListConfig {
            key_columns: vec![],
            fetch: fetch_page,
            apply_quals: None,
        },
        get: None,
        columns: vec![
            Column::new("name", ColumnType::String, "The name of the member node."),
            Column::new("status", ColumnType::String, "The status of the member."),
            Column::new(
                "server_name",
                ColumnType::String,
                "The name of the server answering the query.",
            ),
            Column::new(
                "server_region",
                ColumnType::String,
                "The region of the server answering the query.",
            ),
            Column::new(
                "server_dc",
                ColumnType::String,
                "The datacenter of the server answering the query.",
            )
            .from_field("ServerDC"),
            Column::new("address", ColumnType::String, "The address of the member.")
                .from_field("Addr"),
            Column::new("port", ColumnType::Int, "The serf port of the member."),
            Column::new(
                "protocol_min",
                ColumnType::Int,
                "Minimum serf protocol version the member supports.",
            ),
            Column::new(
                "protocol_max",
                ColumnType::Int,
                "Maximum serf protocol version the member supports.",
            ),
            Column::new(
                "protocol_cur",
                ColumnType::Int,
                "Serf protocol version the member currently speaks.",
            ),
            Column::new(
                "delegate_min",
                ColumnType::Int,
                "Minimum delegate protocol version the member supports.",
            ),
            Column::new(
                "delegate_max",
                ColumnType::Int,
                "Maximum delegate protocol version the member supports.",
            ),
            Column::new(
                "delegate_cur",
                ColumnType::Int,
                "Delegate protocol version the member currently speaks.",
            ),
            Column::new("tags", ColumnType::Json, "The gossip tags of the member."),
            Column::title("Name"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.agent_members(opts).boxed_local()
}
