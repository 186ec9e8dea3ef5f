//! The `nomad_acl_role` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, GetConfig, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_acl_role",
        description: "Retrieve information about your ACL roles.",
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
            Column::new("id", ColumnType::String, "The generated UUID of the role.")
                .from_field("ID"),
            Column::new("name", ColumnType::String, "The name of the role."),
            Column::new(
                "description",
                ColumnType::String,
                "The description of the role.",
            ),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the role.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the role.",
            ),
            Column::new(
                "policies",
                ColumnType::Json,
                "The policies linked to the role.",
            ),
            Column::title("Name"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.acl_roles(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.acl_role(id).boxed_local()
}
