//! The `nomad_acl_auth_method` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::query::QueryContext;
use crate::schema::{Column, ColumnType, GetConfig, KeyColumn, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_acl_auth_method",
        description: "Retrieve information about your ACL auth methods.",
        list: ListConfig {
            key_columns: vec![KeyColumn::optional("datacenter")],
            fetch: fetch_page,
            apply_quals: Some(apply_quals),
        },
        get: Some(GetConfig {
            key_column: "name",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new("name", ColumnType::String, "The name of the auth method."),
            Column::new(
                "type",
                ColumnType::String,
                "The type of the auth method, OIDC or JWT.",
            ),
            Column::new(
                "token_locality",
                ColumnType::String,
                "Whether minted tokens are local or global.",
            ),
            Column::new(
                "max_token_ttl",
                ColumnType::Int,
                "The maximum TTL of tokens minted by the auth method.",
            )
            .from_field("MaxTokenTTL"),
            Column::new(
                "default",
                ColumnType::Bool,
                "Whether this is the default auth method.",
            ),
            Column::new(
                "config",
                ColumnType::Json,
                "The provider configuration of the auth method.",
            )
            .from_get(),
            Column::new(
                "create_time",
                ColumnType::Timestamp,
                "The time the auth method was created.",
            ),
            Column::new(
                "modify_time",
                ColumnType::Timestamp,
                "The time the auth method was last modified.",
            ),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the auth method.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the auth method.",
            ),
            Column::title("Name"),
        ],
    }
}

fn apply_quals(ctx: &QueryContext, opts: &mut QueryOptions) {
    if let Some(region) = ctx.qual_str("datacenter") {
        opts.region = Some(region.to_string());
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.acl_auth_methods(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, name: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.acl_auth_method(name).boxed_local()
}
