//! The `nomad_acl_token` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, GetConfig, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_acl_token",
        description: "Retrieve information about your ACL tokens.",
        list: ListConfig {
            key_columns: vec![],
            fetch: fetch_page,
            apply_quals: None,
        },
        get: Some(GetConfig {
            key_column: "accessor_id",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new(
                "accessor_id",
                ColumnType::String,
                "The public identifier of the token.",
            )
            .from_field("AccessorID"),
            Column::new(
                "secret_id",
                ColumnType::String,
                "The secret bearer value of the token.",
            )
            .from_field("SecretID")
            .from_get(),
            Column::new("name", ColumnType::String, "The name of the token."),
            Column::new(
                "type",
                ColumnType::String,
                "The type of the token, client or management.",
            ),
            Column::new(
                "global",
                ColumnType::Bool,
                "Whether the token is replicated to all regions.",
            ),
            Column::new(
                "create_time",
                ColumnType::Timestamp,
                "The time the token was created.",
            ),
            Column::new(
                "expiration_time",
                ColumnType::Timestamp,
                "The time the token expires, if an expiration is set.",
            ),
            Column::new(
                "expiration_ttl",
                ColumnType::String,
                "The TTL the token was created with.",
            )
            .from_field("ExpirationTTL")
            .from_get(),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the token.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the token.",
            ),
            Column::new(
                "policies",
                ColumnType::Json,
                "The policies attached to the token.",
            ),
            Column::new(
                "roles",
                ColumnType::Json,
                "The roles attached to the token.",
            ),
            Column::title("Name"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.acl_tokens(opts).boxed_local()
}

fn fetch_one<'a>(
    client: &'a Client,
    accessor_id: &'a str,
) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.acl_token(accessor_id).boxed_local()
}
