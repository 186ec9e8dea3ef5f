//! The `nomad_acl_policy` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::schema::{Column, ColumnType, GetConfig, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_acl_policy",
        description: "Retrieve information about your ACL policies.",
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
            Column::new("name", ColumnType::String, "The name of the policy."),
            Column::new(
                "description",
                ColumnType::String,
                "The description of the policy.",
            ),
            Column::new(
                "rules",
                ColumnType::String,
                "The HCL rules document of the policy.",
            )
            .from_get(),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the policy.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the policy.",
            ),
            Column::new(
                "job_acl",
                ColumnType::Json,
                "The workload association of the policy.",
            )
            .from_field("JobACL")
            .from_get(),
            Column::title("Name"),
        ],
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.acl_policies(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, name: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.acl_policy(name).boxed_local()
}
