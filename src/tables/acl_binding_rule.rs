//! The `nomad_acl_binding_rule` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::query::QueryContext;
use crate::schema::{Column, ColumnType, GetConfig, KeyColumn, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_acl_binding_rule",
        description: "Retrieve information about your ACL binding rules.",
        list: ListConfig {
            key_columns: vec![KeyColumn::optional("datacenter")],
            fetch: fetch_page,
            apply_quals: Some(apply_quals),
        },
        get: Some(GetConfig {
            key_column: "id",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new(
                "id",
                ColumnType::String,
                "An internally generated UUID for this rule, controlled by Nomad.",
            )
            .from_field("ID"),
            Column::new(
                "description",
                ColumnType::String,
                "The description of the binding rule.",
            ),
            Column::new(
                "auth_method",
                ColumnType::String,
                "The name of the auth method this rule applies to.",
            ),
            Column::new(
                "selector",
                ColumnType::String,
                "An expression matched against verified identity attributes returned from the auth method during login.",
            )
            .from_get(),
            Column::new(
                "bind_type",
                ColumnType::String,
                "Adjusts how this binding rule is applied at login time.",
            )
            .from_get(),
            Column::new(
                "bind_name",
                ColumnType::String,
                "The target of the binding.",
            )
            .from_get(),
            Column::new(
                "create_time",
                ColumnType::Timestamp,
                "Create time of the binding rule.",
            )
            .from_get(),
            Column::new(
                "modify_time",
                ColumnType::Timestamp,
                "Last modify time of the binding rule.",
            )
            .from_get(),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the binding rule.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the binding rule.",
            ),
            Column::title("ID"),
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
    client.acl_binding_rules(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.acl_binding_rule(id).boxed_local()
}
