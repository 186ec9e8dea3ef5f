//! The `nomad_deployment` table.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::query::QueryContext;
use crate::schema::{Column, ColumnType, GetConfig, KeyColumn, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_deployment",
        description: "Retrieve information about your deployments.",
        list: ListConfig {
            key_columns: vec![
                KeyColumn::optional("namespace"),
                KeyColumn::optional("status"),
            ],
            fetch: fetch_page,
            apply_quals: Some(apply_quals),
        },
        get: Some(GetConfig {
            key_column: "id",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new("id", ColumnType::String, "The ID of the deployment.").from_field("ID"),
            Column::new(
                "job_id",
                ColumnType::String,
                "The ID of the job the deployment belongs to.",
            )
            .from_field("JobID"),
            Column::new(
                "is_multiregion",
                ColumnType::Bool,
                "Whether the deployment spans multiple regions.",
            ),
            Column::new("status", ColumnType::String, "The status of the deployment."),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the deployment.",
            ),
            Column::new(
                "job_create_index",
                ColumnType::Int,
                "Create index of the job the deployment tracks.",
            ),
            Column::new(
                "job_modify_index",
                ColumnType::Int,
                "Modify index of the job the deployment tracks.",
            ),
            Column::new(
                "job_spec_modify_index",
                ColumnType::Int,
                "Spec modify index of the job the deployment tracks.",
            ),
            Column::new(
                "job_version",
                ColumnType::Int,
                "The version of the job the deployment tracks.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the deployment.",
            ),
            Column::new(
                "namespace",
                ColumnType::String,
                "The namespace the deployment belongs to.",
            ),
            Column::new(
                "status_description",
                ColumnType::String,
                "The description of the deployment status.",
            ),
            Column::new(
                "task_groups",
                ColumnType::Json,
                "The deployment state per task group.",
            ),
            Column::title("ID"),
        ],
    }
}

fn apply_quals(ctx: &QueryContext, opts: &mut QueryOptions) {
    if let Some(ns) = ctx.qual_str("namespace") {
        opts.namespace = Some(ns.to_string());
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.deployments(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.deployment(id).boxed_local()
}
