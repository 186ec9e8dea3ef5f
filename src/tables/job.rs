//! The `nomad_job` table.
//!
//! Jobs accept optional `namespace`, `name`, and `create_index` quals on the
//! list path; `name` is pushed down as an upstream filter expression and
//! `create_index` as a prefix match.

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::query::QueryContext;
use crate::schema::{Column, ColumnType, GetConfig, KeyColumn, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_job",
        description: "Retrieve information about your jobs.",
        list: ListConfig {
            key_columns: vec![
                KeyColumn::optional("namespace"),
                KeyColumn::optional("create_index"),
                KeyColumn::optional("name"),
            ],
            fetch: fetch_page,
            apply_quals: Some(apply_quals),
        },
        get: Some(GetConfig {
            key_column: "id",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new("id", ColumnType::String, "Generated UUID for the job.").from_field("ID"),
            Column::new("name", ColumnType::String, "The name of the job."),
            Column::new("status", ColumnType::String, "The status of the job."),
            Column::new(
                "all_at_once",
                ColumnType::Bool,
                "Whether all tasks should be run in parallel or not.",
            ),
            Column::new(
                "consul_namespace",
                ColumnType::String,
                "The Consul namespace used by the job.",
            )
            .from_get(),
            Column::new(
                "consul_token",
                ColumnType::String,
                "Consul token used by the job.",
            )
            .from_get(),
            Column::new("create_index", ColumnType::Int, "Create index of the job.").from_get(),
            Column::new(
                "dispatch_idempotency_token",
                ColumnType::String,
                "The dispatch idempotency token used by the job.",
            )
            .from_get(),
            Column::new(
                "dispatched",
                ColumnType::Bool,
                "Indicates whether the job has been dispatched.",
            )
            .from_get(),
            Column::new(
                "job_modify_index",
                ColumnType::Int,
                "Job modify index of the job.",
            )
            .from_get(),
            Column::new("modify_index", ColumnType::Int, "Modify index of the job.").from_get(),
            Column::new(
                "namespace",
                ColumnType::String,
                "The namespace associated with the job.",
            ),
            Column::new("parent_id", ColumnType::String, "The parent ID of the job.")
                .from_field("ParentID"),
            Column::new("priority", ColumnType::Int, "The priority of the job."),
            Column::new(
                "region",
                ColumnType::String,
                "The region where the job is running.",
            )
            .from_get(),
            Column::new(
                "stable",
                ColumnType::Bool,
                "Indicates whether the job is stable.",
            )
            .from_get(),
            Column::new(
                "status_description",
                ColumnType::String,
                "The description of the status of the job.",
            ),
            Column::new(
                "stop",
                ColumnType::Bool,
                "Indicates whether the job should be stopped.",
            ),
            Column::new(
                "submit_time",
                ColumnType::Timestamp,
                "The time when the job was submitted.",
            )
            .nanos_timestamp("SubmitTime"),
            Column::new("type", ColumnType::String, "The type of job."),
            Column::new(
                "vault_namespace",
                ColumnType::String,
                "The vault namespace used by the job.",
            )
            .from_get(),
            Column::new(
                "vault_token",
                ColumnType::String,
                "Vault token used by the job.",
            )
            .from_get(),
            Column::new("version", ColumnType::Int, "The version of the job.").from_get(),
            Column::new(
                "affinities",
                ColumnType::Json,
                "The list of affinities for the job.",
            )
            .from_get(),
            Column::new(
                "constraints",
                ColumnType::Json,
                "The list of constraints for the job.",
            )
            .from_get(),
            Column::new(
                "datacenters",
                ColumnType::Json,
                "The list of datacenters where the job can be run.",
            ),
            Column::new(
                "migrate",
                ColumnType::Json,
                "The migration strategy for the job.",
            )
            .from_get(),
            Column::new("meta", ColumnType::Json, "Metadata associated with the job."),
            Column::new(
                "multiregion",
                ColumnType::Json,
                "The multi-region settings for the job.",
            )
            .from_get(),
            Column::new(
                "parameterized_job",
                ColumnType::Json,
                "The parameterized job configuration for the job.",
            ),
            Column::new("payload", ColumnType::Json, "The payload of the job.").from_get(),
            Column::new(
                "periodic",
                ColumnType::Json,
                "The periodic configuration for the job.",
            ),
            Column::new(
                "reschedule",
                ColumnType::Json,
                "The rescheduling policy for the job.",
            )
            .from_get(),
            Column::new(
                "spreads",
                ColumnType::Json,
                "The list of spread configurations for the job.",
            )
            .from_get(),
            Column::new(
                "task_groups",
                ColumnType::Json,
                "The list of task groups for the job.",
            )
            .from_get(),
            Column::new(
                "update",
                ColumnType::Json,
                "The update strategy for the job.",
            )
            .from_get(),
            Column::title("Name"),
        ],
    }
}

fn apply_quals(ctx: &QueryContext, opts: &mut QueryOptions) {
    if let Some(ns) = ctx.qual_str("namespace") {
        opts.namespace = Some(ns.to_string());
    }
    if let Some(prefix) = ctx.qual_str("create_index") {
        opts.prefix = Some(prefix.to_string());
    }
    if let Some(name) = ctx.qual_str("name") {
        opts.filter = Some(format!("Name== {name:?}\n"));
    }
}

fn fetch_page<'a>(
    client: &'a Client,
    opts: &'a QueryOptions,
) -> LocalBoxFuture<'a, Result<(Vec<Value>, QueryMeta), ApiError>> {
    client.jobs(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.job(id).boxed_local()
}
