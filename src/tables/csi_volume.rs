//! The `nomad_volume` table (CSI volumes).

use crate::api::{ApiError, Client, QueryMeta, QueryOptions};
use crate::query::QueryContext;
use crate::schema::{Column, ColumnType, GetConfig, KeyColumn, ListConfig, Table};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

pub fn table() -> Table {
    Table {
        name: "nomad_volume",
        description: "Retrieve information about your CSI volumes.",
        list: ListConfig {
            key_columns: vec![KeyColumn::optional("namespace")],
            fetch: fetch_page,
            apply_quals: Some(apply_quals),
        },
        get: Some(GetConfig {
            key_column: "id",
            fetch: fetch_one,
        }),
        columns: vec![
            Column::new("id", ColumnType::String, "The ID of the volume.").from_field("ID"),
            Column::new("name", ColumnType::String, "The display name of the volume."),
            Column::new(
                "external_id",
                ColumnType::String,
                "The ID of the volume in the external storage provider.",
            )
            .from_field("ExternalID"),
            Column::new(
                "namespace",
                ColumnType::String,
                "The namespace the volume belongs to.",
            ),
            Column::new(
                "capacity",
                ColumnType::Int,
                "The capacity of the volume in bytes.",
            )
            .from_get(),
            Column::new(
                "requested_capacity_min",
                ColumnType::Int,
                "The minimum requested capacity in bytes.",
            )
            .from_get(),
            Column::new(
                "requested_capacity_max",
                ColumnType::Int,
                "The maximum requested capacity in bytes.",
            )
            .from_get(),
            Column::new(
                "clone_id",
                ColumnType::String,
                "The ID of the volume this volume was cloned from.",
            )
            .from_field("CloneID")
            .from_get(),
            Column::new(
                "snapshot_id",
                ColumnType::String,
                "The ID of the snapshot this volume was restored from.",
            )
            .from_field("SnapshotID")
            .from_get(),
            Column::new(
                "schedulable",
                ColumnType::Bool,
                "Whether the volume is schedulable.",
            ),
            Column::new(
                "plugin_id",
                ColumnType::String,
                "The ID of the CSI plugin serving the volume.",
            )
            .from_field("PluginID"),
            Column::new(
                "provider",
                ColumnType::String,
                "The storage provider backing the volume.",
            ),
            Column::new(
                "provider_version",
                ColumnType::String,
                "The version of the storage provider.",
            ),
            Column::new(
                "controller_required",
                ColumnType::Bool,
                "Whether the volume requires a plugin controller.",
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
                "resource_exhausted",
                ColumnType::Timestamp,
                "The time the volume last reported resource exhaustion.",
            ),
            Column::new(
                "create_index",
                ColumnType::Int,
                "Create index of the volume.",
            ),
            Column::new(
                "modify_index",
                ColumnType::Int,
                "Modify index of the volume.",
            ),
            Column::new(
                "requested_topologies",
                ColumnType::Json,
                "The topologies requested for the volume.",
            ),
            Column::new(
                "topologies",
                ColumnType::Json,
                "The topologies the volume is accessible from.",
            ),
            Column::new(
                "access_mode",
                ColumnType::Json,
                "The access mode of the volume.",
            ),
            Column::new(
                "attachment_mode",
                ColumnType::Json,
                "The attachment mode of the volume.",
            ),
            Column::new(
                "mount_options",
                ColumnType::Json,
                "The mount options of the volume.",
            )
            .from_get(),
            Column::new(
                "secrets",
                ColumnType::Json,
                "The secrets configured on the volume.",
            )
            .from_get(),
            Column::new(
                "parameters",
                ColumnType::Json,
                "The parameters passed to the storage provider.",
            )
            .from_get(),
            Column::new(
                "context",
                ColumnType::Json,
                "The provider-specific context of the volume.",
            )
            .from_get(),
            Column::new(
                "requested_capabilities",
                ColumnType::Json,
                "The capabilities requested for the volume.",
            ),
            Column::new(
                "read_allocs",
                ColumnType::Json,
                "The allocations reading from the volume.",
            )
            .from_get(),
            Column::new(
                "write_allocs",
                ColumnType::Json,
                "The allocations writing to the volume.",
            )
            .from_get(),
            Column::new(
                "allocations",
                ColumnType::Json,
                "All allocations attached to the volume.",
            )
            .from_get(),
            Column::new(
                "extra_keys_hcl",
                ColumnType::Json,
                "Unparsed HCL keys found on the volume definition.",
            )
            .from_field("ExtraKeysHCL")
            .from_get(),
            Column::title("Name"),
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
    client.csi_volumes(opts).boxed_local()
}

fn fetch_one<'a>(client: &'a Client, id: &'a str) -> LocalBoxFuture<'a, Result<Value, ApiError>> {
    client.csi_volume(id).boxed_local()
}
