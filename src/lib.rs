//! nomad-tables
//!
//! Exposes a Nomad cluster's control-plane entities (nodes, jobs,
//! deployments, namespaces, ACL objects, CSI volumes and plugins, agent
//! members) as named, column-typed tables. Each table is backed by a paged
//! list hydrate that streams rows to a caller-supplied sink, stopping early on
//! row budget or cancellation, and, where the entity supports it, a
//! single-item get hydrate keyed by ID or name.
//!
//! The crate is deliberately thin glue: upstream payloads are relayed as-is,
//! upstream errors pass through verbatim, and the only error handling is a
//! declarative status-class filter (ignore `404` on lookups, classify `429`
//! retryable).

pub mod api;
pub mod cli;
pub mod config;
pub mod connector;
pub mod query;
pub mod schema;
pub mod tables;

// Re-export the types a consumer needs to run a query end to end.
pub use api::{ApiError, Client, QueryMeta, QueryOptions};
pub use config::{resolve, ConfigLoader, ConnectionConfig, EnvSettings};
pub use connector::{Connector, QueryError};
pub use query::{FnSink, QueryContext, QueryData, Row, RowSink, SinkState};
pub use schema::{Column, ColumnType, Table, Transform};
