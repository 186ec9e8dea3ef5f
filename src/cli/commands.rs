//! CLI subcommand handlers.

use super::output;
use crate::api::Client;
use crate::config::{self, ConfigLoader, EnvSettings};
use crate::connector::Connector;
use crate::query::{FnSink, QueryContext, QueryData, SinkState};
use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use serde_json::{json, Value};

/// Row output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Tab-separated text with a header line
    Table,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the resolved connection configuration
    Show,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Build a client from the layered connection configuration.
fn build_client() -> Result<Client> {
    let file_config = ConfigLoader::load().context("Failed to load connection configuration")?;
    let resolved = config::resolve(&file_config, &EnvSettings::capture())
        .context("Failed to resolve connection configuration")?;
    Client::new(&resolved).context("Failed to create Nomad client")
}

/// Parse `--where column=value` arguments into a query context.
fn parse_quals(ctx: QueryContext, wheres: &[String]) -> Result<QueryContext> {
    let mut ctx = ctx;
    for clause in wheres {
        let (column, value) = clause
            .split_once('=')
            .with_context(|| format!("Invalid --where clause '{clause}', expected column=value"))?;
        ctx = ctx.with_qual(column.trim(), Value::String(value.trim().to_string()));
    }
    Ok(ctx)
}

/// List the registered tables with their descriptions.
pub fn handle_tables_command(connector: &Connector) {
    for name in connector.table_names() {
        // Registry lookups by listed name always succeed
        if let Some(table) = connector.table(name) {
            println!("{}\t{}", table.name, table.description);
        }
    }
}

/// Run a table's list hydrate and stream rows to stdout.
pub async fn handle_query_command(
    connector: &Connector,
    table_name: &str,
    limit: Option<u64>,
    wheres: &[String],
    enrich: bool,
    format: OutputFormat,
) -> Result<()> {
    let table = connector
        .table(table_name)
        .with_context(|| format!("Unknown table: {table_name}"))?;

    let mut ctx = QueryContext::new();
    ctx.limit = limit;
    let ctx = parse_quals(ctx, wheres)?;
    for column in ctx.quals.keys() {
        if table.column(column).is_none() {
            anyhow::bail!("Unknown column in --where: {column} (table {table_name})");
        }
    }

    if format == OutputFormat::Table {
        let columns: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
        println!("{}", output::render_header(&columns));
    }

    let client = build_client()?;
    let mut data = QueryData::new(
        ctx,
        Box::new(FnSink(move |row| {
            match format {
                OutputFormat::Json => println!("{}", output::render_json(&row)),
                OutputFormat::Table => println!("{}", output::render_text(&row)),
            }
            SinkState::Continue
        })),
    );

    connector
        .run_list(&client, table_name, &mut data, enrich)
        .await
        .with_context(|| format!("Query against {table_name} failed"))?;

    Ok(())
}

/// Look up a single item by key and print it.
pub async fn handle_get_command(
    connector: &Connector,
    table_name: &str,
    key: &str,
    format: OutputFormat,
) -> Result<()> {
    let table = connector
        .table(table_name)
        .with_context(|| format!("Unknown table: {table_name}"))?;

    if format == OutputFormat::Table {
        let columns: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
        println!("{}", output::render_header(&columns));
    }

    let client = build_client()?;
    let mut data = QueryData::new(
        QueryContext::new(),
        Box::new(FnSink(move |row| {
            match format {
                OutputFormat::Json => println!("{}", output::render_json(&row)),
                OutputFormat::Table => println!("{}", output::render_text(&row)),
            }
            SinkState::Continue
        })),
    );

    connector
        .run_get(&client, table_name, key, &mut data)
        .await
        .with_context(|| format!("Lookup against {table_name} failed"))?;

    Ok(())
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => {
            let file_config =
                ConfigLoader::load().context("Failed to load connection configuration")?;
            let env = EnvSettings::capture();
            match config::resolve(&file_config, &env) {
                Ok(resolved) => {
                    // Never print the token itself
                    let summary = json!({
                        "address": resolved.address,
                        "namespace": resolved.namespace,
                        "secret_id_set": resolved.secret_id.is_some(),
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                Err(e) => {
                    eprintln!("Connection configuration incomplete: {e}");
                    std::process::exit(1);
                }
            }
        }
        ConfigSubcommand::Path => {
            println!("{}", config::paths::connection_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {e}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
