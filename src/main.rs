//! nomad-tables - query a Nomad cluster's control-plane entities as tables
//!
//! The binary is a thin host around the connector library: it resolves the
//! connection configuration, picks a table, and streams rows to stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nomad_tables::cli::{
    handle_config_command, handle_get_command, handle_query_command, handle_tables_command,
    init_logging, ConfigSubcommand, OutputFormat,
};
use nomad_tables::Connector;

/// Query Nomad control-plane entities as column-typed tables
#[derive(Parser, Debug)]
#[command(name = "nomad-tables")]
#[command(about = "Query Nomad control-plane entities as column-typed tables", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// List the available tables
    Tables,
    /// Run a table's list hydrate and stream rows
    Query {
        /// Table name, e.g. nomad_job
        table: String,
        /// Row budget; streaming stops once this many rows were emitted
        #[arg(long)]
        limit: Option<u64>,
        /// Equality qual as column=value; repeatable
        #[arg(long = "where", value_name = "COLUMN=VALUE")]
        wheres: Vec<String>,
        /// Populate get-only columns by looking each row up individually
        #[arg(long)]
        enrich: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
    /// Look a single item up by its key column
    Get {
        /// Table name, e.g. nomad_namespace
        table: String,
        /// Key value (ID or name, depending on the table)
        key: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = init_logging(args.debug);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let connector = Connector::new();

    match args.command {
        Command::Tables => {
            handle_tables_command(&connector);
            Ok(())
        }
        Command::Query {
            table,
            limit,
            wheres,
            enrich,
            output,
        } => handle_query_command(&connector, &table, limit, &wheres, enrich, output).await,
        Command::Get { table, key, output } => {
            handle_get_command(&connector, &table, &key, output).await
        }
        Command::Config { subcommand } => handle_config_command(subcommand),
    }
}
