//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;
mod output;

pub use commands::{
    handle_config_command, handle_get_command, handle_query_command, handle_tables_command,
    ConfigSubcommand, OutputFormat,
};
pub use logging::init_logging;
