//! Connection configuration
//!
//! Resolves Nomad connection parameters (address, namespace, token) from a
//! layered precedence of explicit connection config and environment variables.

mod connection;
mod loader;
pub mod paths;

pub use connection::{resolve, ConnectionConfig, EnvSettings, ResolvedConnection};
pub use loader::ConfigLoader;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "'address' must be set in the connection configuration or via NOMAD_ADDR. \
         Edit your connection configuration file and retry."
    )]
    MissingAddress,

    #[error("invalid Nomad address '{address}': {source}")]
    InvalidAddress {
        address: String,
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}
