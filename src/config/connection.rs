//! Connection parameter resolution
//!
//! Precedence (highest first): explicit connection config fields, then the
//! standard Nomad environment variables (`NOMAD_ADDR`, `NOMAD_NAMESPACE`,
//! `NOMAD_TOKEN`). Resolution is pure over an environment snapshot so the
//! precedence rules are testable without touching process env.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Connection configuration as written in the config file. All fields are
/// optional; anything unset falls back to the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
}

/// Snapshot of the Nomad environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub address: Option<String>,
    pub namespace: Option<String>,
    pub token: Option<String>,
}

impl EnvSettings {
    /// Capture the process environment. Empty values count as unset.
    pub fn capture() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        }
        Self {
            address: var("NOMAD_ADDR"),
            namespace: var("NOMAD_NAMESPACE"),
            token: var("NOMAD_TOKEN"),
        }
    }
}

/// Fully resolved connection settings a client can be built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConnection {
    pub address: String,
    pub namespace: Option<String>,
    pub secret_id: Option<String>,
}

/// Merge config and environment by precedence. Errors when no address is
/// available from either layer.
pub fn resolve(config: &ConnectionConfig, env: &EnvSettings) -> Result<ResolvedConnection, ConfigError> {
    let address = config
        .address
        .clone()
        .or_else(|| env.address.clone())
        .ok_or(ConfigError::MissingAddress)?;

    Ok(ResolvedConnection {
        address,
        namespace: config.namespace.clone().or_else(|| env.namespace.clone()),
        secret_id: config.secret_id.clone().or_else(|| env.token.clone()),
    })
}
