//! Connection config file loading.

use super::{paths, ConnectionConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Loads the connection configuration file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the connection config from the default location. A missing file
    /// is not an error; the environment layer still applies.
    pub fn load() -> Result<ConnectionConfig> {
        let path = paths::connection_config_path();
        if !path.exists() {
            return Ok(ConnectionConfig::default());
        }
        Self::load_file(&path)
    }

    /// Load a connection config from an explicit path.
    pub fn load_file(path: &Path) -> Result<ConnectionConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ConnectionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file at the default location, if present.
    pub fn validate() -> Result<()> {
        let path = paths::connection_config_path();
        if path.exists() {
            let _ = Self::load_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file_parses_all_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "address: http://localhost:4646\nnamespace: default\nsecret_id: abc-123"
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.address.as_deref(), Some("http://localhost:4646"));
        assert_eq!(config.namespace.as_deref(), Some("default"));
        assert_eq!(config.secret_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_load_file_fields_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "address: http://localhost:4646").unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert!(config.namespace.is_none());
        assert!(config.secret_id.is_none());
    }

    #[test]
    fn test_load_file_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "address: [unclosed").unwrap();
        assert!(ConfigLoader::load_file(file.path()).is_err());
    }
}
