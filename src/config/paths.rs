//! Configuration path resolution.

use std::path::PathBuf;

/// Directory holding the connection configuration.
///
/// `NOMAD_TABLES_CONFIG_DIR` overrides everything; otherwise the platform
/// convention applies (XDG on unix, Known Folders on Windows).
pub fn config_dir() -> PathBuf {
    match std::env::var("NOMAD_TABLES_CONFIG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => platform_config_dir(),
    }
}

#[cfg(not(windows))]
fn platform_config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            directories::BaseDirs::new()
                .map(|dirs| dirs.home_dir().join(".config"))
                .unwrap_or_else(|| PathBuf::from(".").join(".config"))
        });
    base.join("nomad-tables")
}

#[cfg(windows)]
fn platform_config_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "nomad-tables")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".config").join("nomad-tables"))
}

/// Path of the connection configuration file.
pub fn connection_config_path() -> PathBuf {
    config_dir().join("connection.yaml")
}
