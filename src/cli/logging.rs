//! Logging initialization

use std::fs::File;
use std::path::PathBuf;

/// Set up debug logging to a temp file, keeping stdout clean for row output.
/// Returns the log file path when debug logging is enabled.
pub fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        return None;
    }

    let path = log_file_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&path)
        .expect("Failed to open log file");

    install_subscriber(file);
    Some(path)
}

// Named temp file that outlives the handle; the OS cleans it up later.
fn log_file_path() -> PathBuf {
    tempfile::Builder::new()
        .prefix("nomad-tables-")
        .suffix(".log")
        .tempfile()
        .map(|f| {
            let path = f.path().to_path_buf();
            std::mem::forget(f);
            path
        })
        .unwrap_or_else(|_| {
            std::env::temp_dir().join(format!("nomad-tables-{}.log", std::process::id()))
        })
}

fn install_subscriber(file: File) {
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}
