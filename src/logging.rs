//! Log setup for the binary
//!
//! The terminal belongs to the UI, so log output goes to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber writing to `path`.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(path: &Path, default_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
