// Application runtime state
// Immutable after startup; shared by Arc across connection tasks.

use std::io;
use std::path::PathBuf;

use super::types::Config;

/// State shared read-only by every request handler
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Canonical base directory all request paths resolve under
    pub base_dir: PathBuf,
}

impl AppState {
    /// Resolve the base directory once and freeze the configuration.
    ///
    /// Fails when the configured root (or the working directory) does not
    /// exist or cannot be canonicalized.
    pub fn new(config: Config) -> io::Result<Self> {
        let base_dir = match config.server.root {
            Some(ref root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let base_dir = base_dir.canonicalize()?;
        Ok(Self { config, base_dir })
    }
}
