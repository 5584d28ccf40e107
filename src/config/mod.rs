// Configuration module entry point
// Layered configuration: built-in defaults, optional TOML file,
// LANSHARE_* environment variables, then CLI overrides.

mod state;
mod types;

use std::net::SocketAddr;

use crate::cli::Cli;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from the specified file path (without extension).
    /// The file is optional; defaults and environment variables apply either way.
    ///
    /// Environment variables reach nested keys with a double underscore:
    /// `LANSHARE_SERVER__PORT=9999` sets `server.port`. Key names keep
    /// their own single underscores (`LANSHARE_LOGGING__ACCESS_LOG`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("LANSHARE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    /// Apply command-line overrides on top of file/env values
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref host) = cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(ref root) = cli.root {
            self.server.root = Some(root.clone());
        }
        if let Some(workers) = cli.workers {
            self.server.workers = Some(workers);
        }
        if cli.no_access_log {
            self.logging.access_log = false;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Mutex;

    // The environment source reads process-wide state; tests touching or
    // observing it must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let cfg = Config::load_from("does-not-exist").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.root.is_none());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_cli_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut cfg = Config::load_from("does-not-exist").unwrap();
        let cli = Cli::parse_from([
            "lanshare",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--root",
            "/tmp",
            "--no-access-log",
        ]);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.root.as_deref(), Some(std::path::Path::new("/tmp")));
        assert!(!cfg.logging.access_log);
    }

    #[test]
    fn test_file_layer_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("lanshare.toml"),
            "[server]\nhost = \"127.0.0.1\"\nport = 9001\n\n\
             [logging]\naccess_log = false\naccess_log_format = \"json\"\n",
        )
        .unwrap();

        let path = dir.path().join("lanshare");
        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9001);
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "json");
    }

    #[test]
    fn test_env_layer_reaches_nested_keys() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("LANSHARE_SERVER__PORT", "9999");
        std::env::set_var("LANSHARE_SERVER__HOST", "192.168.1.5");
        let cfg = Config::load_from("does-not-exist");
        std::env::remove_var("LANSHARE_SERVER__PORT");
        std::env::remove_var("LANSHARE_SERVER__HOST");

        let cfg = cfg.unwrap();
        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.server.host, "192.168.1.5");
    }

    #[test]
    fn test_env_layer_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lanshare.toml"), "[server]\nport = 9001\n").unwrap();

        std::env::set_var("LANSHARE_SERVER__PORT", "9999");
        let path = dir.path().join("lanshare");
        let cfg = Config::load_from(path.to_str().unwrap());
        std::env::remove_var("LANSHARE_SERVER__PORT");

        assert_eq!(cfg.unwrap().server.port, 9999);
    }

    #[test]
    fn test_socket_addr() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut cfg = Config::load_from("does-not-exist").unwrap();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 8081;
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:8081");
    }
}
