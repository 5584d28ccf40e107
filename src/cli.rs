//! Command-line interface
//!
//! CLI flags override values from the config file and environment.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "lanshare", version, about = "Serve a directory over HTTP for quick LAN sharing", long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory to serve (defaults to the current working directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Tokio worker threads (defaults to CPU cores)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Config file name, without extension
    #[arg(long, default_value = "lanshare")]
    pub config: String,

    /// Open the served URL in the system browser after startup
    #[arg(long)]
    pub open: bool,

    /// Disable per-request access logging
    #[arg(long)]
    pub no_access_log: bool,
}
