use ansi_term::Colour;
use clap::Parser;
use std::net::SocketAddr;
use std::process::Command;
use std::sync::Arc;

use lanshare::cli::Cli;
use lanshare::config::{AppState, Config};
use lanshare::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut cfg = Config::load_from(&cli.config)?;
    cfg.apply_cli(&cli);

    logger::init(&cfg.logging)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, cli.open))
}

async fn async_main(cfg: Config, open: bool) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let state = Arc::new(AppState::new(cfg)?);
    let listener = server::create_listener(addr)?;

    let urls = print_banner(&state, addr);
    if open {
        if let Some(url) = urls.first() {
            open_browser(url);
        }
    }

    server::run(listener, state).await;
    Ok(())
}

/// Print the startup banner and return the URLs the server is reachable on
fn print_banner(state: &AppState, addr: SocketAddr) -> Vec<String> {
    let mut urls = Vec::new();
    // A wildcard bind is not a connectable address; offer loopback first
    if addr.ip().is_unspecified() {
        urls.push(format!("http://127.0.0.1:{}", addr.port()));
    }
    urls.push(format!("http://{addr}"));

    println!("Serving {}", state.base_dir.display());
    println!("{}", Colour::Yellow.paint("\nAvailable on:"));
    for url in &urls {
        println!("{}", Colour::Green.paint(format!("  {url}")));
    }
    println!("{}", Colour::Yellow.paint("\nHit CTRL-C to stop the server"));

    urls
}

/// Launch the system browser on the given URL. Failure is logged, never fatal.
fn open_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", url]).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        logger::log_warning(&format!("Failed to open browser for {url}: {e}"));
    }
}
