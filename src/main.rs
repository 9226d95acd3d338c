//! Bookings service
//!
//! Room reservation web service. Reads configuration from TOML
//! (`~/.config/bookings/config.toml` by default).

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use bookings::config::{default_config_path, AppConfig, CONFIG_ENV};
use bookings::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Debug, Parser)]
#[command(name = "bookings-service", version, about = "Room reservation service")]
struct Cli {
    /// Config file path
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override `server.port`
    #[arg(short, long)]
    port: Option<u16>,

    /// Override `logging.level` (e.g. "debug", "bookings=trace")
    #[arg(long)]
    log_level: Option<String>,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check: bool,

    /// Do not run database migrations on startup
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Some(port) = cli.port {
        app_cfg.server.port = port;
    }
    if let Some(level) = cli.log_level {
        app_cfg.logging.level = level;
    }

    if cli.check {
        println!("# {}", config_path.display());
        print!("{}", app_cfg.to_toml());
        return Ok(());
    }

    init_tracing(&app_cfg);
    info!("Configuration loaded from {}", config_path.display());

    let handle = match ServerHandle::start(ServerOptions {
        config: app_cfg,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start bookings service: {}", e);
            return Err(e);
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully");
    handle.wait().await;
    Ok(())
}
