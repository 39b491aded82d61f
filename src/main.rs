// src/main.rs - Desktop entry point

use std::path::PathBuf;

use clap::Parser;

use storefront_admin::config::AppConfig;
use storefront_admin::error::Result;
use storefront_admin::logging::{self, LoggingOptions};
use storefront_admin::ui;

#[derive(Parser)]
#[command(
    name = "storefront-admin",
    version = storefront_admin::VERSION,
    about = "Administrative dashboard for the storefront backend",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend base URL, overriding config and environment
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Directory for daily-rolled log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter.clone()
    };
    let _guard = logging::init(&LoggingOptions {
        filter,
        json: cli.json_logs,
        log_dir: cli.log_dir,
    });

    tracing::info!(
        version = storefront_admin::VERSION,
        api = %config.api_base_url,
        "Starting Storefront Admin"
    );

    let window = dioxus::desktop::WindowBuilder::new()
        .with_title("Storefront Admin")
        .with_resizable(true)
        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1280.0, 840.0));
    let desktop_config = dioxus::desktop::Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(config)
        .launch(ui::App);

    Ok(())
}
